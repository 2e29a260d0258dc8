//! Concrete PRNG: AES-128/192/256 in CBC mode encrypting an all-zero
//! plaintext, read as a contiguous keystream.
//!
//! Ported from `lib/aesprng/aesprng.go` in the upstream `pos` module: a
//! `cipher.BlockMode` wrapping `aes.NewCipher(key)` + `cipher.NewCBCEncrypter`,
//! fed a growable zero-filled scratch buffer. The Rust port dispatches over
//! `aes::{Aes128, Aes192, Aes256}` behind `cbc::Encryptor` since the seed
//! length (and thus the key width) is only known at runtime.

use crate::error::PuzzleError;
use crate::prng::Prng;
use aes::{Aes128, Aes192, Aes256};
use cipher::generic_array::GenericArray;
use cipher::{BlockEncryptMut, KeyIvInit};
use std::fmt;

const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

type Aes128CbcEnc = cbc::Encryptor<Aes128>;
type Aes192CbcEnc = cbc::Encryptor<Aes192>;
type Aes256CbcEnc = cbc::Encryptor<Aes256>;

enum Cipher {
    Aes128(Box<Aes128CbcEnc>),
    Aes192(Box<Aes192CbcEnc>),
    Aes256(Box<Aes256CbcEnc>),
}

/// The AES-CBC PRNG. The seed is `key ‖ iv`; the key's length (16, 24, or 32
/// bytes) selects AES-128/192/256.
pub struct AesCbcPrng {
    key: Vec<u8>,
    iv: Vec<u8>,
    cipher: Cipher,
}

impl fmt::Debug for AesCbcPrng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCbcPrng")
            .field("key_len", &self.key.len())
            .field("iv_len", &self.iv.len())
            .finish()
    }
}

/// Splits a combined `key ‖ iv` seed into its `(key, iv)` parts, dispatching
/// on total length: 32 (AES-128), 40 (AES-192), or 48 (AES-256) bytes.
pub fn split_seed(seed: &[u8]) -> Result<(&[u8], &[u8]), PuzzleError> {
    let key_len = match seed.len() {
        32 => 16,
        40 => 24,
        48 => 32,
        other => return Err(PuzzleError::InvalidSeedSize(other)),
    };
    let (key, iv) = seed.split_at(key_len);
    debug_assert_eq!(iv.len(), IV_LEN);
    Ok((key, iv))
}

impl AesCbcPrng {
    /// Constructs a new AES-CBC PRNG from a raw `key` and `iv`. `key.len()`
    /// must be 16, 24, or 32; `iv.len()` must be 16.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, PuzzleError> {
        if iv.len() != IV_LEN {
            return Err(PuzzleError::InvalidSeedSize(key.len() + iv.len()));
        }

        let cipher = match key.len() {
            16 => Cipher::Aes128(Box::new(
                Aes128CbcEnc::new_from_slices(key, iv)
                    .map_err(|e| PuzzleError::CipherInitFailed(e.to_string()))?,
            )),
            24 => Cipher::Aes192(Box::new(
                Aes192CbcEnc::new_from_slices(key, iv)
                    .map_err(|e| PuzzleError::CipherInitFailed(e.to_string()))?,
            )),
            32 => Cipher::Aes256(Box::new(
                Aes256CbcEnc::new_from_slices(key, iv)
                    .map_err(|e| PuzzleError::CipherInitFailed(e.to_string()))?,
            )),
            other => return Err(PuzzleError::InvalidSeedSize(other + iv.len())),
        };

        Ok(Self {
            key: key.to_vec(),
            iv: iv.to_vec(),
            cipher,
        })
    }

    /// Constructs a new AES-CBC PRNG from a combined `key ‖ iv` seed (see
    /// [`split_seed`]).
    pub fn from_seed(seed: &[u8]) -> Result<Self, PuzzleError> {
        let (key, iv) = split_seed(seed)?;
        Self::new(key, iv)
    }

    fn encrypt_zero_blocks(cipher: &mut Cipher, buf: &mut [u8]) {
        for chunk in buf.chunks_exact_mut(BLOCK_LEN) {
            chunk.fill(0);
            let block = GenericArray::from_mut_slice(chunk);
            match cipher {
                Cipher::Aes128(c) => c.encrypt_block_mut(block),
                Cipher::Aes192(c) => c.encrypt_block_mut(block),
                Cipher::Aes256(c) => c.encrypt_block_mut(block),
            }
        }
    }
}

impl Prng for AesCbcPrng {
    fn read_full(&mut self, buf: &mut [u8]) -> Result<(), PuzzleError> {
        if buf.len() % BLOCK_LEN != 0 {
            return Err(PuzzleError::ShortRead {
                wanted: buf.len(),
                got: (buf.len() / BLOCK_LEN) * BLOCK_LEN,
            });
        }
        Self::encrypt_zero_blocks(&mut self.cipher, buf);
        Ok(())
    }

    fn derive(&self, seed: &[u8]) -> Result<Box<dyn Prng>, PuzzleError> {
        Ok(Box::new(Self::from_seed(seed)?))
    }

    fn clone_stream(&self) -> Result<Box<dyn Prng>, PuzzleError> {
        Ok(Box::new(Self::new(&self.key, &self.iv)?))
    }

    fn seed(&self) -> Vec<u8> {
        let mut seed = Vec::with_capacity(self.key.len() + self.iv.len());
        seed.extend_from_slice(&self.key);
        seed.extend_from_slice(&self.iv);
        seed
    }

    fn variant(&self) -> &'static str {
        "aes"
    }
}
