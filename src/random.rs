//! Cryptographically random byte generation for seeds and masks.
//!
//! Never used on the deterministic solving path — only to mint the initial
//! puzzle seed, the preseed-index seed, and the mask (see `puzzle create` /
//! `puzzle mask` in the external CLI).

use crate::error::PuzzleError;

/// Returns `n` cryptographically random bytes from the host OS CSPRNG.
pub fn new_random_bytes(n: usize) -> Result<Vec<u8>, PuzzleError> {
    let mut buf = vec![0u8; n];
    getrandom::getrandom(&mut buf)?;
    Ok(buf)
}
