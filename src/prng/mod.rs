//! PRNG abstraction: a seeded, deterministic, clonable byte stream.
//!
//! Concrete variants (currently only [`aes_cbc::AesCbcPrng`]) are selected at
//! construction — from a [`crate::codec::PuzzleDescriptor`]'s `prng.type` tag
//! — and dispatched dynamically, since the puzzle descriptor names the
//! variant at decode time rather than at compile time.

pub mod aes_cbc;

use crate::error::PuzzleError;
use std::fmt::Debug;

/// A seeded, deterministic byte stream usable as the engine for a [`crate::puzzle::Puzzle`].
///
/// Two `Prng`s constructed from equal seeds (of the same concrete variant)
/// produce identical infinite byte streams. `read_full` never returns short;
/// it only fails on a catastrophic underlying error.
pub trait Prng: Debug + Send {
    /// Fill `buf` with the next `buf.len()` deterministic bytes, advancing the stream.
    fn read_full(&mut self, buf: &mut [u8]) -> Result<(), PuzzleError>;

    /// Construct a new PRNG of the same concrete variant, seeded with `seed`.
    fn derive(&self, seed: &[u8]) -> Result<Box<dyn Prng>, PuzzleError>;

    /// Construct a new PRNG of the same concrete variant, reseeded with this
    /// PRNG's *original* seed. The returned stream starts at position 0 and
    /// equals this PRNG's original stream byte-for-byte.
    fn clone_stream(&self) -> Result<Box<dyn Prng>, PuzzleError>;

    /// Return a copy of the original seed this PRNG was constructed from.
    fn seed(&self) -> Vec<u8>;

    /// A short tag identifying the concrete variant (e.g. `"aes"`), used by
    /// the JSON codec.
    fn variant(&self) -> &'static str;
}
