//! Error taxonomy for puzzle construction, PRNG derivation, and solving.

use std::io;

/// Errors raised while constructing, deriving, or solving a puzzle.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// A PRNG seed was not one of the accepted lengths for its variant.
    #[error("invalid seed size {0} bytes")]
    InvalidSeedSize(usize),

    /// A serialized puzzle named a PRNG variant this crate does not implement.
    #[error("invalid prng type {0:?}")]
    InvalidPrngType(String),

    /// The underlying AES key schedule rejected the key.
    #[error("cipher initialization failed: {0}")]
    CipherInitFailed(String),

    /// An underlying reader returned fewer bytes than requested with no further progress possible.
    #[error("short read: wanted {wanted} bytes, got {got}")]
    ShortRead {
        /// Bytes requested.
        wanted: usize,
        /// Bytes actually read.
        got: usize,
    },

    /// An underlying writer returned fewer bytes than requested with no further progress possible.
    #[error("short write: wanted {wanted} bytes, wrote {wrote}")]
    ShortWrite {
        /// Bytes requested.
        wanted: usize,
        /// Bytes actually written.
        wrote: usize,
    },

    /// A seek to a valid claim offset failed.
    #[error("seek to offset {0} failed: {1}")]
    SeekFailed(u64, String),

    /// `solution_indices` was called with a mask whose length does not match the preseed.
    #[error("mask size mismatch: mask is {mask} bytes, preseed is {preseed} bytes")]
    MaskSizeMismatch {
        /// Length of the supplied mask.
        mask: usize,
        /// Length of the preseed it was XORed against.
        preseed: usize,
    },

    /// A puzzle descriptor failed to decode (malformed JSON or invalid field values).
    #[error("failed to decode puzzle: {0}")]
    DecodeFailed(String),

    /// An underlying I/O error that does not map to a more specific variant above.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The host OS CSPRNG failed to fill a random buffer.
    #[error("system randomness unavailable: {0}")]
    RandomSourceFailed(#[from] getrandom::Error),
}
