//! Canonical JSON encoding of a puzzle descriptor, consumed by the
//! external CLI. Ported conceptually from the upstream `pos`/`aesprng`
//! `json:"..."` struct tags (`cmd/puzzle.go`'s embedded `puzzle` type), since
//! the Go source marshals its `Puzzle` + PRNG state directly; here the wire
//! shape is made explicit and independent of the runtime `Puzzle`/`Prng`
//! types.

use crate::error::PuzzleError;
use crate::prng::aes_cbc::AesCbcPrng;
use crate::prng::Prng;
use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};

/// Wire shape of the `prng` field: a `type` tag plus a base64 `seed`. Decoded
/// as a plain struct (rather than a serde-tagged enum) so an unrecognized
/// `type` value can be reported as [`PuzzleError::InvalidPrngType`] instead
/// of a generic decode failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrngDescriptor {
    /// PRNG variant tag. Only `"aes"` is defined today.
    #[serde(rename = "type")]
    pub kind: String,
    /// Base64-encoded seed (`key ‖ iv` for the `"aes"` variant).
    pub seed: String,
}

/// The canonical JSON form of a [`Puzzle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PuzzleDescriptor {
    /// Size of the declared storage domain, in bytes.
    pub claim: i64,
    /// The PRNG variant and its seed.
    pub prng: PrngDescriptor,
    /// Number of preseed-fixpoint rounds.
    pub preseed_rounds: i64,
    /// Width, in bytes, of one raw index sample.
    pub index_size: i64,
    /// Number of output bytes in a solution.
    pub solution_size: i64,
}

impl PuzzleDescriptor {
    /// Decodes a puzzle descriptor from its canonical JSON form. Malformed
    /// JSON fails with [`PuzzleError::DecodeFailed`].
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        serde_json::from_str(json).map_err(|e| PuzzleError::DecodeFailed(e.to_string()))
    }

    /// Encodes this descriptor to its canonical JSON form.
    pub fn to_json(&self) -> Result<String, PuzzleError> {
        serde_json::to_string(self).map_err(|e| PuzzleError::DecodeFailed(e.to_string()))
    }

    /// Builds a runtime [`Puzzle`] from this descriptor, decoding the base64
    /// seed and constructing the named PRNG variant. Fails with
    /// [`PuzzleError::InvalidPrngType`] if `prng.type` is not `"aes"`.
    pub fn to_puzzle(&self) -> Result<Puzzle, PuzzleError> {
        if self.prng.kind != "aes" {
            return Err(PuzzleError::InvalidPrngType(self.prng.kind.clone()));
        }

        let seed_bytes =
            base64::decode(&self.prng.seed).map_err(|e| PuzzleError::DecodeFailed(e.to_string()))?;
        let prng = AesCbcPrng::from_seed(&seed_bytes)?;

        if self.claim < 0
            || self.preseed_rounds < 0
            || self.index_size <= 0
            || self.solution_size <= 0
        {
            return Err(PuzzleError::DecodeFailed(
                "claim/preseed_rounds must be non-negative and index_size/solution_size must be positive".into(),
            ));
        }

        Puzzle::new(
            self.claim as u64,
            Box::new(prng),
            self.preseed_rounds as u64,
            self.index_size as u32,
            self.solution_size as u32,
        )
    }

    /// Builds a descriptor from a runtime `Puzzle`'s AES-CBC PRNG and
    /// parameters. Only the `"aes"` variant is representable today.
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        let seed = puzzle.prng.seed();
        PuzzleDescriptor {
            claim: puzzle.claim as i64,
            prng: PrngDescriptor {
                kind: puzzle.prng.variant().to_string(),
                seed: base64::encode(seed),
            },
            preseed_rounds: puzzle.preseed_rounds as i64,
            index_size: puzzle.index_size as i64,
            solution_size: puzzle.solution_size as i64,
        }
    }
}
