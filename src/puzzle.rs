//! Puzzle parameters and the index-selection kernel.
//!
//! Ported from `pos.go` in the upstream `pos` module: `Puzzle`,
//! `selectIndices`, `PreseedIndices`, `SolutionIndices`.

use crate::error::PuzzleError;
use crate::prng::Prng;
use num_bigint::BigUint;

/// Immutable descriptor for a proof-of-space puzzle.
pub struct Puzzle {
    /// Size of the declared storage domain, in bytes. Offsets live in `[0, claim)`.
    pub claim: u64,
    /// The seeded PRNG used to materialize the claim.
    pub prng: Box<dyn Prng>,
    /// Number of preseed-fixpoint rounds.
    pub preseed_rounds: u64,
    /// Width, in bytes, of one raw index sample (big-endian unsigned).
    pub index_size: u32,
    /// Number of output bytes in a solution.
    pub solution_size: u32,
}

impl Puzzle {
    /// Constructs a new puzzle, validating the invariants from the data model:
    /// `index_size >= 1`, `solution_size >= 1`, `claim >= index_size`.
    pub fn new(
        claim: u64,
        prng: Box<dyn Prng>,
        preseed_rounds: u64,
        index_size: u32,
        solution_size: u32,
    ) -> Result<Self, PuzzleError> {
        if index_size == 0 {
            return Err(PuzzleError::DecodeFailed(
                "index_size must be at least 1 byte".into(),
            ));
        }
        if solution_size == 0 {
            return Err(PuzzleError::DecodeFailed(
                "solution_size must be at least 1 byte".into(),
            ));
        }
        if claim < index_size as u64 {
            return Err(PuzzleError::DecodeFailed(format!(
                "claim {claim} must be at least index_size {index_size}"
            )));
        }

        Ok(Self {
            claim,
            prng,
            preseed_rounds,
            index_size,
            solution_size,
        })
    }

    /// The kernel of the whole system: derives a fresh PRNG from `seed` and
    /// reads `index_size`-byte big-endian samples, reducing each modulo
    /// `claim`, until `n` indices are collected or the claim domain is
    /// exhausted (whichever comes first — the PRNG is never re-wrapped).
    pub fn select_indices(&self, n: u64, seed: &[u8]) -> Result<Vec<u64>, PuzzleError> {
        let mut prng = self.prng.derive(seed)?;

        let index_size = self.index_size as usize;
        let mut raw = vec![0u8; index_size];
        let base = BigUint::from(self.claim);

        let mut indices = Vec::with_capacity(n as usize);
        let mut j: u64 = 0;
        while j < self.claim && (indices.len() as u64) < n {
            prng.read_full(&mut raw)?;

            let ith = BigUint::from_bytes_be(&raw) % &base;
            indices.push(biguint_to_u64(&ith));

            j += self.index_size as u64;
        }

        Ok(indices)
    }

    /// `select_indices(n - 1, seed)` with `claim - 1` appended — the final
    /// forced entry anchors the preseed into the last byte of the claim.
    pub fn preseed_indices(&self, n: u64, seed: &[u8]) -> Result<Vec<u64>, PuzzleError> {
        let mut indices = self.select_indices(n.saturating_sub(1), seed)?;
        indices.push(self.claim - 1);
        Ok(indices)
    }

    /// Derives the solution-index list from a `preseed` and a verifier-chosen
    /// `mask` of equal length: `seed[i] = preseed[i] XOR mask[i]`.
    pub fn solution_indices(&self, preseed: &[u8], mask: &[u8]) -> Result<Vec<u64>, PuzzleError> {
        if mask.len() != preseed.len() {
            return Err(PuzzleError::MaskSizeMismatch {
                mask: mask.len(),
                preseed: preseed.len(),
            });
        }

        let seed: Vec<u8> = preseed.iter().zip(mask).map(|(p, m)| p ^ m).collect();

        self.select_indices(self.solution_size as u64, &seed)
    }
}

fn biguint_to_u64(value: &BigUint) -> u64 {
    let digits = value.to_u64_digits();
    digits.first().copied().unwrap_or(0)
}
