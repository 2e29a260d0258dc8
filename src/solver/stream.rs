//! Stream solver: regenerate the claim from the PRNG and bucket-scan for the
//! requested offsets. Ported from `stream.go` in the upstream `pos` module.

use crate::error::PuzzleError;
use crate::prng::Prng;
use crate::puzzle::Puzzle;
use crate::solver::Solver;
use std::collections::HashMap;

/// Tuning constant: bytes regenerated per PRNG pass before bucketing into the
/// requested-index map. Must be a multiple of 16 (the AES block size).
const BLOCK: u64 = 1024;

/// Regenerates the claim from the puzzle's PRNG for each lookup rather than
/// storing it; one PRNG pass answers every index requested in that pass.
#[derive(Default)]
pub struct StreamSolver {
    _private: (),
}

impl StreamSolver {
    /// Constructs a new stream solver.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Single-pass bucketed lookup: one PRNG stream traversal of the claim
    /// answers every offset in `indices` simultaneously.
    fn from_indices(&self, puzzle: &Puzzle, indices: &[u64]) -> Result<Vec<u8>, PuzzleError> {
        let mut prng = puzzle.prng.clone_stream()?;

        let mut mapper: HashMap<u64, u8> = HashMap::with_capacity(indices.len());
        let mut last = vec![0u8; BLOCK as usize];

        let mut i: u64 = 0;
        while i < puzzle.claim {
            // Always regenerated in full BLOCK-sized chunks, mirroring the
            // upstream Go implementation; only offsets in [0, claim) are ever
            // addressed by a valid index, so the trailing overshoot is inert.
            prng.read_full(&mut last)?;

            for &idx in indices {
                if idx >= i && idx < i + BLOCK {
                    mapper.insert(idx, last[(idx - i) as usize]);
                }
            }

            i += BLOCK;
        }

        let mut out = Vec::with_capacity(indices.len());
        for &idx in indices {
            let byte = *mapper
                .get(&idx)
                .ok_or(PuzzleError::ShortRead { wanted: 1, got: 0 })?;
            out.push(byte);
        }

        Ok(out)
    }
}

impl Solver for StreamSolver {
    fn prepare(&mut self, _puzzle: &Puzzle) -> Result<(), PuzzleError> {
        // No-op: the stream solver never materializes the claim. It exists
        // only to satisfy the `Solver` contract shared with the disk solver.
        Ok(())
    }

    fn solve(
        &mut self,
        puzzle: &Puzzle,
        mut preseed_indices: Vec<u64>,
        mask: &[u8],
    ) -> Result<Vec<u8>, PuzzleError> {
        let mut preseed = Vec::new();

        for _ in 0..puzzle.preseed_rounds {
            preseed = self.from_indices(puzzle, &preseed_indices)?;
            preseed_indices = puzzle.preseed_indices(preseed_indices.len() as u64, &preseed)?;
        }

        preseed = self.from_indices(puzzle, &preseed_indices)?;

        let solution_indices = puzzle.solution_indices(&preseed, mask)?;

        self.from_indices(puzzle, &solution_indices)
    }
}
