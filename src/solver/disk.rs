//! Disk solver: materialize the claim once, answer lookups with seek+read.
//! Ported from `disk.go` in the upstream `pos` module.

use crate::error::PuzzleError;
use crate::prng::Prng;
use crate::puzzle::Puzzle;
use crate::solver::Solver;
use std::io::{Read, Seek, SeekFrom, Write};

const BLOCK: u64 = 1024;

/// Owns a read/write/seek handle (a file, or an in-memory cursor for tests)
/// and materializes the claim into it once, then answers every lookup with a
/// seek plus a single-byte read.
pub struct DiskSolver<Rw> {
    out: Rw,
}

impl<Rw> DiskSolver<Rw>
where
    Rw: Read + Write + Seek,
{
    /// Takes ownership of `out` as the claim image handle.
    pub fn new(out: Rw) -> Self {
        Self { out }
    }

    /// Returns the wrapped handle, consuming the solver.
    pub fn into_inner(self) -> Rw {
        self.out
    }

    fn from_indices(&mut self, indices: &[u64]) -> Result<Vec<u8>, PuzzleError> {
        let mut out = Vec::with_capacity(indices.len());
        let mut byte = [0u8; 1];

        for &idx in indices {
            self.out
                .seek(SeekFrom::Start(idx))
                .map_err(|e| PuzzleError::SeekFailed(idx, e.to_string()))?;
            self.out.read_exact(&mut byte).map_err(|_| PuzzleError::ShortRead {
                wanted: 1,
                got: 0,
            })?;
            out.push(byte[0]);
        }

        Ok(out)
    }
}

impl<Rw> Solver for DiskSolver<Rw>
where
    Rw: Read + Write + Seek,
{
    fn prepare(&mut self, puzzle: &Puzzle) -> Result<(), PuzzleError> {
        let mut prng = puzzle.prng.clone_stream()?;
        let mut last = vec![0u8; BLOCK as usize];

        let mut i: u64 = 0;
        while i < puzzle.claim {
            prng.read_full(&mut last)?;
            self.out
                .write_all(&last)
                .map_err(|_| PuzzleError::ShortWrite {
                    wanted: last.len(),
                    wrote: 0,
                })?;
            i += BLOCK;
        }

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
            preseed = self.from_indices(&preseed_indices)?;
            preseed_indices = puzzle.preseed_indices(preseed_indices.len() as u64, &preseed)?;
        }

        preseed = self.from_indices(&preseed_indices)?;

        let solution_indices = puzzle.solution_indices(&preseed, mask)?;

        self.from_indices(&solution_indices)
    }
}
