//! Solver contract shared by the stream and disk solvers.

pub mod disk;
pub mod stream;

use crate::error::PuzzleError;
use crate::puzzle::Puzzle;

/// A type implementing `Solver` can prepare and solve a given [`Puzzle`].
pub trait Solver {
    /// Prepares the solver for a puzzle (e.g. materializing the claim image).
    fn prepare(&mut self, puzzle: &Puzzle) -> Result<(), PuzzleError>;

    /// Answers a challenge: `preseed_indices` seeds the preseed fixpoint loop,
    /// `mask` is XORed into the final preseed to derive the solution-index seed.
    fn solve(
        &mut self,
        puzzle: &Puzzle,
        preseed_indices: Vec<u64>,
        mask: &[u8],
    ) -> Result<Vec<u8>, PuzzleError>;
}

pub use disk::DiskSolver;
pub use stream::StreamSolver;
