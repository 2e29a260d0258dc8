//! A deterministic proof-of-space (PoS) puzzle engine.
//!
//! A verifier commits a small puzzle description and challenges a prover
//! claiming to hold `claim` bytes of dedicated storage. The prover answers
//! with a short solution whose cheapest computation path is to have those
//! bytes materialized on disk (random-access seek+read) rather than
//! regenerated on demand from a PRNG (linear scan). The gap between the two
//! paths, amplified across preseed rounds, lets the verifier distinguish a
//! stored claim from a recomputed one.
//!
//! This crate implements the core engine: the seeded AES-CBC stream PRNG
//! ([`prng`]), the puzzle's index-selection kernel ([`puzzle`]), and the two
//! solvers ([`solver::StreamSolver`], [`solver::DiskSolver`]) that answer a
//! challenge by two different paths but must agree byte-for-byte. The
//! command-line surface, JSON-over-stdin plumbing, and the stream-vs-disk
//! timing harness are external collaborators, not part of this crate.

pub mod codec;
pub mod error;
pub mod estimate;
pub mod prng;
pub mod puzzle;
pub mod random;
pub mod solver;

pub use codec::PuzzleDescriptor;
pub use error::PuzzleError;
pub use estimate::estimate_preseed_rounds;
pub use puzzle::Puzzle;
pub use random::new_random_bytes;
pub use solver::{DiskSolver, Solver, StreamSolver};
