//! Cross-checks the central correctness property: for any puzzle, preseed
//! index list, and mask, the stream and disk solvers must agree
//! byte-for-byte.

use pos_puzzle::prng::aes_cbc::AesCbcPrng;
use pos_puzzle::prng::Prng;
use pos_puzzle::{DiskSolver, Puzzle, Solver, StreamSolver};
use std::io::{Cursor, Read, Seek, SeekFrom};

fn aes_puzzle(
    claim: u64,
    index_size: u32,
    solution_size: u32,
    preseed_rounds: u64,
    seed: &[u8],
) -> Puzzle {
    let prng = AesCbcPrng::from_seed(seed).unwrap();
    Puzzle::new(claim, Box::new(prng), preseed_rounds, index_size, solution_size).unwrap()
}

fn solve_both(puzzle: &Puzzle, preseed_indices: Vec<u64>, mask: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut stream = StreamSolver::new();
    stream.prepare(puzzle).unwrap();
    let stream_solution = stream.solve(puzzle, preseed_indices.clone(), mask).unwrap();

    let mut disk = DiskSolver::new(Cursor::new(Vec::new()));
    disk.prepare(puzzle).unwrap();
    let disk_solution = disk.solve(puzzle, preseed_indices, mask).unwrap();

    (stream_solution, disk_solution)
}

// Scenario A: C=1024, S=4, R=0, zero seed, zero mask.
#[test]
fn scenario_a_matches() {
    let zero_seed = vec![0u8; 32];
    let puzzle = aes_puzzle(1024, 16, 4, 0, &zero_seed);
    let preseed_indices = puzzle.preseed_indices(48, &zero_seed).unwrap();
    let mask = vec![0u8; 48];

    let (stream, disk) = solve_both(&puzzle, preseed_indices, &mask);
    assert_eq!(stream, disk);
    assert_eq!(stream.len(), 4);
}

// Scenario B: C=4096, S=8, R=1, zero seed, zero mask.
#[test]
fn scenario_b_matches() {
    let zero_seed = vec![0u8; 32];
    let puzzle = aes_puzzle(4096, 16, 8, 1, &zero_seed);
    let preseed_indices = puzzle.preseed_indices(48, &zero_seed).unwrap();
    let mask = vec![0u8; 48];

    let (stream, disk) = solve_both(&puzzle, preseed_indices, &mask);
    assert_eq!(stream, disk);
}

// Scenario C: C=4096, S=8, R=3, zero seed, random-ish mask.
#[test]
fn scenario_c_matches() {
    let zero_seed = vec![0u8; 32];
    let puzzle = aes_puzzle(4096, 16, 8, 3, &zero_seed);
    let preseed_indices = puzzle.preseed_indices(48, &zero_seed).unwrap();
    let mask: Vec<u8> = (0u8..48).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect();

    let (stream, disk) = solve_both(&puzzle, preseed_indices, &mask);
    assert_eq!(stream, disk);
}

// Scenario D: C=1024, S=1, R=0, preseed indices forced to [1023].
// solution[0] must equal the byte at offset 1023 of the claim stream, which
// both solvers must reproduce identically regardless of how they read it.
#[test]
fn scenario_d_matches_claim_byte_at_last_offset() {
    let zero_seed = vec![0u8; 32];
    let puzzle = aes_puzzle(1024, 16, 1, 0, &zero_seed);
    let preseed_indices = vec![1023u64];
    let mask = vec![0u8; 1];

    let (stream, disk) = solve_both(&puzzle, preseed_indices, &mask);
    assert_eq!(stream, disk);
    assert_eq!(stream.len(), 1);
}

#[test]
fn disk_image_matches_prng_stream_on_claim_range() {
    let seed = vec![5u8; 40]; // AES-192
    let puzzle = aes_puzzle(3000, 16, 4, 0, &seed);

    let mut disk = DiskSolver::new(Cursor::new(Vec::new()));
    disk.prepare(&puzzle).unwrap();
    let image = disk.into_inner().into_inner();

    let mut expected_stream = puzzle.prng.clone_stream().unwrap();
    // The PRNG is only ever read in 1024-byte chunks; regenerate enough
    // chunks to cover the claim and compare the addressed prefix.
    let mut expected = vec![0u8; 3072];
    expected_stream.read_full(&mut expected).unwrap();

    assert_eq!(&image[..3000], &expected[..3000]);
}

// The spec's primary disk-solver handle is a file, not an in-memory cursor;
// exercise that path with a real `tempfile::NamedTempFile` standing in for
// the `-i image_path` the external CLI would open.
#[test]
fn disk_solver_over_a_real_file_matches_stream_solver() {
    let zero_seed = vec![0u8; 32];
    let puzzle = aes_puzzle(2048, 16, 4, 1, &zero_seed);
    let preseed_indices = puzzle.preseed_indices(48, &zero_seed).unwrap();
    let mask = vec![0u8; 48];

    let mut stream = StreamSolver::new();
    let stream_solution = stream
        .solve(&puzzle, preseed_indices.clone(), &mask)
        .unwrap();

    let file = tempfile::NamedTempFile::new().unwrap();
    let mut disk = DiskSolver::new(file);
    disk.prepare(&puzzle).unwrap();
    let disk_solution = disk.solve(&puzzle, preseed_indices, &mask).unwrap();

    assert_eq!(stream_solution, disk_solution);

    // The image on disk must agree with the claim stream on [0, claim).
    let mut file = disk.into_inner().reopen().unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();
    let mut on_disk = vec![0u8; 2048];
    file.read_exact(&mut on_disk).unwrap();

    let mut expected_stream = puzzle.prng.clone_stream().unwrap();
    let mut expected = vec![0u8; 2048];
    expected_stream.read_full(&mut expected).unwrap();
    assert_eq!(on_disk, expected);
}

#[test]
fn varying_preseed_rounds_changes_solution() {
    let seed = vec![9u8; 32];
    let mask = vec![1u8; 48];

    let puzzle_r0 = aes_puzzle(4096, 16, 8, 0, &seed);
    let preseed_indices_r0 = puzzle_r0.preseed_indices(48, &seed).unwrap();
    let mut stream0 = StreamSolver::new();
    let solution_r0 = stream0
        .solve(&puzzle_r0, preseed_indices_r0, &mask)
        .unwrap();

    let puzzle_r1 = aes_puzzle(4096, 16, 8, 1, &seed);
    let preseed_indices_r1 = puzzle_r1.preseed_indices(48, &seed).unwrap();
    let mut stream1 = StreamSolver::new();
    let solution_r1 = stream1
        .solve(&puzzle_r1, preseed_indices_r1, &mask)
        .unwrap();

    assert_ne!(solution_r0, solution_r1);
}

#[test]
fn zero_preseed_rounds_means_two_passes_worth_of_state() {
    // With R=0, solve() calls from_indices exactly twice (one preseed pass,
    // one solution pass); verify this indirectly by checking the solution
    // only depends on the initial preseed indices and mask, not on any
    // intermediate regeneration.
    let seed = vec![2u8; 32];
    let puzzle = aes_puzzle(2048, 16, 4, 0, &seed);
    let preseed_indices = puzzle.preseed_indices(16, &seed).unwrap();
    let mask = vec![0u8; 16];

    let mut solver_a = StreamSolver::new();
    let a = solver_a
        .solve(&puzzle, preseed_indices.clone(), &mask)
        .unwrap();

    let mut solver_b = StreamSolver::new();
    let b = solver_b.solve(&puzzle, preseed_indices, &mask).unwrap();

    assert_eq!(a, b);
}
