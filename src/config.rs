//! Compile-time benchmark configuration.
//!
//! The benchmark is sized at compile time, mirroring classic MPI
//! micro-benchmarks: the only runtime knobs are the RNG seed and the
//! output format (see `cli.rs`).

use mpi::topology::Rank;

/// Side length of the square matrix; the dataset holds `MATRIX_DIM^2` elements.
pub const MATRIX_DIM: usize = 512;

/// Total number of dataset elements.
pub const ELEMENT_COUNT: usize = MATRIX_DIM * MATRIX_DIM;

/// Elements are drawn uniformly from `[0, VALUE_BOUND)`.
pub const VALUE_BOUND: i32 = 10_000;

/// Emit the single-threaded baseline (duration + checksum) before the
/// distributed phase. The distributed timing window starts after it either way.
pub const SEQ_BASELINE: bool = true;

/// The coordinating rank: generates the dataset, distributes work, and roots
/// the final reduction.
pub const ROOT_RANK: Rank = 0;

/// Tag for the per-worker chunk-size message (one `u64`).
pub const TAG_SIZE: i32 = 0;

/// Tag for the per-worker payload message (`chunk_size` elements).
pub const TAG_DATA: i32 = 1;
