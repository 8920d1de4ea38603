//! Distributed scatter/compute/reduce benchmark over MPI.
//!
//! Rank 0 generates a random square matrix, hands every other rank a
//! contiguous chunk (size first, payload as a non-blocking send), sums its
//! own chunk while those sends are in flight, and aggregates all partial
//! sums through a collective reduction. The elapsed time of that distributed
//! window is reported alongside an optional single-threaded baseline.

pub mod cli;
pub mod config;
pub mod coordinator;
pub mod matrix;
pub mod partition;
pub mod report;
pub mod worker;
