use anyhow::{Result, bail};
use std::ops::Range;

/// How the dataset is split across the ranks of the run.
///
/// Every rank, the coordinator included, owns the contiguous range
/// `[chunk_size * rank, chunk_size * (rank + 1))` where
/// `chunk_size = element_count / world_size` (truncating). When the element
/// count is not evenly divisible, the leftover tail is assigned to the
/// coordinator's local computation rather than silently dropped, so the
/// aggregate always covers the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartitionPlan {
    element_count: usize,
    world_size: usize,
    chunk_size: usize,
}

impl PartitionPlan {
    pub fn new(element_count: usize, world_size: usize) -> Result<Self> {
        if world_size == 0 {
            bail!("world size must be at least 1");
        }

        Ok(Self {
            element_count,
            world_size,
            chunk_size: element_count / world_size,
        })
    }

    /// Number of elements sent to each worker (and kept by the coordinator
    /// as its own chunk).
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of non-coordinator ranks.
    pub fn worker_count(&self) -> usize {
        self.world_size - 1
    }

    /// Elements left over after the even split; covered by [`tail_range`].
    ///
    /// [`tail_range`]: PartitionPlan::tail_range
    pub fn remainder(&self) -> usize {
        self.element_count - self.chunk_size * self.world_size
    }

    /// The contiguous range owned by `rank`.
    pub fn chunk_range(&self, rank: usize) -> Range<usize> {
        debug_assert!(rank < self.world_size);
        let start = self.chunk_size * rank;
        start..start + self.chunk_size
    }

    /// The undistributed tail, summed locally by the coordinator.
    pub fn tail_range(&self) -> Range<usize> {
        self.chunk_size * self.world_size..self.element_count
    }
}
