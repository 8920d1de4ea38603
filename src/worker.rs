use crate::config::{ROOT_RANK, TAG_DATA, TAG_SIZE};
use crate::matrix::{self, Elem};
use anyhow::{Context, Result};
use mpi::collective::SystemOperation;
use mpi::traits::*;

/// Run the worker role: receive the chunk size, then the payload, sum it and
/// contribute the partial sum to the reduction rooted at the coordinator.
///
/// Both receives block. The buffer is allocated to exactly the announced
/// size before the payload is requested; a zero-sized chunk still completes
/// the handshake (an empty receive matches the coordinator's empty send) and
/// contributes a zero partial sum.
pub fn run<C: Communicator>(world: &C) -> Result<()> {
    let root = world.process_at_rank(ROOT_RANK);

    let (announced, _status) = root.receive_with_tag::<u64>(TAG_SIZE);
    let count = usize::try_from(announced).context("announced chunk size does not fit in usize")?;

    let mut chunk: Vec<Elem> = Vec::new();
    chunk
        .try_reserve_exact(count)
        .context(format!("failed to allocate partition buffer ({} elements)", count))?;
    chunk.resize(count, 0);

    root.receive_into_with_tag(&mut chunk[..], TAG_DATA);

    let local = matrix::partial_sum(&chunk);
    root.reduce_into(&local, SystemOperation::sum());

    Ok(())
}
