use crate::config::{ROOT_RANK, SEQ_BASELINE, TAG_DATA, TAG_SIZE};
use crate::matrix::{self, Elem};
use crate::partition::PartitionPlan;
use crate::report::{BaselineReport, RunReport};
use chrono::Utc;
use mpi::collective::SystemOperation;
use mpi::request::WaitGuard;
use mpi::topology::Rank;
use mpi::traits::*;

/// Run the coordinator role: distribute one chunk per worker, compute the
/// local share while the payload sends are in flight, then root the
/// collective reduction and assemble the run report.
///
/// For each worker the chunk size goes out first as a blocking send, then the
/// payload as a non-blocking send on a separate tag, so the worker can size
/// its receive buffer before the data arrives. The payload requests are held
/// by [`WaitGuard`]s for the duration of the request scope, which keeps the
/// dataset borrow alive until every transmission has completed.
pub fn run<C: Communicator>(world: &C, data: &[Elem], plan: &PartitionPlan, seed: u64) -> RunReport {
    let baseline = if SEQ_BASELINE {
        let started = mpi::time();
        let checksum = matrix::partial_sum(data);
        Some(BaselineReport {
            elapsed_ms: (mpi::time() - started) * 1_000.0,
            checksum,
        })
    } else {
        None
    };

    // The measured window covers distribution, local compute and the
    // reduction; dataset generation and the baseline stay outside it.
    let started = mpi::time();

    let local = mpi::request::scope(|scope| {
        let chunk_size = plan.chunk_size() as u64;
        let mut guards = Vec::with_capacity(plan.worker_count());

        for worker in 1..=plan.worker_count() {
            let process = world.process_at_rank(worker as Rank);
            process.send_with_tag(&chunk_size, TAG_SIZE);
            guards.push(WaitGuard::from(process.immediate_send_with_tag(
                scope,
                &data[plan.chunk_range(worker)],
                TAG_DATA,
            )));
        }

        // Overlaps with the outstanding sends; the dataset is read-only
        // after generation, so the concurrent read is safe.
        local_sum(data, plan)
    });

    let mut aggregate: i64 = 0;
    world
        .process_at_rank(ROOT_RANK)
        .reduce_into_root(&local, &mut aggregate, SystemOperation::sum());

    RunReport {
        timestamp: Utc::now(),
        seed,
        world_size: plan.worker_count() + 1,
        element_count: data.len(),
        chunk_size: plan.chunk_size(),
        remainder: plan.remainder(),
        baseline,
        elapsed_ms: (mpi::time() - started) * 1_000.0,
        aggregate,
    }
}

/// The coordinator's own share: its chunk plus the undistributed tail.
fn local_sum(data: &[Elem], plan: &PartitionPlan) -> i64 {
    matrix::partial_sum(&data[plan.chunk_range(0)]) + matrix::partial_sum(&data[plan.tail_range()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_sum_includes_the_tail() {
        // 16 elements over 3 ranks: own chunk [0,5) sums to 15, the leftover
        // element 16 lands on the coordinator as well.
        let data: Vec<Elem> = (1..=16).collect();
        let plan = PartitionPlan::new(16, 3).unwrap();

        assert_eq!(local_sum(&data, &plan), 15 + 16);
    }

    #[test]
    fn test_local_sum_even_split_has_no_tail() {
        let data: Vec<Elem> = (1..=16).collect();
        let plan = PartitionPlan::new(16, 4).unwrap();

        assert_eq!(local_sum(&data, &plan), 1 + 2 + 3 + 4);
    }

    #[test]
    fn test_simulated_run_matches_sequential_sum() {
        // Sum each rank's share in-process; the reduction is a plain sum, so
        // this mirrors what the distributed run aggregates.
        let data: Vec<Elem> = (1..=101).collect();

        for world_size in 1..=6 {
            let plan = PartitionPlan::new(data.len(), world_size).unwrap();

            let mut aggregate = local_sum(&data, &plan);
            for worker in 1..world_size {
                aggregate += matrix::partial_sum(&data[plan.chunk_range(worker)]);
            }

            assert_eq!(aggregate, matrix::partial_sum(&data));
        }
    }

    #[test]
    fn test_aggregate_is_invariant_under_chunk_permutation() {
        let data: Vec<Elem> = (1..=16).collect();
        let plan = PartitionPlan::new(16, 3).unwrap();

        let chunks = [
            matrix::partial_sum(&data[plan.chunk_range(1)]),
            matrix::partial_sum(&data[plan.chunk_range(2)]),
        ];
        let forward: i64 = local_sum(&data, &plan) + chunks[0] + chunks[1];
        let reversed: i64 = chunks[1] + chunks[0] + local_sum(&data, &plan);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_fixed_16_element_3_rank_shares() {
        // 16 fixed elements, 3 ranks, chunk = 5: shares are 15, 40 and 65,
        // and the tail element (16) goes to the coordinator.
        let data: Vec<Elem> = (1..=16).collect();
        let plan = PartitionPlan::new(16, 3).unwrap();

        assert_eq!(matrix::partial_sum(&data[plan.chunk_range(1)]), 40);
        assert_eq!(matrix::partial_sum(&data[plan.chunk_range(2)]), 65);
        assert_eq!(local_sum(&data, &plan), 31);
    }
}
