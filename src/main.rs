use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use mpi::Threading;
use mpi::topology::SimpleCommunicator;
use mpi::traits::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use scattersum::cli::Cli;
use scattersum::config::{ELEMENT_COUNT, ROOT_RANK};
use scattersum::partition::PartitionPlan;
use scattersum::{coordinator, matrix, report, worker};
use std::process;

fn main() {
    let cli = Cli::parse();

    // The transport overlaps non-blocking sends with local compute, so the
    // run requires full multi-threaded initialization.
    let Some((universe, threading)) = mpi::initialize_with_threading(Threading::Multiple) else {
        eprintln!("Error: failed to initialize the MPI transport");
        process::exit(1);
    };
    let world = universe.world();

    if threading != Threading::Multiple {
        if world.rank() == ROOT_RANK {
            eprintln!("multi-threaded MPI is unavailable; skipping run");
        }
        // Dropping the universe finalizes the transport; this is a clean,
        // zero-status shutdown.
        return;
    }

    if let Err(e) = run(&cli, &world) {
        eprintln!("Error: {:#}", e);
        // Take the other ranks down too; they would otherwise block forever
        // on a message that is never coming.
        world.abort(1);
    }
}

fn run(cli: &Cli, world: &SimpleCommunicator) -> Result<()> {
    if world.rank() == ROOT_RANK {
        let seed = cli
            .seed
            .unwrap_or_else(|| Utc::now().timestamp_millis() as u64);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let data = matrix::generate(ELEMENT_COUNT, &mut rng)?;
        let plan = PartitionPlan::new(data.len(), world.size() as usize)?;

        let run_report = coordinator::run(world, &data, &plan, seed);

        if cli.json {
            report::print_json(&run_report)?;
        } else if !cli.quiet {
            report::print_summary(&run_report);
        }
    } else {
        worker::run(world)?;
    }

    Ok(())
}
