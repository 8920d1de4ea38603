use clap::Parser;

#[derive(Parser)]
#[command(name = "scattersum")]
#[command(about = "Distributed scatter/compute/reduce benchmark over MPI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seed for the dataset generator (defaults to wall-clock time)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,

    /// Suppress human-readable output (useful with --json)
    #[arg(long)]
    pub quiet: bool,
}
