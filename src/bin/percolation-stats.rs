use clap::Parser;
use u_percolation::ExperimentConfig;

/// Estimate the percolation threshold of an N-by-N grid.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Grid side length N
    grid_size: usize,

    /// Number of independent trials T
    trials: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = ExperimentConfig::new(args.grid_size, args.trials);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let summary = config.build()?.into_summary()?;

    println!("mean                    = {}", summary.mean);
    println!("stddev                  = {}", summary.stddev);
    println!(
        "95% confidence interval = [{}, {}]",
        summary.confidence.low, summary.confidence.high
    );
    Ok(())
}
