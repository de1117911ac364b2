use std::{error::Error, io, path::PathBuf};

use clap::Parser;
use log::info;
use lp_interact::{run_trace, InteractorConfig, Mode};

/// Replays a transaction trace against a fresh lending pool and prints the
/// state after every line.
#[derive(Debug, Parser)]
#[command(name = "lp-trace", version)]
struct Args {
    /// Trace file, one call per line.
    trace: PathBuf,

    /// TOML file with runner settings and the initial pool configuration.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print exact fractions instead of six significant digits.
    #[arg(short, long)]
    precise: bool,

    /// Call the pool directly instead of going through wallets.
    #[arg(long)]
    pool_only: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => InteractorConfig::load(path)?,
        None => InteractorConfig::default(),
    };
    if args.precise {
        config.precise = true;
    }
    if args.pool_only {
        config.mode = Mode::Pool;
    }

    let trace = std::fs::read_to_string(&args.trace)?;
    let mut target = config.target()?;

    let stdout = io::stdout();
    let summary = run_trace(&trace, &mut target, config.precise, &mut stdout.lock())?;
    info!(
        "{} applied, {} reverted, {} skipped, {} unparsable",
        summary.applied, summary.reverted, summary.skipped, summary.parse_errors
    );

    target.pool().check_invariants()?;
    Ok(())
}
