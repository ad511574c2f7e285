//! # Pivot-Bar Binary
//!
//! Runs the torque-actuated seesaw balance simulation for a fixed number
//! of scored trials and prints the average score. The balance policy is
//! autonomous; the only input the process consumes is a quit request at
//! the presentation boundary.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use runtime::app::{self, RunOptions};

use harness::HarnessConfig;

/// Seconds the final report stays on screen before the process exits.
const EXIT_DELAY_SECS: u64 = 3;

#[derive(Parser, Debug)]
#[command(name = "pivot_bar", about = "Seesaw balance simulator")]
struct Args {
    /// Number of scored trials to run.
    #[arg(long)]
    trials: Option<usize>,

    /// Optional JSON config file overriding the harness defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log a snapshot line every N frames (0 disables).
    #[arg(long, default_value_t = 0)]
    snapshot_every: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            HarnessConfig::from_json(&text)?
        }
        None => HarnessConfig::default(),
    };
    if let Some(trials) = args.trials {
        config.trials = trials;
    }

    let options = RunOptions {
        config,
        snapshot_every: args.snapshot_every,
        exit_delay: Duration::from_secs(EXIT_DELAY_SECS),
    };

    match app::run(&options) {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!("simulation failed: {e:?}");
            Err(e)
        }
    }
}
