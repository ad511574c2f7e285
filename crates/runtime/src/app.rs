//! Application orchestration.
//!
//! [`run`] builds the session, drives every trial through the presenter
//! boundary, reports the final average as text and waits out a short
//! fixed delay so the last frame stays visible before the process exits.

use std::time::Duration;

use anyhow::{Context, Result};
use harness::{HarnessConfig, Session, SessionReport};

use crate::presenter::{HeadlessPresenter, Presenter};

/// Everything `run` needs, already parsed and loaded.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub config: HarnessConfig,
    /// Log a snapshot line every N frames; 0 disables.
    pub snapshot_every: u64,
    /// Pause before returning, after the final report.
    pub exit_delay: Duration,
}

/// Run a full scoring session headlessly.
///
/// # Errors
///
/// Returns an error if the world configuration is invalid; this happens
/// before the first trial starts.
pub fn run(options: &RunOptions) -> Result<SessionReport> {
    tracing::info!(
        trials = options.config.trials,
        "initializing balance simulation"
    );
    let mut session =
        Session::new(options.config.clone()).context("failed to build simulation world")?;

    let mut presenter = HeadlessPresenter::new(options.snapshot_every);
    let report = session.run(|snapshot| presenter.frame(snapshot));

    tracing::info!(
        trials = report.trial_scores.len(),
        total = report.total_score,
        best = report.best_score,
        "session complete"
    );
    println!("Average Score: {:.2}", report.average_score);

    if !options.exit_delay.is_zero() {
        std::thread::sleep(options.exit_delay);
    }
    Ok(report)
}
