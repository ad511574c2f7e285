//! A session of scored trials.

use physics::WorldError;
use serde::Serialize;

use crate::config::HarnessConfig;
use crate::snapshot::WorldSnapshot;
use crate::trial::{TrialPhase, TrialRunner};

/// Final session results. Only completed trials contribute; a trial
/// interrupted by a quit request is dropped, never summed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub trial_scores: Vec<u32>,
    pub total_score: u32,
    pub best_score: u32,
    /// Real-valued mean of the completed trials (not integer division).
    pub average_score: f64,
}

impl SessionReport {
    fn from_scores(trial_scores: Vec<u32>) -> Self {
        let total_score: u32 = trial_scores.iter().sum();
        let best_score = trial_scores.iter().copied().max().unwrap_or(0);
        let average_score = if trial_scores.is_empty() {
            0.0
        } else {
            f64::from(total_score) / trial_scores.len() as f64
        };
        Self {
            trial_scores,
            total_score,
            best_score,
            average_score,
        }
    }
}

/// Runs a configured number of trials and accumulates the report.
pub struct Session {
    runner: TrialRunner,
    config: HarnessConfig,
}

impl Session {
    /// Build the world once for the whole session. Configuration errors
    /// are fatal here, before any trial runs.
    pub fn new(config: HarnessConfig) -> Result<Self, WorldError> {
        let runner = TrialRunner::new(&config)?;
        Ok(Self { runner, config })
    }

    /// Run every trial to completion. `frame` is invoked after each tick
    /// with the presentation snapshot and returns `true` to request quit;
    /// quitting drops the in-progress trial's score and reports only the
    /// trials completed so far.
    pub fn run<F>(&mut self, mut frame: F) -> SessionReport
    where
        F: FnMut(&WorldSnapshot) -> bool,
    {
        let mut trial_scores = Vec::with_capacity(self.config.trials);

        for trial in 0..self.config.trials {
            tracing::info!("Starting run {}/{}", trial + 1, self.config.trials);
            self.runner.begin_trial();

            loop {
                let phase = self.runner.tick();

                if frame(&self.runner.snapshot(None)) {
                    tracing::info!(
                        "Quit requested during run {}; dropping its score",
                        trial + 1
                    );
                    return SessionReport::from_scores(trial_scores);
                }

                if phase == TrialPhase::OffPlatform {
                    break;
                }
                if self.runner.ticks() >= self.config.max_ticks {
                    tracing::warn!(
                        "Run {} hit the {}-tick cap; ending it with its accrued score",
                        trial + 1,
                        self.config.max_ticks
                    );
                    break;
                }
            }

            let score = self.runner.score();
            tracing::info!("Run {} finished. Score: {}", trial + 1, score);
            trial_scores.push(score);
        }

        SessionReport::from_scores(trial_scores)
    }

    #[must_use]
    pub fn runner(&self) -> &TrialRunner {
        &self.runner
    }

    pub fn runner_mut(&mut self) -> &mut TrialRunner {
        &mut self.runner
    }

    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }
}
