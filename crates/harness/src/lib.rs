#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
//! # Trial Harness
//!
//! Drives the balance simulation through repeated scored trials. A trial
//! runs the per-tick pipeline — observe, command, apply, step, check —
//! until the ball leaves the platform, then scores the trial by elapsed
//! simulated time. A session strings a fixed number of trials together,
//! resetting the world in place between them, and reports the running
//! total, the best trial, and the real-valued average.
//!
//! Scoring uses the tick counter, never the wall clock, so two sessions
//! with identical constants produce identical reports.

mod config;
mod session;
mod snapshot;
mod trial;

pub use config::HarnessConfig;
pub use session::{Session, SessionReport};
pub use snapshot::WorldSnapshot;
pub use trial::{TrialPhase, TrialRunner};
