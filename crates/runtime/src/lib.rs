#![deny(clippy::all, clippy::pedantic)]
//! # Pivot-Bar Runtime
//!
//! Entry point for the pivot-bar balance simulator. The runtime ties the
//! sibling crates together and owns the presentation boundary:
//!
//! -   **`physics`** (via `harness`): the 2D rigid-body world — the
//!     pivoted bar, its joints, the ball, and the fixed-step solver.
//! -   **`control`** (via `harness`): the autonomous bang-bang balance
//!     policy.
//! -   **`harness`**: scored trials and the session report.
//! -   **this crate**: CLI parsing, logging setup, the [`presenter`]
//!     boundary the simulation hands its read-only snapshots to, and
//!     process exit.
//!
//! The simulation core never blocks on presentation: a presenter only
//! receives one snapshot per tick and answers whether the user asked to
//! quit.

pub mod app;
pub mod presenter;
