//! Read-only state snapshot for the presentation layer.

use serde::Serialize;

/// Everything the presentation layer may see, captured once per tick.
/// The presenter renders from this; it never touches physics state.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WorldSnapshot {
    pub bar_pos: [f32; 2],
    pub bar_angle: f32,
    pub bar_half_length: f32,
    pub ball_pos: [f32; 2],
    pub ball_radius: f32,
    /// Score of the trial in progress.
    pub score: u32,
    /// Running average, present only once the session has completed.
    pub average_score: Option<f64>,
}
