//! Presentation boundary.
//!
//! The simulation exposes a read-only [`WorldSnapshot`] per tick and
//! consumes a single quit-requested boolean; nothing else crosses the
//! boundary. A windowed renderer would implement [`Presenter`] against
//! its event loop — the runtime ships the headless implementation.

use harness::WorldSnapshot;

/// Receives one snapshot per tick. Returns `true` when the user asked to
/// quit; the session then drops the in-progress trial and winds down.
pub trait Presenter {
    fn frame(&mut self, snapshot: &WorldSnapshot) -> bool;
}

/// Headless presenter: logs a snapshot line every `every` frames (0
/// disables) and never requests quit.
pub struct HeadlessPresenter {
    every: u64,
    frames: u64,
}

impl HeadlessPresenter {
    #[must_use]
    pub fn new(every: u64) -> Self {
        Self { every, frames: 0 }
    }
}

impl Presenter for HeadlessPresenter {
    fn frame(&mut self, snapshot: &WorldSnapshot) -> bool {
        self.frames += 1;
        if self.every != 0 && self.frames % self.every == 0 {
            tracing::debug!(
                frame = self.frames,
                ball_x = snapshot.ball_pos[0],
                ball_y = snapshot.ball_pos[1],
                bar_angle = snapshot.bar_angle,
                score = snapshot.score,
                "tick"
            );
        }
        false
    }
}
