#![deny(clippy::all, clippy::pedantic)]
//! # Balance Control Policy
//!
//! The autonomous control law for the pivot-bar simulator: a
//! velocity-gated proportional-bang-bang heuristic. It reacts only when
//! the ball's horizontal speed leaves a deadband *and* the ball sits on
//! the wrong half of the platform, and then it commands a single fixed
//! torque magnitude, never an intermediate value. The resulting
//! oscillatory bursts of corrective torque are the reference behavior the
//! scoring harness measures — deliberately a reactive heuristic, not an
//! optimal controller, and the chattering must not be smoothed away.
//!
//! The policy is a pure function of the observation; it mutates nothing.
//! Whoever consumes the command applies it for exactly one tick — there
//! is no stale-torque carry-over between ticks.

use physics::{PhysicsWorld, Seesaw};

/// The slice of world state the policy reads, captured once per tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Observation {
    pub ball_x: f32,
    pub ball_vx: f32,
    pub bar_x: f32,
    /// Half-length of the bar surface.
    pub half_length: f32,
}

impl Observation {
    /// Read the current observation out of a seesaw scene.
    #[must_use]
    pub fn capture(world: &PhysicsWorld, seesaw: &Seesaw) -> Self {
        Self {
            ball_x: seesaw.ball_position(world).x,
            ball_vx: seesaw.ball_velocity(world).x,
            bar_x: seesaw.bar_position(world).x,
            half_length: seesaw.config.bar_half_length,
        }
    }
}

/// Velocity-gated bang-bang balance policy.
///
/// In screen coordinates a negative torque raises the platform's right
/// end, so a ball sliding right on the right half gets `-torque_magnitude`
/// and a ball sliding left on the left half gets `+torque_magnitude`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BangBangPolicy {
    /// Fixed command magnitude. Tunable; must be large enough to produce
    /// a perceptible angular acceleration within one tick for the bar's
    /// configured inertia.
    pub torque_magnitude: f32,
    /// Ball speeds inside `±speed_deadband` provoke no command.
    pub speed_deadband: f32,
}

impl Default for BangBangPolicy {
    fn default() -> Self {
        Self {
            torque_magnitude: 500_000.0,
            speed_deadband: 1.0,
        }
    }
}

impl BangBangPolicy {
    /// Evaluate the control law for one tick. `None` means no command is
    /// issued; the caller applies nothing and the bar coasts.
    #[must_use]
    pub fn command(&self, obs: &Observation) -> Option<f32> {
        let half_left = obs.bar_x - obs.half_length * 0.5;
        let half_right = obs.bar_x + obs.half_length * 0.5;

        if obs.ball_vx > self.speed_deadband && obs.ball_x > half_left {
            Some(-self.torque_magnitude)
        } else if obs.ball_vx < -self.speed_deadband && obs.ball_x < half_right {
            Some(self.torque_magnitude)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(ball_x: f32, ball_vx: f32) -> Observation {
        Observation {
            ball_x,
            ball_vx,
            bar_x: 400.0,
            half_length: 200.0,
        }
    }

    #[test]
    fn fast_rightward_ball_on_right_half_gets_negative_torque() {
        let policy = BangBangPolicy::default();
        // half_left = 300; anywhere right of it triggers
        let command = policy.command(&obs(301.0, 2.0));
        assert_eq!(command, Some(-500_000.0));
    }

    #[test]
    fn fast_leftward_ball_on_left_half_gets_positive_torque() {
        let policy = BangBangPolicy::default();
        // half_right = 500; anywhere left of it triggers
        let command = policy.command(&obs(499.0, -2.0));
        assert_eq!(command, Some(500_000.0));
    }

    #[test]
    fn speed_inside_deadband_issues_no_command() {
        let policy = BangBangPolicy::default();
        assert_eq!(policy.command(&obs(450.0, 0.0)), None);
        assert_eq!(policy.command(&obs(450.0, 1.0)), None);
        assert_eq!(policy.command(&obs(450.0, -1.0)), None);
    }

    #[test]
    fn fast_ball_on_recovering_half_issues_no_command() {
        let policy = BangBangPolicy::default();
        // moving right but still left of half_left: gravity will bring it back
        assert_eq!(policy.command(&obs(299.0, 2.0)), None);
        // moving left but right of half_right
        assert_eq!(policy.command(&obs(501.0, -2.0)), None);
    }

    #[test]
    fn command_magnitude_is_exactly_the_configured_torque() {
        let policy = BangBangPolicy {
            torque_magnitude: 123.0,
            speed_deadband: 1.0,
        };
        assert_eq!(policy.command(&obs(450.0, 1.5)), Some(-123.0));
    }
}
