//! A single scored trial.

use control::{BangBangPolicy, Observation};
use physics::{PhysicsWorld, Seesaw, SeesawConfig, WorldError};

use crate::config::HarnessConfig;
use crate::snapshot::WorldSnapshot;

/// Trial state machine: `Running` until the ball leaves the platform,
/// then `OffPlatform`, which is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrialPhase {
    Running,
    OffPlatform,
}

/// Owns the world, the scene and the policy, and advances one trial at a
/// time. The world is built once; trials only reset its state vectors.
pub struct TrialRunner {
    world: PhysicsWorld,
    seesaw: Seesaw,
    policy: BangBangPolicy,
    ticks: u32,
    phase: TrialPhase,
}

impl TrialRunner {
    /// Build the world and scene. Any configuration error surfaces here,
    /// before the first trial starts.
    pub fn new(config: &HarnessConfig) -> Result<Self, WorldError> {
        let mut world = PhysicsWorld::new();
        let seesaw = Seesaw::build(&mut world, SeesawConfig::default())?;
        Ok(Self {
            world,
            seesaw,
            policy: BangBangPolicy {
                torque_magnitude: config.torque_magnitude,
                speed_deadband: config.speed_deadband,
            },
            ticks: 0,
            phase: TrialPhase::Running,
        })
    }

    /// Reset the scene to its spawn state and start counting from zero.
    pub fn begin_trial(&mut self) {
        self.seesaw.reset(&mut self.world);
        self.ticks = 0;
        self.phase = TrialPhase::Running;
    }

    /// One tick of the trial pipeline: evaluate the policy, apply any
    /// commanded torque, step the world, then check the platform edges.
    /// When no command is issued the bar's accumulator stays empty, so
    /// the net control torque that tick is zero — commands never persist
    /// across ticks.
    pub fn tick(&mut self) -> TrialPhase {
        if self.phase == TrialPhase::OffPlatform {
            return self.phase;
        }

        let obs = Observation::capture(&self.world, &self.seesaw);
        if let Some(torque) = self.policy.command(&obs) {
            self.seesaw.apply_bar_torque(&mut self.world, torque);
        }

        self.world.step();
        self.ticks += 1;

        if self.seesaw.ball_off_platform(&self.world) {
            self.phase = TrialPhase::OffPlatform;
        }
        self.phase
    }

    #[must_use]
    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    #[must_use]
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Simulated seconds since the trial began.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.ticks as f32 * self.world.params.dt
    }

    /// Trial score so far: `floor(10 * elapsed_seconds)`.
    #[must_use]
    pub fn score(&self) -> u32 {
        (10.0 * self.elapsed_seconds()).floor() as u32
    }

    /// Capture the presentation snapshot for the current tick.
    #[must_use]
    pub fn snapshot(&self, average_score: Option<f64>) -> WorldSnapshot {
        let bar_pos = self.seesaw.bar_position(&self.world);
        let ball_pos = self.seesaw.ball_position(&self.world);
        WorldSnapshot {
            bar_pos: [bar_pos.x, bar_pos.y],
            bar_angle: self.seesaw.bar_angle(&self.world),
            bar_half_length: self.seesaw.config.bar_half_length,
            ball_pos: [ball_pos.x, ball_pos.y],
            ball_radius: self.seesaw.config.ball_radius,
            score: self.score(),
            average_score,
        }
    }

    #[must_use]
    pub fn world(&self) -> &PhysicsWorld {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut PhysicsWorld {
        &mut self.world
    }

    #[must_use]
    pub fn seesaw(&self) -> &Seesaw {
        &self.seesaw
    }
}
