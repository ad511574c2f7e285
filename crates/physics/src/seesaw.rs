//! Seesaw scenario entity.
//!
//! Wires the balance scene into a [`PhysicsWorld`]: a static elastic floor
//! across the bottom of the scene, a bar pinned to a fixed pivot with its
//! rotation capped, and a ball that starts right of centre, above the bar.
//! Coordinates are screen-style: y grows downward and gravity is positive.

use crate::error::WorldError;
use crate::types::{Material, Vec2};
use crate::PhysicsWorld;

/// Configuration for a seesaw scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SeesawConfig {
    /// Scene width in world units.
    pub world_width: f32,
    /// Scene height in world units.
    pub world_height: f32,
    /// Fixed pivot point the bar rotates about.
    pub pivot: Vec2,
    /// Half-length of the bar surface.
    pub bar_half_length: f32,
    /// Surface half-thickness of the bar and floor segments.
    pub surface_radius: f32,
    /// Bar mass in mass units.
    pub bar_mass: f32,
    /// Bar surface friction (tangential grip).
    pub bar_friction: f32,
    /// Ball radius in world units.
    pub ball_radius: f32,
    /// Ball mass in mass units.
    pub ball_mass: f32,
    /// Ball surface friction; pairs with the bar's grip.
    pub ball_friction: f32,
    /// Ball bounciness.
    pub ball_restitution: f32,
    /// Floor bounciness; 1.0 keeps stray balls in view.
    pub floor_restitution: f32,
    /// Symmetric rotation cap for the bar, radians.
    pub rotation_limit: f32,
    /// Ball spawn point relative to the pivot.
    pub ball_spawn_offset: Vec2,
    /// Downward gravity (positive y is down-screen).
    pub gravity: Vec2,
}

impl Default for SeesawConfig {
    fn default() -> Self {
        Self {
            world_width: 800.0,
            world_height: 600.0,
            pivot: Vec2::new(400.0, 300.0),
            bar_half_length: 200.0,
            surface_radius: 5.0,
            bar_mass: 10.0,
            bar_friction: 1.0,
            ball_radius: 20.0,
            ball_mass: 1.0,
            ball_friction: 1.0,
            ball_restitution: 0.8,
            floor_restitution: 1.0,
            rotation_limit: 0.5,
            ball_spawn_offset: Vec2::new(100.0, -100.0),
            gravity: Vec2::new(0.0, 900.0),
        }
    }
}

/// A seesaw scene in the physics world, addressed by body and joint
/// indices. Built once; [`Seesaw::reset`] restores the spawn state in
/// place between trials.
#[derive(Clone, Debug)]
pub struct Seesaw {
    pub floor_idx: usize,
    pub bar_idx: usize,
    pub ball_idx: usize,
    pub pin_idx: usize,
    pub limit_idx: usize,
    pub config: SeesawConfig,
}

impl Seesaw {
    /// Build the scene into `world`. Fails fast on any invalid dimension
    /// or mass; nothing is partially constructed on error paths that
    /// matter (the world is discarded by callers on failure).
    pub fn build(world: &mut PhysicsWorld, config: SeesawConfig) -> Result<Self, WorldError> {
        world.params.gravity = config.gravity;

        let floor_pos = Vec2::new(config.world_width * 0.5, config.world_height);
        let floor_idx = world.add_segment(
            floor_pos,
            config.world_width * 0.5,
            config.surface_radius,
            0.0,
            Material {
                friction: 0.0,
                restitution: config.floor_restitution,
            },
        )?;

        let bar_idx = world.add_segment(
            config.pivot,
            config.bar_half_length,
            config.surface_radius,
            config.bar_mass,
            Material {
                friction: config.bar_friction,
                restitution: 0.0,
            },
        )?;

        let ball_idx = world.add_circle(
            config.pivot + config.ball_spawn_offset,
            config.ball_radius,
            config.ball_mass,
            Material {
                friction: config.ball_friction,
                restitution: config.ball_restitution,
            },
        )?;

        // Pin the bar's centre to the pivot, expressed in the floor body's
        // local frame. The rotary limit rides on the same body pair.
        let pin_idx = world.add_pin_joint(floor_idx, bar_idx, config.pivot - floor_pos, Vec2::ZERO)?;
        let limit_idx = world.add_rotary_limit_joint(
            floor_idx,
            bar_idx,
            -config.rotation_limit,
            config.rotation_limit,
        )?;

        Ok(Self {
            floor_idx,
            bar_idx,
            ball_idx,
            pin_idx,
            limit_idx,
            config,
        })
    }

    /// Restore the spawn state: ball right of centre above the bar with
    /// zero velocity, bar level and at rest. Only state vectors are
    /// touched; bodies and joints stay alive.
    pub fn reset(&self, world: &mut PhysicsWorld) {
        let ball = &mut world.bodies[self.ball_idx];
        ball.pos = self.config.pivot + self.config.ball_spawn_offset;
        ball.angle = 0.0;
        ball.vel = Vec2::ZERO;
        ball.angular_vel = 0.0;
        ball.clear_accumulators();

        let bar = &mut world.bodies[self.bar_idx];
        bar.pos = self.config.pivot;
        bar.angle = 0.0;
        bar.vel = Vec2::ZERO;
        bar.angular_vel = 0.0;
        bar.clear_accumulators();
    }

    #[must_use]
    pub fn ball_position(&self, world: &PhysicsWorld) -> Vec2 {
        world.bodies[self.ball_idx].pos
    }

    #[must_use]
    pub fn ball_velocity(&self, world: &PhysicsWorld) -> Vec2 {
        world.bodies[self.ball_idx].vel
    }

    #[must_use]
    pub fn bar_position(&self, world: &PhysicsWorld) -> Vec2 {
        world.bodies[self.bar_idx].pos
    }

    #[must_use]
    pub fn bar_angle(&self, world: &PhysicsWorld) -> f32 {
        world.bodies[self.bar_idx].angle
    }

    /// Platform edges from the current bar pose, `(left_end, right_end)`.
    #[must_use]
    pub fn platform_ends(&self, world: &PhysicsWorld) -> (f32, f32) {
        let bar_x = world.bodies[self.bar_idx].pos.x;
        (
            bar_x - self.config.bar_half_length,
            bar_x + self.config.bar_half_length,
        )
    }

    /// The trial-ending condition: the ball's x position has left the
    /// platform's span. Expected, not exceptional.
    #[must_use]
    pub fn ball_off_platform(&self, world: &PhysicsWorld) -> bool {
        let (left_end, right_end) = self.platform_ends(world);
        let ball_x = world.bodies[self.ball_idx].pos.x;
        ball_x < left_end || ball_x > right_end
    }

    /// Accumulate a control torque onto the bar for the current tick.
    pub fn apply_bar_torque(&self, world: &mut PhysicsWorld, torque: f32) {
        world.bodies[self.bar_idx].apply_torque(torque);
    }
}
