//! Rigid body state and per-tick force accumulation.

use crate::types::{cross, Material, Vec2};

/// Collision shape attached to a body. Shapes participate in contact
/// detection and the presentation snapshot, never in joint solving.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Circle {
        radius: f32,
    },
    /// Thick line segment along the body's local x axis, from
    /// `(-half_length, 0)` to `(half_length, 0)`. `radius` is the surface
    /// half-thickness.
    Segment {
        half_length: f32,
        radius: f32,
    },
}

/// A 2D rigid body. `mass == 0.0` marks a static body: it ignores forces
/// and is never integrated; its pose is fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    pub mass: f32,
    pub inertia: f32,
    pub pos: Vec2,
    pub angle: f32,
    pub vel: Vec2,
    pub angular_vel: f32,
    /// Force accumulated for the current tick, cleared by integration.
    pub force: Vec2,
    /// Torque accumulated for the current tick, cleared by integration.
    pub torque: f32,
    pub shape: Shape,
    pub material: Material,
}

impl RigidBody {
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.mass == 0.0
    }

    #[must_use]
    pub fn inv_mass(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            1.0 / self.mass
        }
    }

    #[must_use]
    pub fn inv_inertia(&self) -> f32 {
        if self.is_static() {
            0.0
        } else {
            1.0 / self.inertia
        }
    }

    /// Accumulate a force through the center of mass.
    pub fn apply_force(&mut self, force: Vec2) {
        if self.is_static() {
            return;
        }
        self.force += force;
    }

    /// Accumulate a force acting at a world-space point.
    pub fn apply_force_at(&mut self, force: Vec2, point: Vec2) {
        if self.is_static() {
            return;
        }
        self.force += force;
        self.torque += cross(point - self.pos, force);
    }

    /// Accumulate a torque.
    pub fn apply_torque(&mut self, torque: f32) {
        if self.is_static() {
            return;
        }
        self.torque += torque;
    }

    pub fn clear_accumulators(&mut self) {
        self.force = Vec2::ZERO;
        self.torque = 0.0;
    }

    /// Transform a body-local point into world space.
    #[must_use]
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.pos + local.rotated(self.angle)
    }

    /// World-space endpoints of a segment shape, `None` for circles.
    #[must_use]
    pub fn segment_endpoints(&self) -> Option<(Vec2, Vec2)> {
        match self.shape {
            Shape::Segment { half_length, .. } => Some((
                self.local_to_world(Vec2::new(-half_length, 0.0)),
                self.local_to_world(Vec2::new(half_length, 0.0)),
            )),
            Shape::Circle { .. } => None,
        }
    }
}
