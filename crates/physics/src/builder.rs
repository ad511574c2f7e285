//! Validating constructors for bodies and joints.
//!
//! All configuration errors surface here, at setup time, never inside the
//! step loop. In particular a dynamic body can only be created with a
//! strictly positive moment of inertia, so the solver never divides by
//! zero.

use crate::body::{RigidBody, Shape};
use crate::error::WorldError;
use crate::types::{moment_for_circle, moment_for_segment, Material, Vec2};
use crate::PhysicsWorld;

impl PhysicsWorld {
    /// Add a circle body. `mass == 0.0` makes it static.
    pub fn add_circle(
        &mut self,
        pos: Vec2,
        radius: f32,
        mass: f32,
        material: Material,
    ) -> Result<usize, WorldError> {
        if radius <= 0.0 {
            return Err(WorldError::InvalidShape(radius));
        }
        validate_mass(mass)?;
        let inertia = if mass > 0.0 {
            checked_inertia(moment_for_circle(mass, 0.0, radius))?
        } else {
            0.0
        };
        Ok(self.push_body(RigidBody {
            mass,
            inertia,
            pos,
            angle: 0.0,
            vel: Vec2::ZERO,
            angular_vel: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            shape: Shape::Circle { radius },
            material,
        }))
    }

    /// Add a thick segment body along its local x axis. `mass == 0.0`
    /// makes it static.
    pub fn add_segment(
        &mut self,
        pos: Vec2,
        half_length: f32,
        radius: f32,
        mass: f32,
        material: Material,
    ) -> Result<usize, WorldError> {
        if half_length <= 0.0 {
            return Err(WorldError::InvalidShape(half_length));
        }
        if radius <= 0.0 {
            return Err(WorldError::InvalidShape(radius));
        }
        validate_mass(mass)?;
        let inertia = if mass > 0.0 {
            let a = Vec2::new(-half_length, 0.0);
            let b = Vec2::new(half_length, 0.0);
            checked_inertia(moment_for_segment(mass, a, b, radius))?
        } else {
            0.0
        };
        Ok(self.push_body(RigidBody {
            mass,
            inertia,
            pos,
            angle: 0.0,
            vel: Vec2::ZERO,
            angular_vel: 0.0,
            force: Vec2::ZERO,
            torque: 0.0,
            shape: Shape::Segment {
                half_length,
                radius,
            },
            material,
        }))
    }

    /// Pin two bodies together at one local-frame anchor point each.
    pub fn add_pin_joint(
        &mut self,
        body_a: usize,
        body_b: usize,
        anchor_a: Vec2,
        anchor_b: Vec2,
    ) -> Result<usize, WorldError> {
        self.check_body(body_a)?;
        self.check_body(body_b)?;
        self.pin_joints.push(crate::joints::PinJoint {
            body_a,
            body_b,
            anchor_a,
            anchor_b,
        });
        Ok(self.pin_joints.len() - 1)
    }

    /// Cap the relative angle of two bodies to `[min, max]`.
    pub fn add_rotary_limit_joint(
        &mut self,
        body_a: usize,
        body_b: usize,
        min: f32,
        max: f32,
    ) -> Result<usize, WorldError> {
        self.check_body(body_a)?;
        self.check_body(body_b)?;
        if min > max {
            return Err(WorldError::EmptyLimitRange(min, max));
        }
        self.rotary_limit_joints.push(crate::joints::RotaryLimitJoint {
            body_a,
            body_b,
            min,
            max,
        });
        Ok(self.rotary_limit_joints.len() - 1)
    }

    fn push_body(&mut self, body: RigidBody) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    fn check_body(&self, index: usize) -> Result<(), WorldError> {
        if index < self.bodies.len() {
            Ok(())
        } else {
            Err(WorldError::NoSuchBody(index))
        }
    }
}

fn validate_mass(mass: f32) -> Result<(), WorldError> {
    if mass.is_finite() && mass >= 0.0 {
        Ok(())
    } else {
        Err(WorldError::InvalidMass(mass))
    }
}

fn checked_inertia(inertia: f32) -> Result<f32, WorldError> {
    if inertia > 0.0 && inertia.is_finite() {
        Ok(inertia)
    } else {
        Err(WorldError::InvalidInertia(inertia))
    }
}
