//! World aggregate and the fixed-step pipeline.
//!
//! [`PhysicsWorld`] owns every body and joint and advances them by one
//! fixed time step at a time: free integration, then contacts, then joint
//! resolution. There is no broad phase and no iteration — the scenario
//! holds three bodies and two constraints, all known at build time.

use crate::body::{RigidBody, Shape};
use crate::collision::{detect_circle_segment_collision, resolve_circle_segment_collision};
use crate::integrator::integrate_bodies;
use crate::joints::{solve_pin_joint, solve_rotary_limit, PinJoint, RotaryLimitJoint};
use crate::types::Vec2;

/// Global integration parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysParams {
    pub gravity: Vec2,
    pub dt: f32,
}

/// Main physics world container. Created once at process start; between
/// trials only the body state vectors are mutated, bodies and joints are
/// never destroyed or recreated.
#[derive(Clone, Debug)]
pub struct PhysicsWorld {
    pub bodies: Vec<RigidBody>,
    pub pin_joints: Vec<PinJoint>,
    pub rotary_limit_joints: Vec<RotaryLimitJoint>,
    pub params: PhysParams,
}

impl PhysicsWorld {
    /// Create an empty world with a 60 Hz fixed step and no gravity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            pin_joints: Vec::new(),
            rotary_limit_joints: Vec::new(),
            params: PhysParams {
                gravity: Vec2::ZERO,
                dt: 1.0 / 60.0,
            },
        }
    }

    /// Advance the world by one fixed time step.
    pub fn step(&mut self) {
        // 1. Integrate free motion from the accumulated forces and gravity.
        integrate_bodies(&mut self.bodies, self.params.gravity, self.params.dt);

        // 2. Detect and resolve contacts.
        self.resolve_contacts();

        // 3. Solve joints: pin first (fix translation), then the rotary
        //    limit (clamp rotation).
        for i in 0..self.pin_joints.len() {
            let joint = self.pin_joints[i];
            solve_pin_joint(&mut self.bodies, &joint);
        }
        for i in 0..self.rotary_limit_joints.len() {
            let joint = self.rotary_limit_joints[i];
            solve_rotary_limit(&mut self.bodies, &joint);
        }
    }

    /// Run the world for multiple steps.
    pub fn run(&mut self, steps: usize) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Every circle against every segment; the body count is tiny, so no
    /// broad phase.
    fn resolve_contacts(&mut self) {
        for circle_idx in 0..self.bodies.len() {
            if !matches!(self.bodies[circle_idx].shape, Shape::Circle { .. }) {
                continue;
            }
            for segment_idx in 0..self.bodies.len() {
                if !matches!(self.bodies[segment_idx].shape, Shape::Segment { .. }) {
                    continue;
                }
                if let Some(contact) = detect_circle_segment_collision(
                    &self.bodies[circle_idx],
                    &self.bodies[segment_idx],
                ) {
                    tracing::trace!(circle_idx, segment_idx, depth = contact.depth, "contact");
                    let (circle, segment) =
                        bodies_pair(&mut self.bodies, circle_idx, segment_idx);
                    resolve_circle_segment_collision(circle, segment, &contact);
                }
            }
        }
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Disjoint mutable borrows of two bodies.
fn bodies_pair(bodies: &mut [RigidBody], i: usize, j: usize) -> (&mut RigidBody, &mut RigidBody) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
