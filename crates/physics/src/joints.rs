//! Joint constraints and their per-tick resolution.
//!
//! Both joints are solved by direct positional correction re-derived from
//! the current poses every tick, never by integrating an error term, so
//! repeated solving cannot accumulate drift. A single iteration per tick is
//! a deliberate simplification: this world carries two constraints on one
//! dynamic body, which direct correction satisfies exactly. Do not
//! generalize without adding iteration and convergence criteria.

use crate::body::RigidBody;
use crate::types::Vec2;

/// Positional errors below this are left alone to avoid normalizing a
/// near-zero vector.
const MIN_CORRECTION: f32 = 1e-6;

/// Bilateral ball-socket constraint: one anchor point on each body,
/// expressed in that body's local frame, forced to coincide in world space.
/// Relative rotation stays free.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PinJoint {
    pub body_a: usize,
    pub body_b: usize,
    pub anchor_a: Vec2,
    pub anchor_b: Vec2,
}

/// Unilateral constraint capping the relative angle `angle_b - angle_a`
/// to `[min, max]`. Inactive while the angle is in range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RotaryLimitJoint {
    pub body_a: usize,
    pub body_b: usize,
    pub min: f32,
    pub max: f32,
}

/// Force the joint's world anchors back together. The correction is split
/// by inverse mass; a body pinned to a static anchor absorbs the whole
/// error, which keeps it rotating freely about the anchor with zero
/// translational drift. The velocity component along the error direction
/// is removed from each corrected body so the next integration does not
/// immediately reopen the gap.
pub fn solve_pin_joint(bodies: &mut [RigidBody], joint: &PinJoint) {
    let anchor_a = bodies[joint.body_a].local_to_world(joint.anchor_a);
    let anchor_b = bodies[joint.body_b].local_to_world(joint.anchor_b);

    let error = anchor_a - anchor_b;
    let distance = error.length();
    if distance < MIN_CORRECTION {
        return;
    }
    let direction = error / distance;

    let inv_a = bodies[joint.body_a].inv_mass();
    let inv_b = bodies[joint.body_b].inv_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum == 0.0 {
        return;
    }

    let weight_a = inv_a / inv_sum;
    let weight_b = inv_b / inv_sum;

    if weight_b > 0.0 {
        let body = &mut bodies[joint.body_b];
        body.pos += error * weight_b;
        body.vel -= direction * body.vel.dot(direction);
    }
    if weight_a > 0.0 {
        let body = &mut bodies[joint.body_a];
        body.pos -= error * weight_a;
        body.vel -= direction * body.vel.dot(direction);
    }
}

/// Clamp the relative angle to the limit range. Only acts when the range
/// is violated. The angular velocity still driving past the bound is
/// zeroed (an inelastic angular stop); reflecting it would inject energy.
pub fn solve_rotary_limit(bodies: &mut [RigidBody], joint: &RotaryLimitJoint) {
    let angle_a = bodies[joint.body_a].angle;
    let angle_b = bodies[joint.body_b].angle;
    let relative = angle_b - angle_a;

    let target = if relative > joint.max {
        joint.max
    } else if relative < joint.min {
        joint.min
    } else {
        return;
    };

    let relative_vel =
        bodies[joint.body_b].angular_vel - bodies[joint.body_a].angular_vel;
    let driving_outward =
        (target == joint.max && relative_vel > 0.0) || (target == joint.min && relative_vel < 0.0);
    tracing::debug!(relative, target, "rotary limit engaged");

    if !bodies[joint.body_b].is_static() {
        bodies[joint.body_b].angle = angle_a + target;
        if driving_outward {
            bodies[joint.body_b].angular_vel = bodies[joint.body_a].angular_vel;
        }
    } else if !bodies[joint.body_a].is_static() {
        bodies[joint.body_a].angle = angle_b - target;
        if driving_outward {
            bodies[joint.body_a].angular_vel = bodies[joint.body_b].angular_vel;
        }
    }
}
