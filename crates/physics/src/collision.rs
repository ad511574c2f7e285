//! Circle-vs-segment contact detection and impulse response.
//!
//! The scenario produces exactly one contact pair: a circle (the ball)
//! against a thick segment (the floor or the bar), so there is no
//! dispatcher or broad phase here.

use crate::body::{RigidBody, Shape};
use crate::types::{cross, Material, Vec2};

/// Penetration below this is ignored by the positional correction.
const DEPTH_SLOP: f32 = 0.01;
/// Fraction of the penetration removed per tick.
const CORRECTION_FACTOR: f32 = 0.8;

/// Contact information for the impulse response.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    /// Contact point in world space.
    pub point: Vec2,
    /// Contact normal, from the segment surface toward the circle.
    pub normal: Vec2,
    /// Penetration depth.
    pub depth: f32,
    /// Combined friction coefficient.
    pub friction: f32,
    /// Combined restitution coefficient.
    pub restitution: f32,
}

impl Contact {
    #[must_use]
    pub fn new(point: Vec2, normal: Vec2, depth: f32, mat_a: &Material, mat_b: &Material) -> Self {
        Self {
            point,
            normal,
            depth,
            friction: combine(mat_a.friction, mat_b.friction),
            restitution: combine(mat_a.restitution, mat_b.restitution),
        }
    }
}

/// Combine per-body coefficients by geometric mean.
fn combine(a: f32, b: f32) -> f32 {
    (a * b).sqrt()
}

/// Detect penetration between a circle body and a thick segment body.
#[must_use]
pub fn detect_circle_segment_collision(
    circle: &RigidBody,
    segment: &RigidBody,
) -> Option<Contact> {
    let Shape::Circle { radius } = circle.shape else {
        return None;
    };
    let Shape::Segment {
        radius: segment_radius,
        ..
    } = segment.shape
    else {
        return None;
    };

    let (a, b) = segment.segment_endpoints()?;
    let axis = b - a;
    let axis_len_sq = axis.length_sq();
    if axis_len_sq <= f32::EPSILON {
        return None;
    }

    // Closest point on the centreline to the circle center.
    let t = ((circle.pos - a).dot(axis) / axis_len_sq).clamp(0.0, 1.0);
    let closest = a + axis * t;

    let delta = circle.pos - closest;
    let distance = delta.length();
    let reach = radius + segment_radius;
    if distance >= reach {
        return None;
    }

    let normal = if distance > 1e-5 {
        delta / distance
    } else {
        // Center exactly on the line: fall back to the segment normal that
        // points up-screen (negative y).
        let mut n = axis.perp() / axis_len_sq.sqrt();
        if n.y > 0.0 {
            n = -n;
        }
        n
    };

    Some(Contact::new(
        closest + normal * segment_radius,
        normal,
        reach - distance,
        &circle.material,
        &segment.material,
    ))
}

/// Resolve a circle-segment contact.
///
/// The normal impulse and friction act on the circle; a dynamic segment
/// receives the equal-and-opposite impulse as an angular impulse about its
/// center, which is how the ball's weight tilts the bar. The segment's
/// surface velocity (it may be rotating about a pivot) is taken into
/// account, so a grippy bar drags the ball with it.
pub fn resolve_circle_segment_collision(
    circle: &mut RigidBody,
    segment: &mut RigidBody,
    contact: &Contact,
) {
    let arm = contact.point - segment.pos;
    let surface_vel = segment.vel + arm.perp() * segment.angular_vel;
    let relative_vel = circle.vel - surface_vel;
    let vel_along_normal = relative_vel.dot(contact.normal);

    // Only resolve when approaching.
    if vel_along_normal < 0.0 {
        let j = -(1.0 + contact.restitution) * vel_along_normal;
        circle.vel += contact.normal * j;

        apply_friction(circle, surface_vel, contact, j);

        if !segment.is_static() {
            let reaction = contact.normal * (-j * circle.mass);
            segment.angular_vel += cross(arm, reaction) * segment.inv_inertia();
        }
    }

    // Positional correction to prevent sinking.
    if contact.depth > DEPTH_SLOP {
        circle.pos += contact.normal * (contact.depth * CORRECTION_FACTOR);
    }
}

/// Tangential damping, clamped so friction never reverses the relative
/// sliding direction.
fn apply_friction(circle: &mut RigidBody, surface_vel: Vec2, contact: &Contact, normal_impulse: f32) {
    let relative_vel = circle.vel - surface_vel;
    let tangent_vel = relative_vel - contact.normal * relative_vel.dot(contact.normal);

    let tangent_speed = tangent_vel.length();
    if tangent_speed > 1e-4 {
        let tangent_dir = tangent_vel / tangent_speed;
        let magnitude = (contact.friction * normal_impulse.abs()).min(tangent_speed);
        circle.vel -= tangent_dir * magnitude;
    }
}
