//! Numerical integration of body state.
//!
//! Semi-implicit (symplectic) Euler: velocities are updated from the
//! accumulated forces first, then positions from the new velocities. The
//! order matters for stability under the stiff joint corrections applied
//! after this pass.

use crate::body::RigidBody;
use crate::types::Vec2;

/// Advance every dynamic body by `dt`, then clear its force and torque
/// accumulators. Static bodies are skipped entirely.
pub fn integrate_bodies(bodies: &mut [RigidBody], gravity: Vec2, dt: f32) {
    for body in bodies.iter_mut() {
        if body.is_static() {
            continue;
        }

        let acceleration = body.force * body.inv_mass() + gravity;
        body.vel += acceleration * dt;
        body.angular_vel += body.torque * body.inv_inertia() * dt;

        body.pos += body.vel * dt;
        body.angle += body.angular_vel * dt;

        body.clear_accumulators();
    }
}
