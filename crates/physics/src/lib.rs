#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Pivot-Bar Physics
//!
//! A minimal 2D rigid-body layer for the pivot-bar balance simulator. It
//! is not a general-purpose physics engine: it carries exactly the bodies,
//! joints and contacts the balance scenario needs, advanced by a fixed
//! 60 Hz semi-implicit Euler step.
//!
//! ## Key Components
//!
//! -   **Rigid bodies:** [`RigidBody`] with a [`Shape`] (circle or thick
//!     segment) and per-tick force/torque accumulators; `mass == 0.0`
//!     marks a static body. Defined in the [`body`] module.
//! -   **Joints:** a bilateral [`PinJoint`] and a unilateral
//!     [`RotaryLimitJoint`], both solved by direct positional correction
//!     in the [`joints`] module.
//! -   **Contacts:** circle-vs-segment detection and impulse response with
//!     restitution and clamped friction in the [`collision`] module.
//! -   **World:** [`PhysicsWorld`] in the [`simulation`] module owns all
//!     bodies and constraints and steps them in a fixed order.
//! -   **Scenario:** [`Seesaw`] in the [`seesaw`] module wires the balance
//!     scene (floor, pivoted bar, ball) into a world and exposes the
//!     observations the controller and harness need.
//!
//! ## Usage
//!
//! ```rust
//! use physics::{PhysicsWorld, Seesaw, SeesawConfig};
//!
//! let mut world = PhysicsWorld::new();
//! let seesaw = Seesaw::build(&mut world, SeesawConfig::default()).unwrap();
//! for _ in 0..10 {
//!     world.step();
//! }
//! assert!(!seesaw.ball_off_platform(&world));
//! ```

pub mod body;
mod builder;
pub mod collision;
pub mod error;
pub mod integrator;
pub mod joints;
pub mod seesaw;
pub mod simulation;
pub mod types;

pub use body::{RigidBody, Shape};
pub use collision::Contact;
pub use error::WorldError;
pub use joints::{PinJoint, RotaryLimitJoint};
pub use seesaw::{Seesaw, SeesawConfig};
pub use simulation::{PhysParams, PhysicsWorld};
pub use types::{cross, moment_for_circle, moment_for_segment, Material, Vec2};
