use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn length_sq(self) -> f32 {
        self.dot(self)
    }

    #[must_use]
    pub fn length(self) -> f32 {
        self.length_sq().sqrt()
    }

    /// Counterclockwise perpendicular; `perp()` scaled by angular velocity is
    /// the linear velocity of a point rotating about the origin.
    #[must_use]
    pub const fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Rotate by `angle` radians about the origin.
    #[must_use]
    pub fn rotated(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

/// 2D cross product (z component of the 3D cross).
#[must_use]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.x * b.y - a.y * b.x
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Self;
    fn div(self, rhs: f32) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Surface properties used by the contact response.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    pub friction: f32,
    pub restitution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            friction: 0.0,
            restitution: 0.0,
        }
    }
}

/// Moment of inertia for a circle (or annulus) about its center.
#[must_use]
pub fn moment_for_circle(mass: f32, inner_radius: f32, outer_radius: f32) -> f32 {
    0.5 * mass * (inner_radius * inner_radius + outer_radius * outer_radius)
}

/// Moment of inertia for a thick segment from `a` to `b` about the body
/// origin. `radius` is the surface half-thickness.
#[must_use]
pub fn moment_for_segment(mass: f32, a: Vec2, b: Vec2, radius: f32) -> f32 {
    let offset = (a + b) * 0.5;
    let length = (b - a).length() + 2.0 * radius;
    mass * ((length * length + 4.0 * radius * radius) / 12.0 + offset.length_sq())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perp_is_counterclockwise() {
        let v = Vec2::new(1.0, 0.0);
        assert_eq!(v.perp(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn rotation_preserves_length() {
        let v = Vec2::new(3.0, 4.0);
        let r = v.rotated(1.234);
        assert!((r.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn circle_moment_matches_closed_form() {
        // solid disc: m r^2 / 2
        let moment = moment_for_circle(1.0, 0.0, 20.0);
        assert!((moment - 200.0).abs() < 1e-4);
    }

    #[test]
    fn segment_moment_centered_has_no_offset_term() {
        let a = Vec2::new(-200.0, 0.0);
        let b = Vec2::new(200.0, 0.0);
        let moment = moment_for_segment(10.0, a, b, 5.0);
        let length = 410.0_f32;
        let expected = 10.0 * (length * length + 4.0 * 25.0) / 12.0;
        assert!((moment - expected).abs() < 1e-2, "moment={moment}");
    }
}
