use core::ops::{Add, Div, Mul, Sub};

/// 2D vector in logical units.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Angle of the segment from `self` to `other`, in degrees.
    ///
    /// 0° points along +X; angles grow clockwise because +Y points down.
    #[inline]
    pub fn angle_to_deg(self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x).to_degrees()
    }

    /// Rotates the point around `origin` by `deg` degrees.
    #[must_use]
    pub fn rotated_about(self, origin: Vec2, deg: f32) -> Vec2 {
        let (sin, cos) = deg.to_radians().sin_cos();
        let dx = self.x - origin.x;
        let dy = self.y - origin.y;
        Vec2::new(
            origin.x + dx * cos - dy * sin,
            origin.y + dx * sin + dy * cos,
        )
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn div(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_hypot() {
        assert_eq!(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn angle_along_x_axis_is_zero() {
        assert_eq!(Vec2::zero().angle_to_deg(Vec2::new(10.0, 0.0)), 0.0);
    }

    #[test]
    fn angle_downward_is_ninety() {
        // +Y points down, so "down" is +90°.
        let a = Vec2::zero().angle_to_deg(Vec2::new(0.0, 10.0));
        assert!((a - 90.0).abs() < 1e-4);
    }

    #[test]
    fn rotate_quarter_turn() {
        let p = Vec2::new(1.0, 0.0).rotated_about(Vec2::zero(), 90.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn rotate_about_offset_origin() {
        let p = Vec2::new(2.0, 1.0).rotated_about(Vec2::new(1.0, 1.0), 180.0);
        assert!((p.x - 0.0).abs() < 1e-5);
        assert!((p.y - 1.0).abs() < 1e-5);
    }
}
