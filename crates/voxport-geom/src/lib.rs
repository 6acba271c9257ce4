//! Geometry primitives shared by the block compiler: vectors, faces, quads and UV math.
#![forbid(unsafe_code)]

use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

pub mod face;
pub mod quad;

pub use face::Face;
pub use quad::{DEFAULT_UVS, Quad, QuarterTurn, TextureName, Uv};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Coordinate axis used for rotations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    pub const ONE: Vec3 = Vec3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, rhs: Vec3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    #[inline]
    pub fn cross(self, rhs: Vec3) -> Vec3 {
        Vec3 {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len > 0.0 { self / len } else { self }
    }

    /// Component-wise approximate equality.
    #[inline]
    pub fn approx_eq(self, rhs: Vec3, eps: f32) -> bool {
        (self.x - rhs.x).abs() <= eps
            && (self.y - rhs.y).abs() <= eps
            && (self.z - rhs.z).abs() <= eps
    }

    /// Rotates this point by `degrees` around `axis` passing through `pivot`.
    /// Positive angles follow the right-hand rule, so a quarter turn about +Y maps +X onto -Z.
    pub fn rotated_about(self, axis: Axis, degrees: f32, pivot: Vec3) -> Vec3 {
        let (s, c) = sin_cos_deg(degrees);
        let p = self - pivot;
        let r = match axis {
            Axis::X => Vec3::new(p.x, p.y * c - p.z * s, p.y * s + p.z * c),
            Axis::Y => Vec3::new(p.x * c + p.z * s, p.y, -p.x * s + p.z * c),
            Axis::Z => Vec3::new(p.x * c - p.y * s, p.x * s + p.y * c, p.z),
        };
        r + pivot
    }

    /// Rotates a direction (no pivot) around `axis`.
    #[inline]
    pub fn rotated(self, axis: Axis, degrees: f32) -> Vec3 {
        self.rotated_about(axis, degrees, Vec3::ZERO)
    }
}

/// Sine and cosine of an angle in degrees; quarter turns are exact.
pub fn sin_cos_deg(degrees: f32) -> (f32, f32) {
    let d = degrees.rem_euclid(360.0);
    if d == 0.0 {
        (0.0, 1.0)
    } else if d == 90.0 {
        (1.0, 0.0)
    } else if d == 180.0 {
        (0.0, -1.0)
    } else if d == 270.0 {
        (-1.0, 0.0)
    } else {
        d.to_radians().sin_cos()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;
    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_y_maps_east_to_north() {
        let v = Vec3::new(1.0, 0.0, 0.0).rotated(Axis::Y, 90.0);
        assert_eq!(v, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn half_turn_about_block_center() {
        let c = Vec3::new(0.5, 0.0, 0.5);
        let v = Vec3::new(0.0, 0.25, 0.0).rotated_about(Axis::Y, 180.0, c);
        assert!(v.approx_eq(Vec3::new(1.0, 0.25, 1.0), 1e-6));
    }

    #[test]
    fn sin_cos_wraps_negative_angles() {
        assert_eq!(sin_cos_deg(-90.0), (-1.0, 0.0));
        assert_eq!(sin_cos_deg(450.0), (1.0, 0.0));
    }
}
