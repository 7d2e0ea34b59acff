//! 2D vector used for positions, velocities and headings
//!
//! Mutating operations work in place and return `&mut Self` so updates can be
//! chained inside a per-frame loop without temporaries:
//!
//! ```
//! use koi_pond::Vector2;
//!
//! let mut vel = Vector2::new(1.0, -1.0);
//! vel.reflect(&Vector2::new(0.0, 1.0)).multiply(2.0);
//! assert_eq!(vel, Vector2::new(2.0, 2.0));
//! ```
//!
//! Nothing here validates its inputs. Dividing by zero or normalizing a zero
//! vector produces infinite or NaN components, same as plain float math.

use bytemuck::{Pod, Zeroable};
use glam::DVec2;
use serde::{Deserialize, Serialize};
use std::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};

/// A mutable 2D vector
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing towards `theta` (radians)
    #[inline]
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin())
    }

    /// Independent copy of this vector
    #[inline]
    pub fn copy(&self) -> Self {
        Self::new(self.x, self.y)
    }

    /// Set this vector's components equal to those of `other`
    #[inline]
    pub fn set(&mut self, other: &Vector2) -> &mut Self {
        self.x = other.x;
        self.y = other.y;
        self
    }

    #[inline]
    pub fn add(&mut self, v: &Vector2) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self
    }

    #[inline]
    pub fn subtract(&mut self, v: &Vector2) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self
    }

    #[inline]
    pub fn multiply(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Divide by a scalar (multiplies by its reciprocal)
    #[inline]
    pub fn divide(&mut self, scalar: f64) -> &mut Self {
        self.multiply(1.0 / scalar)
    }

    #[inline]
    pub fn dot(&self, v: &Vector2) -> f64 {
        self.x * v.x + self.y * v.y
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Scale to unit length. A zero vector turns into NaN.
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();
        self.divide(length)
    }

    /// Reflect against a surface normal
    ///
    /// Standard reflection: v' = v - 2(v·n)n. The result is only a mirror
    /// image when `normal` has unit length.
    ///
    /// Bouncing a velocity off the inside of a circular edge:
    ///
    /// ```
    /// use koi_pond::Vector2;
    ///
    /// let pos = Vector2::new(0.0, 100.0);
    /// let mut vel = Vector2::new(3.0, 4.0);
    ///
    /// // Wall normal points back towards the center
    /// let mut normal = pos.copy();
    /// normal.normalize().multiply(-1.0);
    ///
    /// vel.reflect(&normal);
    /// assert_eq!(vel, Vector2::new(3.0, -4.0));
    /// assert_eq!(vel.length(), 5.0);
    /// ```
    #[inline]
    pub fn reflect(&mut self, normal: &Vector2) -> &mut Self {
        let ddot = self.dot(normal) * 2.0;
        self.x -= ddot * normal.x;
        self.y -= ddot * normal.y;
        self
    }

    /// Angle this vector points towards, in radians within (-π, π]
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Vector2) {
        self.add(&rhs);
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, rhs: Vector2) {
        self.subtract(&rhs);
    }
}

impl MulAssign<f64> for Vector2 {
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply(rhs);
    }
}

impl DivAssign<f64> for Vector2 {
    fn div_assign(&mut self, rhs: f64) {
        self.divide(rhs);
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for (f64, f64) {
    fn from(v: Vector2) -> Self {
        (v.x, v.y)
    }
}
