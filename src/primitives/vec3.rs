//! 3D vector type for directions and offsets.

use crate::buffer::{ComponentBuffer, Components};
use crate::error::Result;
use crate::scalar::{is_equal, ApproxEq};
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self {
            x: F::one(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
            z: F::zero(),
        }
    }

    /// Creates a unit vector along the Z axis.
    #[inline]
    pub fn unit_z() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::one(),
        }
    }

    /// Adds the given components to this vector in place.
    #[inline]
    pub fn add_components(&mut self, x: F, y: F, z: F) {
        self.x = self.x + x;
        self.y = self.y + y;
        self.z = self.z + z;
    }

    /// Replaces all three components.
    #[inline]
    pub fn set(&mut self, x: F, y: F, z: F) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Computes the cross product with another vector.
    ///
    /// Neither operand is modified.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Returns the squared magnitude (length squared).
    #[inline]
    pub fn magnitude_squared(self) -> F {
        self.dot(self)
    }

    /// Returns the magnitude (length) of the vector.
    #[inline]
    pub fn magnitude(self) -> F {
        self.magnitude_squared().sqrt()
    }

    /// Scales this vector to unit length in place.
    ///
    /// A vector whose magnitude is exactly zero is left unchanged.
    ///
    /// The resulting magnitude is within a few `F::epsilon()` of 1. For `f64`
    /// that is far inside [`EPSILON`](crate::scalar::EPSILON); for `f32` the
    /// error can reach about `2e-7`, so compare `f32` results against
    /// `3.0 * f32::EPSILON` rather than `EPSILON`.
    #[inline]
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        if mag != F::zero() {
            *self /= mag;
        }
    }

    /// Returns a unit-length copy, or the vector itself if its magnitude is zero.
    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Returns the components as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }
}

impl<F: Float> Components<F> for Vec3<F> {
    const COMPONENT_COUNT: usize = 3;

    fn write_components(&self, destination: &mut ComponentBuffer<'_, F>) -> Result<()> {
        destination.put(&[self.x, self.y, self.z])
    }

    fn read_components(&mut self, source: &mut ComponentBuffer<'_, F>) -> Result<()> {
        let [x, y, z] = source.take()?;
        self.set(x, y, z);
        Ok(())
    }
}

impl<F: Float> ApproxEq for Vec3<F> {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        is_equal(self.x, other.x) && is_equal(self.y, other.y) && is_equal(self.z, other.z)
    }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<F: Float> AddAssign for Vec3<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_components(other.x, other.y, other.z);
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl<F: Float> SubAssign for Vec3<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
        self.z = self.z - other.z;
    }
}

impl<F: Float> Mul<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl<F: Float> MulAssign<F> for Vec3<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
        self.z = self.z * scalar;
    }
}

impl<F: Float> Div<F> for Vec3<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

impl<F: Float> DivAssign<F> for Vec3<F> {
    #[inline]
    fn div_assign(&mut self, scalar: F) {
        self.x = self.x / scalar;
        self.y = self.y / scalar;
        self.z = self.z / scalar;
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl<F: Float> Default for Vec3<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float> From<[F; 3]> for Vec3<F> {
    fn from([x, y, z]: [F; 3]) -> Self {
        Self { x, y, z }
    }
}
