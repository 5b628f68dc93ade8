//! 2D vector type for directions and offsets.

use crate::buffer::{ComponentBuffer, Components};
use crate::error::Result;
use crate::scalar::{is_equal, ApproxEq};
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D vector representing a direction or offset.
///
/// Generic over floating-point types (`f32` or `f64`). `==` compares
/// components exactly; use [`ApproxEq::approx_eq`] for tolerant comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Creates a new vector.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Creates a unit vector along the X axis.
    #[inline]
    pub fn unit_x() -> Self {
        Self {
            x: F::one(),
            y: F::zero(),
        }
    }

    /// Creates a unit vector along the Y axis.
    #[inline]
    pub fn unit_y() -> Self {
        Self {
            x: F::zero(),
            y: F::one(),
        }
    }

    /// Adds the given components to this vector in place.
    #[inline]
    pub fn add_components(&mut self, x: F, y: F) {
        self.x = self.x + x;
        self.y = self.y + y;
    }

    /// Replaces both components.
    #[inline]
    pub fn set(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
    }

    /// Computes the dot product with another vector.
    #[inline]
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product (perpendicular dot product).
    ///
    /// Returns the z-component of the 3D cross product if the vectors
    /// were extended to 3D with z=0. Positive means `other` is counter-clockwise
    /// from `self`.
    #[inline]
    pub fn cross(self, other: Self) -> F {
        self.x * other.y - self.y * other.x
    }

    /// Returns the squared magnitude (length squared).
    ///
    /// Prefer this over [`magnitude`](Self::magnitude) when only comparing lengths.
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

    /// Returns a vector perpendicular to this one (rotated 90 degrees counter-clockwise).
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self {
            x: -self.y,
            y: self.x,
        }
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        self + (other - self) * t
    }

    /// Returns the components as `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [F; 2] {
        [self.x, self.y]
    }
}

impl<F: Float> Components<F> for Vec2<F> {
    const COMPONENT_COUNT: usize = 2;

    fn write_components(&self, destination: &mut ComponentBuffer<'_, F>) -> Result<()> {
        destination.put(&[self.x, self.y])
    }

    fn read_components(&mut self, source: &mut ComponentBuffer<'_, F>) -> Result<()> {
        let [x, y] = source.take()?;
        self.set(x, y);
        Ok(())
    }
}

impl<F: Float> ApproxEq for Vec2<F> {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        is_equal(self.x, other.x) && is_equal(self.y, other.y)
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.add_components(other.x, other.y);
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x = self.x - other.x;
        self.y = self.y - other.y;
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: F) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl<F: Float> MulAssign<F> for Vec2<F> {
    #[inline]
    fn mul_assign(&mut self, scalar: F) {
        self.x = self.x * scalar;
        self.y = self.y * scalar;
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    #[inline]
    fn div(self, scalar: F) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl<F: Float> DivAssign<F> for Vec2<F> {
    /// Division by zero produces infinite or NaN components.
    #[inline]
    fn div_assign(&mut self, scalar: F) {
        self.x = self.x / scalar;
        self.y = self.y / scalar;
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> Default for Vec2<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Float> From<[F; 2]> for Vec2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self { x, y }
    }
}
