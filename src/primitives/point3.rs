//! 3D point type.

use super::Vec3;
use crate::buffer::{ComponentBuffer, Components};
use crate::error::Result;
use crate::scalar::{is_equal, ApproxEq};
use num_traits::Float;
use std::ops::{Add, AddAssign, Sub};

/// A 3D point (vertex) with x, y, and z coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<F> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Point3<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F, z: F) -> Self {
        Self { x, y, z }
    }

    /// Creates a point at the origin (0, 0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
            z: F::zero(),
        }
    }

    /// Moves this point by the coordinates of `other`, in place.
    #[inline]
    pub fn translate_by(&mut self, other: Self) {
        self.translate(other.x, other.y, other.z);
    }

    /// Moves this point by the given offsets, in place.
    #[inline]
    pub fn translate(&mut self, dx: F, dy: F, dz: F) {
        self.x = self.x + dx;
        self.y = self.y + dy;
        self.z = self.z + dz;
    }

    /// Replaces all three coordinates.
    #[inline]
    pub fn set(&mut self, x: F, y: F, z: F) {
        self.x = x;
        self.y = y;
        self.z = z;
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// When `t = 0`, returns `self`. When `t = 1`, returns `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
            z: (self.z + other.z) / two,
        }
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec3<F> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Returns the coordinates as `[x, y, z]`.
    #[inline]
    pub fn to_array(self) -> [F; 3] {
        [self.x, self.y, self.z]
    }
}

impl<F: Float> Components<F> for Point3<F> {
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

impl<F: Float> ApproxEq for Point3<F> {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        is_equal(self.x, other.x) && is_equal(self.y, other.y) && is_equal(self.z, other.z)
    }
}

// Point - Point = Vec3
impl<F: Float> Sub for Point3<F> {
    type Output = Vec3<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec3<F> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

// Point + Vec3 = Point
impl<F: Float> Add<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec3<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
            z: self.z + v.z,
        }
    }
}

impl<F: Float> AddAssign<Vec3<F>> for Point3<F> {
    #[inline]
    fn add_assign(&mut self, v: Vec3<F>) {
        self.translate(v.x, v.y, v.z);
    }
}

// Point - Vec3 = Point
impl<F: Float> Sub<Vec3<F>> for Point3<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec3<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
            z: self.z - v.z,
        }
    }
}

impl<F: Float> Default for Point3<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<Vec3<F>> for Point3<F> {
    fn from(v: Vec3<F>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl<F: Float> From<[F; 3]> for Point3<F> {
    fn from([x, y, z]: [F; 3]) -> Self {
        Self { x, y, z }
    }
}
