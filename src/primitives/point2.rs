//! 2D point type.

use super::Vec2;
use crate::buffer::{ComponentBuffer, Components};
use crate::error::Result;
use crate::scalar::{is_equal, ApproxEq};
use num_traits::Float;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A 2D point (vertex) with x and y coordinates.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Point2<F> {
    /// Creates a new point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Moves this point by the coordinates of `other`, in place.
    #[inline]
    pub fn translate_by(&mut self, other: Self) {
        self.translate(other.x, other.y);
    }

    /// Moves this point by the given offsets, in place.
    #[inline]
    pub fn translate(&mut self, dx: F, dy: F) {
        self.x = self.x + dx;
        self.y = self.y + dy;
    }

    /// Replaces both coordinates.
    #[inline]
    pub fn set(&mut self, x: F, y: F) {
        self.x = x;
        self.y = y;
    }

    /// Returns the signed angle towards `other`, measured from the +Y axis.
    ///
    /// Computed as `atan2(dx, dy)` with `dx, dy = other - self`: the
    /// horizontal difference is the first argument. A target straight up
    /// is 0, straight right is pi/2, straight left is -pi/2.
    #[inline]
    pub fn angle_to(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx.atan2(dy)
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Linearly interpolates between `self` and `other`.
    #[inline]
    pub fn lerp(self, other: Self, t: F) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let two = F::one() + F::one();
        Self {
            x: (self.x + other.x) / two,
            y: (self.y + other.y) / two,
        }
    }

    /// Converts this point to a vector from the origin.
    #[inline]
    pub fn to_vec(self) -> Vec2<F> {
        Vec2::new(self.x, self.y)
    }

    /// Returns the coordinates as `[x, y]`.
    #[inline]
    pub fn to_array(self) -> [F; 2] {
        [self.x, self.y]
    }
}

impl<F: Float> Components<F> for Point2<F> {
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

impl<F: Float> ApproxEq for Point2<F> {
    #[inline]
    fn approx_eq(&self, other: &Self) -> bool {
        is_equal(self.x, other.x) && is_equal(self.y, other.y)
    }
}

// Point - Point = Vec2
impl<F: Float> Sub for Point2<F> {
    type Output = Vec2<F>;

    #[inline]
    fn sub(self, other: Self) -> Vec2<F> {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

// Point + Vec2 = Point
impl<F: Float> Add<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn add(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x + v.x,
            y: self.y + v.y,
        }
    }
}

impl<F: Float> AddAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<F>) {
        self.translate(v.x, v.y);
    }
}

// Point - Vec2 = Point
impl<F: Float> Sub<Vec2<F>> for Point2<F> {
    type Output = Self;

    #[inline]
    fn sub(self, v: Vec2<F>) -> Self {
        Self {
            x: self.x - v.x,
            y: self.y - v.y,
        }
    }
}

impl<F: Float> SubAssign<Vec2<F>> for Point2<F> {
    #[inline]
    fn sub_assign(&mut self, v: Vec2<F>) {
        self.translate(-v.x, -v.y);
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<Vec2<F>> for Point2<F> {
    fn from(v: Vec2<F>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl<F: Float> From<[F; 2]> for Point2<F> {
    fn from([x, y]: [F; 2]) -> Self {
        Self { x, y }
    }
}
