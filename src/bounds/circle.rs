//! Bounding circle.

use super::BoundingVolume;
use crate::primitives::{Point2, Vec2};
use crate::scalar::{lift, PI, TWO_PI};
use num_traits::Float;

/// A 2D bounding circle defined by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingCircle<F> {
    center: Point2<F>,
    radius: F,
}

impl<F: Float> BoundingCircle<F> {
    /// Creates a new bounding circle.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle of the given radius centered on the origin.
    #[inline]
    pub fn from_radius(radius: F) -> Self {
        Self::new(Point2::origin(), radius)
    }

    /// Creates the smallest circle containing two points.
    #[inline]
    pub fn from_two_points(a: Point2<F>, b: Point2<F>) -> Self {
        let center = a.midpoint(b);
        let radius = center.distance(a);
        Self { center, radius }
    }

    /// Returns the radius.
    #[inline]
    pub fn radius(self) -> F {
        self.radius
    }

    /// Moves the circle so it is centered on `center`.
    #[inline]
    pub fn set_center(&mut self, center: Point2<F>) {
        self.center = center;
    }

    /// Moves the circle by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.center += offset;
    }

    /// Returns the area of the circle.
    #[inline]
    pub fn area(self) -> F {
        lift::<F>(PI) * self.radius * self.radius
    }

    /// Returns the circumference of the circle.
    #[inline]
    pub fn circumference(self) -> F {
        lift::<F>(TWO_PI) * self.radius
    }

    /// Returns `true` if this circle intersects another circle.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        let dist_sq = self.center.distance_squared(other.center);
        let r_sum = self.radius + other.radius;
        dist_sq <= r_sum * r_sum
    }

    /// Returns the distance from a point to the circle boundary.
    ///
    /// Negative if inside, positive if outside.
    #[inline]
    pub fn signed_distance_to_point(self, p: Point2<F>) -> F {
        self.center.distance(p) - self.radius
    }
}

impl<F: Float> Default for BoundingCircle<F> {
    /// A unit circle at the origin.
    fn default() -> Self {
        Self::from_radius(F::one())
    }
}

impl<F: Float> BoundingVolume<F> for BoundingCircle<F> {
    #[inline]
    fn center(&self) -> Point2<F> {
        self.center
    }

    /// Points exactly on the boundary are considered inside.
    ///
    /// Compares squared distance against squared radius; no square root.
    #[inline]
    fn contains(&self, p: Point2<F>) -> bool {
        self.center.distance_squared(p) <= self.radius * self.radius
    }
}
