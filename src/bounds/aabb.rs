//! Axis-aligned bounding box.

use super::BoundingVolume;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// A 2D axis-aligned bounding box.
///
/// Defined by a center point and full width and height. The box spans
/// `center.x ± width / 2` horizontally and `center.y ± height / 2`
/// vertically; both intervals are closed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb2<F> {
    center: Point2<F>,
    width: F,
    height: F,
}

impl<F: Float> Aabb2<F> {
    /// Creates a box around `center`.
    ///
    /// Does not validate that the extents are non-negative.
    #[inline]
    pub fn new(center: Point2<F>, width: F, height: F) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Creates a box of the given size centered on the origin.
    #[inline]
    pub fn from_size(width: F, height: F) -> Self {
        Self::new(Point2::origin(), width, height)
    }

    /// Creates a box from two arbitrary corners.
    ///
    /// Correctly handles corners in any orientation.
    #[inline]
    pub fn from_corners(a: Point2<F>, b: Point2<F>) -> Self {
        Self {
            center: a.midpoint(b),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// Creates the smallest box containing every point.
    ///
    /// Returns `None` if the iterator is empty.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2<F>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let (min, max) = iter.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        });
        Some(Self::from_corners(min, max))
    }

    /// Returns the full width.
    #[inline]
    pub fn width(self) -> F {
        self.width
    }

    /// Returns the full height.
    #[inline]
    pub fn height(self) -> F {
        self.height
    }

    /// Returns the size as a vector (width, height).
    #[inline]
    pub fn size(self) -> Vec2<F> {
        Vec2::new(self.width, self.height)
    }

    /// Returns half the size as a vector.
    #[inline]
    pub fn half_extents(self) -> Vec2<F> {
        self.size() / (F::one() + F::one())
    }

    /// Moves the box so it is centered on `center`.
    #[inline]
    pub fn set_center(&mut self, center: Point2<F>) {
        self.center = center;
    }

    /// Moves the box by `offset`.
    #[inline]
    pub fn translate(&mut self, offset: Vec2<F>) {
        self.center += offset;
    }

    /// Smallest x covered by the box.
    #[inline]
    pub fn left(self) -> F {
        self.center.x - self.half_extents().x
    }

    /// Largest x covered by the box.
    #[inline]
    pub fn right(self) -> F {
        self.center.x + self.half_extents().x
    }

    /// Smallest y covered by the box.
    #[inline]
    pub fn bottom(self) -> F {
        self.center.y - self.half_extents().y
    }

    /// Largest y covered by the box.
    #[inline]
    pub fn top(self) -> F {
        self.center.y + self.half_extents().y
    }

    /// Minimum corner (smallest x and y values).
    #[inline]
    pub fn min(self) -> Point2<F> {
        self.center - self.half_extents()
    }

    /// Maximum corner (largest x and y values).
    #[inline]
    pub fn max(self) -> Point2<F> {
        self.center + self.half_extents()
    }

    /// Returns the area of the box.
    #[inline]
    pub fn area(self) -> F {
        self.width * self.height
    }

    /// Returns the smallest box containing both boxes.
    pub fn union(self, other: Self) -> Self {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        Self::from_corners(
            Point2::new(a_min.x.min(b_min.x), a_min.y.min(b_min.y)),
            Point2::new(a_max.x.max(b_max.x), a_max.y.max(b_max.y)),
        )
    }

    /// Returns `true` if this box overlaps another box. Touching edges count.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.bottom() <= other.top()
            && self.top() >= other.bottom()
    }

    /// Returns the squared distance from a point to this box.
    ///
    /// Returns 0 if the point is inside the box.
    pub fn distance_squared_to_point(self, p: Point2<F>) -> F {
        let min = self.min();
        let max = self.max();

        let dx = if p.x < min.x {
            min.x - p.x
        } else if p.x > max.x {
            p.x - max.x
        } else {
            F::zero()
        };

        let dy = if p.y < min.y {
            min.y - p.y
        } else if p.y > max.y {
            p.y - max.y
        } else {
            F::zero()
        };

        dx * dx + dy * dy
    }

    /// Returns the distance from a point to this box.
    ///
    /// Returns 0 if the point is inside the box.
    #[inline]
    pub fn distance_to_point(self, p: Point2<F>) -> F {
        self.distance_squared_to_point(p).sqrt()
    }
}

impl<F: Float> BoundingVolume<F> for Aabb2<F> {
    #[inline]
    fn center(&self) -> Point2<F> {
        self.center
    }

    #[inline]
    fn contains(&self, p: Point2<F>) -> bool {
        let two = F::one() + F::one();
        let half_width = self.width / two;
        let half_height = self.height / two;

        p.x >= self.center.x - half_width
            && p.x <= self.center.x + half_width
            && p.y >= self.center.y - half_height
            && p.y <= self.center.y + half_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;
    use proptest::prelude::*;

    #[test]
    fn test_new() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(5.0, 5.0), 10.0, 4.0);
        assert_eq!(aabb.center(), Point2::new(5.0, 5.0));
        assert_eq!(aabb.width(), 10.0);
        assert_eq!(aabb.height(), 4.0);
    }

    #[test]
    fn test_from_size_centers_on_origin() {
        let aabb: Aabb2<f64> = Aabb2::from_size(2.0, 6.0);
        assert_eq!(aabb.center(), Point2::origin());
        assert_eq!(aabb.min(), Point2::new(-1.0, -3.0));
        assert_eq!(aabb.max(), Point2::new(1.0, 3.0));
    }

    #[test]
    fn test_from_corners() {
        // Corners in "wrong" order
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point2::new(10.0, 10.0), Point2::new(0.0, 0.0));
        assert_eq!(aabb.min(), Point2::new(0.0, 0.0));
        assert_eq!(aabb.max(), Point2::new(10.0, 10.0));
        assert_eq!(aabb.center(), Point2::new(5.0, 5.0));
    }

    #[test]
    fn test_from_points() {
        let points = vec![
            Point2::new(1.0, 2.0),
            Point2::new(-3.0, 5.0),
            Point2::new(4.0, -1.0),
        ];
        let aabb: Aabb2<f64> = Aabb2::from_points(points).unwrap();
        assert_eq!(aabb.left(), -3.0);
        assert_eq!(aabb.bottom(), -1.0);
        assert_eq!(aabb.right(), 4.0);
        assert_eq!(aabb.top(), 5.0);
    }

    #[test]
    fn test_from_points_empty() {
        let points: Vec<Point2<f64>> = vec![];
        assert!(Aabb2::from_points(points).is_none());
    }

    #[test]
    fn test_dimensions() {
        let aabb: Aabb2<f64> = Aabb2::from_size(10.0, 5.0);
        assert_eq!(aabb.size(), Vec2::new(10.0, 5.0));
        assert_eq!(aabb.half_extents(), Vec2::new(5.0, 2.5));
        assert_eq!(aabb.area(), 50.0);
    }

    #[test]
    fn test_contains_point() {
        let aabb: Aabb2<f64> = Aabb2::new(Point2::new(5.0, 5.0), 10.0, 10.0);

        assert!(aabb.contains(Point2::new(5.0, 5.0)));
        assert!(aabb.contains(Point2::new(0.0, 0.0))); // On boundary
        assert!(aabb.contains(Point2::new(10.0, 10.0))); // On boundary
        assert!(!aabb.contains(Point2::new(-1.0, 5.0)));
        assert!(!aabb.contains(Point2::new(5.0, 11.0)));
    }

    #[test]
    fn test_contains_boundary_tolerance() {
        let center = Point2::new(3.0, -2.0);
        let aabb: Aabb2<f64> = Aabb2::new(center, 4.0, 6.0);

        assert!(aabb.contains(center));
        assert!(aabb.contains(Point2::new(center.x + 2.0, center.y)));
        assert!(!aabb.contains(Point2::new(center.x + 2.0 + EPSILON, center.y)));
        assert!(aabb.contains(Point2::new(center.x, center.y - 3.0)));
        assert!(!aabb.contains(Point2::new(center.x, center.y - 3.0 - EPSILON)));
    }

    #[test]
    fn test_contains_nan_point() {
        let aabb: Aabb2<f64> = Aabb2::from_size(1.0, 1.0);
        assert!(!aabb.contains(Point2::new(f64::NAN, 0.0)));
    }

    #[test]
    fn test_move_center() {
        let mut aabb: Aabb2<f64> = Aabb2::from_size(2.0, 2.0);
        let p = Point2::new(10.0, 10.0);
        assert!(!aabb.contains(p));

        aabb.set_center(Point2::new(9.5, 9.5));
        assert!(aabb.contains(p));

        aabb.translate(Vec2::new(-5.0, 0.0));
        assert_eq!(aabb.center(), Point2::new(4.5, 9.5));
        assert!(!aabb.contains(p));
    }

    #[test]
    fn test_intersects() {
        let a: Aabb2<f64> = Aabb2::from_corners(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));
        let b = Aabb2::from_corners(Point2::new(5.0, 5.0), Point2::new(15.0, 15.0));
        let c = Aabb2::from_corners(Point2::new(20.0, 20.0), Point2::new(30.0, 30.0));

        assert!(a.intersects(b));
        assert!(b.intersects(a));
        assert!(!a.intersects(c));
    }

    #[test]
    fn test_union() {
        let a: Aabb2<f64> = Aabb2::from_corners(Point2::new(0.0, 0.0), Point2::new(5.0, 5.0));
        let b = Aabb2::from_corners(Point2::new(3.0, 3.0), Point2::new(10.0, 10.0));
        let u = a.union(b);

        assert_eq!(u.min(), Point2::new(0.0, 0.0));
        assert_eq!(u.max(), Point2::new(10.0, 10.0));
    }

    #[test]
    fn test_distance_to_point() {
        let aabb: Aabb2<f64> = Aabb2::from_corners(Point2::new(0.0, 0.0), Point2::new(10.0, 10.0));

        // Inside
        assert_eq!(aabb.distance_to_point(Point2::new(5.0, 5.0)), 0.0);

        // Outside, aligned with edge
        assert_eq!(aabb.distance_to_point(Point2::new(15.0, 5.0)), 5.0);

        // Outside, diagonal (3-4-5 triangle)
        assert_eq!(aabb.distance_to_point(Point2::new(13.0, 14.0)), 5.0);
    }

    proptest! {
        #[test]
        fn prop_center_always_contained(
            cx in -1e4f64..1e4, cy in -1e4f64..1e4,
            w in 0.0f64..1e3, h in 0.0f64..1e3,
        ) {
            let center = Point2::new(cx, cy);
            let aabb = Aabb2::new(center, w, h);
            prop_assert!(aabb.contains(center));
        }

        #[test]
        fn prop_contains_agrees_with_distance(
            px in -20.0f64..20.0, py in -20.0f64..20.0,
        ) {
            let aabb = Aabb2::new(Point2::new(1.0, -1.0), 8.0, 4.0);
            let p = Point2::new(px, py);
            prop_assert_eq!(aabb.contains(p), aabb.distance_squared_to_point(p) == 0.0);
        }
    }
}
