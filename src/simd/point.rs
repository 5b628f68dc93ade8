//! Batches of four 2D points.

use wide::f32x4;

use crate::primitives::Point2;

/// A batch of 4 2D points using SIMD.
#[derive(Clone, Copy, Debug)]
pub struct Point2x4 {
    pub x: f32x4,
    pub y: f32x4,
}

impl Point2x4 {
    /// Creates a new batch of points.
    #[inline]
    pub fn new(x: f32x4, y: f32x4) -> Self {
        Self { x, y }
    }

    /// Creates a batch from 4 individual points.
    #[inline]
    pub fn from_points(p0: Point2<f32>, p1: Point2<f32>, p2: Point2<f32>, p3: Point2<f32>) -> Self {
        Self {
            x: f32x4::new([p0.x, p1.x, p2.x, p3.x]),
            y: f32x4::new([p0.y, p1.y, p2.y, p3.y]),
        }
    }

    /// Creates a batch from an array of 4 points.
    #[inline]
    pub fn from_array(points: [Point2<f32>; 4]) -> Self {
        let [p0, p1, p2, p3] = points;
        Self::from_points(p0, p1, p2, p3)
    }

    /// Creates a batch where all 4 points are the same.
    #[inline]
    pub fn splat(p: Point2<f32>) -> Self {
        Self {
            x: f32x4::splat(p.x),
            y: f32x4::splat(p.y),
        }
    }

    /// Computes the squared distance from each point to a single target point.
    #[inline]
    pub fn distance_squared_to(self, target: Point2<f32>) -> f32x4 {
        let dx = self.x - f32x4::splat(target.x);
        let dy = self.y - f32x4::splat(target.y);
        dx * dx + dy * dy
    }

    /// Extracts the 4 points as an array.
    #[inline]
    pub fn to_array(self) -> [Point2<f32>; 4] {
        let x = self.x.to_array();
        let y = self.y.to_array();
        [
            Point2::new(x[0], y[0]),
            Point2::new(x[1], y[1]),
            Point2::new(x[2], y[2]),
            Point2::new(x[3], y[3]),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_round_trip() {
        let points = [
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 4.0),
            Point2::new(5.0, 6.0),
            Point2::new(7.0, 8.0),
        ];
        let batch = Point2x4::from_array(points);
        assert_eq!(batch.to_array(), points);
    }

    #[test]
    fn test_from_array_lane_order() {
        let batch = Point2x4::from_array([
            Point2::new(0.0, -1.0),
            Point2::new(1.0, -2.0),
            Point2::new(2.0, -3.0),
            Point2::new(3.0, -4.0),
        ]);
        assert_eq!(batch.x.to_array(), [0.0, 1.0, 2.0, 3.0]);
        assert_eq!(batch.y.to_array(), [-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_splat() {
        let batch = Point2x4::splat(Point2::new(1.5, -2.5));
        for p in batch.to_array() {
            assert_eq!(p, Point2::new(1.5, -2.5));
        }
    }

    #[test]
    fn test_distance_squared_to() {
        let batch = Point2x4::from_points(
            Point2::new(3.0, 4.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(-6.0, 8.0),
        );
        let d = batch.distance_squared_to(Point2::new(0.0, 0.0)).to_array();
        assert_eq!(d, [25.0, 0.0, 1.0, 100.0]);
    }
}
