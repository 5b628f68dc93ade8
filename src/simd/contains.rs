//! Four-wide containment tests.

use wide::{f32x4, CmpGe, CmpLe};

use crate::bounds::{Aabb2, BoundingCircle, BoundingVolume};
use crate::primitives::Point2;

use super::point::Point2x4;

/// Bounding volumes that can test a [`Point2x4`] batch at once.
pub trait BatchContains: BoundingVolume<f32> {
    /// Returns a 4-bit mask; bit `i` is set when lane `i` is contained.
    fn contains_batch(&self, points: Point2x4) -> u8;
}

impl BatchContains for Aabb2<f32> {
    #[inline]
    fn contains_batch(&self, points: Point2x4) -> u8 {
        let center = self.center();
        let half_width = self.width() / 2.0;
        let half_height = self.height() / 2.0;

        let inside = points.x.cmp_ge(f32x4::splat(center.x - half_width))
            & points.x.cmp_le(f32x4::splat(center.x + half_width))
            & points.y.cmp_ge(f32x4::splat(center.y - half_height))
            & points.y.cmp_le(f32x4::splat(center.y + half_height));

        inside.move_mask() as u8
    }
}

impl BatchContains for BoundingCircle<f32> {
    #[inline]
    fn contains_batch(&self, points: Point2x4) -> u8 {
        let radius_sq = f32x4::splat(self.radius() * self.radius());
        let inside = points.distance_squared_to(self.center()).cmp_le(radius_sq);
        inside.move_mask() as u8
    }
}

/// Returns the indices of the points contained in `volume`.
///
/// Processes points in batches of 4, with the remainder tested one at a time.
pub fn points_inside<V: BatchContains>(points: &[Point2<f32>], volume: &V) -> Vec<usize> {
    let mut result = Vec::new();

    let mut chunks = points.chunks_exact(4);
    for (chunk_index, chunk) in chunks.by_ref().enumerate() {
        let batch = Point2x4::from_points(chunk[0], chunk[1], chunk[2], chunk[3]);
        let mask = volume.contains_batch(batch);
        if mask != 0 {
            for lane in 0..4 {
                if mask & (1 << lane) != 0 {
                    result.push(chunk_index * 4 + lane);
                }
            }
        }
    }

    let offset = points.len() - chunks.remainder().len();
    for (i, p) in chunks.remainder().iter().enumerate() {
        if volume.contains(*p) {
            result.push(offset + i);
        }
    }

    result
}
