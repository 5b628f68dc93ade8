//! Bounding volumes for point-containment queries.
//!
//! Every shape implements [`BoundingVolume`], so hit-testing code can hold a
//! mix of shapes behind `&dyn BoundingVolume<F>` and query them uniformly.
//! Volumes cache nothing: each [`contains`](BoundingVolume::contains) call
//! recomputes from the center and extents, and has no side effects.

mod aabb;
mod circle;

pub use aabb::Aabb2;
pub use circle::BoundingCircle;

use crate::primitives::Point2;

/// A 2D shape that answers "is this point inside?" queries.
pub trait BoundingVolume<F> {
    /// Returns the center of the volume.
    fn center(&self) -> Point2<F>;

    /// Returns `true` if `point` lies inside the volume or on its boundary.
    fn contains(&self, point: Point2<F>) -> bool;
}

impl<F, V: BoundingVolume<F> + ?Sized> BoundingVolume<F> for &V {
    #[inline]
    fn center(&self) -> Point2<F> {
        (**self).center()
    }

    #[inline]
    fn contains(&self, point: Point2<F>) -> bool {
        (**self).contains(point)
    }
}

impl<F, V: BoundingVolume<F> + ?Sized> BoundingVolume<F> for Box<V> {
    #[inline]
    fn center(&self) -> Point2<F> {
        (**self).center()
    }

    #[inline]
    fn contains(&self, point: Point2<F>) -> bool {
        (**self).contains(point)
    }
}

/// Returns the indices of the volumes that contain `point`.
pub fn volumes_containing<F, V>(volumes: &[V], point: Point2<F>) -> Vec<usize>
where
    F: Copy,
    V: BoundingVolume<F>,
{
    volumes
        .iter()
        .enumerate()
        .filter(|(_, v)| v.contains(point))
        .map(|(i, _)| i)
        .collect()
}
