//! SIMD-accelerated containment queries.
//!
//! Tests four points per instruction against an [`Aabb2`](crate::Aabb2) or
//! [`BoundingCircle`](crate::BoundingCircle). Answers are identical to the
//! scalar [`BoundingVolume::contains`](crate::BoundingVolume::contains),
//! including on the boundary.
//!
//! Enable with the `simd` feature flag:
//! ```toml
//! boundum = { version = "0.1", features = ["simd"] }
//! ```

mod contains;
mod point;

pub use contains::{points_inside, BatchContains};
pub use point::Point2x4;
