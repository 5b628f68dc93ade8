//! Floating-point vectors and points.
//!
//! `Vec2`/`Vec3` are free vectors (direction and magnitude). `Point2`/`Point3`
//! are bound points (locations). All four are `Copy` values and marshal to a
//! [`ComponentBuffer`](crate::buffer::ComponentBuffer) in `x, y[, z]` order.

mod point2;
mod point3;
mod vec2;
mod vec3;

pub use point2::Point2;
pub use point3::Point3;
pub use vec2::Vec2;
pub use vec3::Vec3;
