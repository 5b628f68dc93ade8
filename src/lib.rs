//! boundum - Vectors, points, and bounding volumes for spatial queries
//!
//! A small geometry kernel for hit-testing and culling: `Copy` vector and
//! point types with a tolerance-based equality model, flat-buffer marshaling,
//! and bounding volumes that answer point-containment queries.
//!
//! ```
//! use boundum::{Aabb2, BoundingCircle, BoundingVolume, Point2};
//!
//! let button = Aabb2::new(Point2::new(10.0, 10.0), 4.0, 2.0);
//! let knob = BoundingCircle::new(Point2::new(0.0, 0.0), 5.0);
//!
//! assert!(button.contains(Point2::new(12.0, 11.0)));
//! assert!(knob.contains(Point2::new(3.0, 4.0)));
//! ```

pub mod bounds;
pub mod buffer;
pub mod error;
pub mod primitives;
pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

pub use bounds::{volumes_containing, Aabb2, BoundingCircle, BoundingVolume};
pub use buffer::{ComponentBuffer, Components};
pub use error::{GeomError, Result};
pub use primitives::{Point2, Point3, Vec2, Vec3};
pub use scalar::{clamp, is_equal, ApproxEq, EPSILON};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_vec2_field_names() {
        let json = serde_json::to_string(&Vec2::new(1.5f64, -2.25)).unwrap();
        assert_eq!(json, r#"{"x":1.5,"y":-2.25}"#);
    }

    #[test]
    fn test_primitives_round_trip() {
        let v = Vec3::new(0.5f64, -4.0, 8.25);
        let back: Vec3<f64> = serde_json::from_str(&serde_json::to_string(&v).unwrap()).unwrap();
        assert_eq!(back, v);

        let p = Point3::new(1.0f32, 2.5, -3.0);
        let back: Point3<f32> = serde_json::from_str(&serde_json::to_string(&p).unwrap()).unwrap();
        assert_eq!(back, p);

        let back: Point2<f64> = serde_json::from_str(r#"{"x":3.0,"y":-1.0}"#).unwrap();
        assert_eq!(back, Point2::new(3.0, -1.0));
    }

    #[test]
    fn test_volumes_round_trip() {
        let aabb = Aabb2::new(Point2::new(1.0f64, 2.0), 4.0, 0.5);
        let json = serde_json::to_string(&aabb).unwrap();
        let back: Aabb2<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, aabb);
        assert!(back.contains(Point2::new(3.0, 2.25)));

        let circle = BoundingCircle::<f64>::default();
        let json = serde_json::to_string(&circle).unwrap();
        assert_eq!(json, r#"{"center":{"x":0.0,"y":0.0},"radius":1.0}"#);
        let back: BoundingCircle<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, circle);
    }
}
