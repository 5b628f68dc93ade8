//! Scalar constants and tolerance helpers shared by every geometric type.
//!
//! All constants are derived from the single [`PI`] value at compile time.
//! Functions are generic over [`Float`] so the same tolerance model applies
//! to `f32` and `f64` geometry.

use num_traits::Float;

/// Margin of error for tolerant floating-point comparison.
pub const EPSILON: f64 = 1e-7;

/// The mathematical constant pi.
pub const PI: f64 = std::f64::consts::PI;

/// Half of pi.
pub const HALF_PI: f64 = 0.5 * PI;

/// Twice pi.
pub const TWO_PI: f64 = 2.0 * PI;

/// One and a half times pi.
pub const THREE_HALVES_PI: f64 = 1.5 * PI;

/// The reciprocal of pi.
pub const INVERSE_PI: f64 = 1.0 / PI;

/// Multiply degrees by this to get radians.
pub const DEGREES_TO_RADIANS: f64 = PI / 180.0;

/// Multiply radians by this to get degrees.
pub const RADIANS_TO_DEGREES: f64 = 180.0 / PI;

/// Converts an `f64` constant into the target float type.
///
/// Every `Float` can represent (possibly with rounding) any finite `f64`,
/// so the NaN fallback is unreachable for the standard float types.
#[inline]
pub(crate) fn lift<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

/// Returns [`EPSILON`] in the requested float type.
#[inline]
pub fn epsilon<F: Float>() -> F {
    lift(EPSILON)
}

/// Bounds `value` to the closed interval `[min, max]`.
///
/// Applies the lower bound first, then the upper bound, so an inverted
/// interval (`min > max`) yields `max`.
#[inline]
pub fn clamp<F: Float>(value: F, min: F, max: F) -> F {
    value.max(min).min(max)
}

/// Returns `true` if `a` and `b` differ by strictly less than [`EPSILON`].
#[inline]
pub fn is_equal<F: Float>(a: F, b: F) -> bool {
    (a - b).abs() < epsilon()
}

/// Converts an angle from degrees to radians.
#[inline]
pub fn to_radians<F: Float>(degrees: F) -> F {
    degrees * lift(DEGREES_TO_RADIANS)
}

/// Converts an angle from radians to degrees.
#[inline]
pub fn to_degrees<F: Float>(radians: F) -> F {
    radians * lift(RADIANS_TO_DEGREES)
}

/// Tolerant equality using [`is_equal`] on every component.
///
/// `PartialEq` on the geometric types is exact; this trait is the
/// epsilon-based comparator. Both operands must be the same type, so
/// comparing a 2D value against a 3D value does not compile.
pub trait ApproxEq {
    /// Returns `true` if every component of `self` is within [`EPSILON`]
    /// of the matching component of `other`.
    fn approx_eq(&self, other: &Self) -> bool;
}

macro_rules! impl_approx_eq_float {
    ($($t:ty),*) => {
        $(
            impl ApproxEq for $t {
                #[inline]
                fn approx_eq(&self, other: &Self) -> bool {
                    is_equal(*self, *other)
                }
            }
        )*
    };
}

impl_approx_eq_float!(f32, f64);
