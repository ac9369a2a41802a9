//! Coordinate scalars and epsilon-aware equality.
//!
//! Purpose
//! - Fix the capability set every hull algorithm needs from a coordinate:
//!   copyable, ordered, signed arithmetic, and an `equals` that is exact for
//!   integers and tolerant for floats.
//!
//! Notes
//! - The float window is the machine epsilon of the type, absolute rather than
//!   scale-relative. Large magnitudes may compare equal or unequal near
//!   cancellation; inputs are expected to be finite and moderately scaled.
//! - Unsigned integers do not implement `Coord`: cross products go negative.

use std::fmt::Debug;

use num_traits::{Float, Signed};

/// A coordinate scalar usable by the hull algorithms.
pub trait Coord: Copy + Debug + PartialOrd + Signed + 'static {
    /// Floating type used for slope ratios (`-x / y`) so that integer
    /// coordinates are never truncated by integer division.
    type Ratio: Float + Debug;

    /// Numeric equality: exact for integers, `±epsilon` for floats.
    fn equals(self, other: Self) -> bool;

    fn to_ratio(self) -> Self::Ratio;

    /// Lossy widening used by the trigonometric reference comparisons.
    fn as_f64(self) -> f64;
}

/// `true` iff `b - ε <= a <= b + ε` with ε the machine epsilon of `F`.
#[inline]
pub fn float_equals<F: Float>(a: F, b: F) -> bool {
    let eps = F::epsilon();
    b - eps <= a && a <= b + eps
}

/// Numeric equality for any coordinate type.
#[inline]
pub fn equals<T: Coord>(a: T, b: T) -> bool {
    a.equals(b)
}

macro_rules! impl_coord_float {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            type Ratio = $t;
            #[inline]
            fn equals(self, other: Self) -> bool {
                float_equals(self, other)
            }
            #[inline]
            fn to_ratio(self) -> $t {
                self
            }
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

macro_rules! impl_coord_int {
    ($($t:ty),*) => {$(
        impl Coord for $t {
            type Ratio = f64;
            #[inline]
            fn equals(self, other: Self) -> bool {
                self == other
            }
            #[inline]
            fn to_ratio(self) -> f64 {
                self as f64
            }
            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }
        }
    )*};
}

impl_coord_float!(f32, f64);
impl_coord_int!(i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_equality_uses_machine_epsilon() {
        assert!(equals(0.1 + 0.2, 0.3));
        assert!(equals(1.0f64, 1.0 + f64::EPSILON));
        assert!(!equals(1.0f64, 1.0 + 4.0 * f64::EPSILON));
        assert!(equals(0.5f32, 0.5f32 + f32::EPSILON / 2.0));
    }

    #[test]
    fn float_window_is_absolute_not_relative() {
        // One ulp at 1e6 is far larger than epsilon, so neighbours differ.
        let a = 1.0e6f64;
        let b = f64::from_bits(a.to_bits() + 1);
        assert!(!equals(a, b));
        // Tiny magnitudes all collapse into the same window.
        assert!(equals(1e-300f64, -1e-300));
    }

    #[test]
    fn integer_equality_is_exact() {
        assert!(equals(7i32, 7));
        assert!(!equals(7i64, 8));
        assert!(equals(-3isize, -3));
    }

    #[test]
    fn integer_ratio_is_not_truncated() {
        let r = 7i32.to_ratio() / 2i32.to_ratio();
        assert!((r - 3.5).abs() < 1e-12);
    }
}
