//! Numeric bound for rectangle coordinates.
//!
//! [`Scalar`] is implemented for the signed integer and floating-point
//! primitives. Layout code usually works in `i32` pixels, while drawing code
//! that needs sub-pixel placement uses `f32` or `f64`.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A signed numeric type usable as a rectangle coordinate.
///
/// Division follows the primitive's own semantics: integer types truncate
/// toward zero, so `middle_x` of a rectangle with odd width rounds down for
/// positive extents.
pub trait Scalar:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// The additive identity.
    const ZERO: Self;

    /// The value two, used for halving extents.
    const TWO: Self;

    /// Lossless (for floats) or exact (for integers in range) widening to `f64`.
    fn to_f64(self) -> f64;

    /// Narrowing conversion from `f64`.
    ///
    /// Integer types truncate toward zero and saturate at their bounds;
    /// `NaN` becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Narrowing conversion from `f64` that rejects values the type cannot
    /// hold.
    ///
    /// Returns `None` for `NaN`, infinities and values outside the type's
    /// range. Integer types truncate fractional parts toward zero.
    fn try_from_f64(value: f64) -> Option<Self>;

    /// Addition that returns `None` instead of overflowing.
    ///
    /// For floating-point types, a non-finite sum counts as overflow.
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Subtraction that returns `None` instead of overflowing.
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Half of this value.
    #[inline]
    fn half(self) -> Self {
        self / Self::TWO
    }
}

macro_rules! impl_scalar_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0;
                const TWO: Self = 2;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn try_from_f64(value: f64) -> Option<Self> {
                    // MIN is a power of two, so both bounds are exact in f64.
                    let lower = <$ty>::MIN as f64;
                    let value = value.trunc();
                    (value >= lower && value < -lower).then_some(value as $ty)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }
            }
        )*
    };
}

macro_rules! impl_scalar_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const ZERO: Self = 0.0;
                const TWO: Self = 2.0;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as $ty
                }

                #[inline]
                fn try_from_f64(value: f64) -> Option<Self> {
                    let narrowed = value as $ty;
                    narrowed.is_finite().then_some(narrowed)
                }

                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }

                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    let difference = self - rhs;
                    difference.is_finite().then_some(difference)
                }
            }
        )*
    };
}

impl_scalar_int!(i8, i16, i32, i64, isize);
impl_scalar_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_half_truncates() {
        assert_eq!(7i32.half(), 3);
        assert_eq!((-7i32).half(), -3);
        assert_eq!(8i64.half(), 4);
    }

    #[test]
    fn test_float_half() {
        assert_eq!(7.0f32.half(), 3.5);
        assert_eq!((-1.0f64).half(), -0.5);
    }

    #[test]
    fn test_from_f64_truncates_and_saturates() {
        assert_eq!(i32::from_f64(12.9), 12);
        assert_eq!(i32::from_f64(-12.9), -12);
        assert_eq!(i8::from_f64(1000.0), i8::MAX);
        assert_eq!(i16::from_f64(f64::NAN), 0);
        assert_eq!(f32::from_f64(0.25), 0.25);
    }

    #[test]
    fn test_try_from_f64_rejects_out_of_range() {
        assert_eq!(i32::try_from_f64(12.9), Some(12));
        assert_eq!(i32::try_from_f64(-2_147_483_648.0), Some(i32::MIN));
        assert_eq!(i32::try_from_f64(2_147_483_647.5), Some(i32::MAX));
        assert_eq!(i32::try_from_f64(2_147_483_648.0), None);
        assert_eq!(i32::try_from_f64(3e9), None);
        assert_eq!(i64::try_from_f64(9.3e18), None);
        assert_eq!(i8::try_from_f64(f64::NAN), None);
        assert_eq!(i16::try_from_f64(f64::NEG_INFINITY), None);
        assert_eq!(f32::try_from_f64(0.25), Some(0.25));
        assert_eq!(f32::try_from_f64(1e40), None);
        assert_eq!(f64::try_from_f64(f64::NAN), None);
    }

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(Scalar::checked_sub(300i32, 2_000_000_000), Some(-1_999_999_700));
        assert_eq!(Scalar::checked_sub(-1_999_999_700i32, 2_000_000_000), None);
        assert_eq!(Scalar::checked_add(i32::MAX, 1), None);
        assert_eq!(Scalar::checked_add(1.5f64, 2.0), Some(3.5));
        assert_eq!(Scalar::checked_add(f32::MAX, f32::MAX), None);
        assert_eq!(Scalar::checked_sub(f64::MIN, f64::MAX), None);
    }
}
