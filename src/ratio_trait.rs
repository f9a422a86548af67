//! Trait system for generic rational arithmetic over fixed-width signed integers.
//!
//! `Rational<T>` stores its numerator and denominator in a primitive signed
//! integer and performs every intermediate product in a wider one, so a cross
//! product of two `T` values can never overflow before the result is reduced.
//!
//! # Architecture
//!
//! The trait system uses two levels:
//!
//! - [`WideInteger`]: checked arithmetic, sign queries and magnitude
//!   conversion, shared by storage and intermediate types
//! - [`RatioInteger`]: types that can back a `Rational<T>`, each paired with
//!   a `Wide` type at least twice its width
//!
//! # Example
//!
//! ```
//! use signed_ratio::{RatioInteger, WideInteger};
//!
//! let wide = 46_341i32.to_wide();
//! assert_eq!(wide.checked_mul(wide), Some(2_147_488_281i64));
//! assert_eq!(WideInteger::checked_gcd(-12i32, 18), Some(6));
//! ```

use core::fmt::{Debug, Display};
use core::hash::Hash;

/// Operations for types used in rational arithmetic, either as storage or
/// as the wide intermediate of a storage type.
///
/// # Relationship to RatioInteger
///
/// Every `RatioInteger` also implements `WideInteger`, and so does its
/// `Wide` associated type. `i128` is the terminal type: it is the wide
/// partner of `i64` and implements only this trait.
pub trait WideInteger:
    Copy + Debug + Display + PartialEq + Eq + PartialOrd + Ord + Hash + Send + Sync + Sized + 'static
{
    /// Number of bits in this integer type.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// The smallest representable value.
    const MIN: Self;

    /// The largest representable value.
    const MAX: Self;

    /// Returns `true` if this value is zero.
    #[inline(always)]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Returns `true` if this value is strictly negative.
    fn is_negative(self) -> bool;

    /// Checked addition, `None` on overflow.
    fn checked_add(self, other: Self) -> Option<Self>;

    /// Checked subtraction, `None` on overflow.
    fn checked_sub(self, other: Self) -> Option<Self>;

    /// Checked multiplication, `None` on overflow.
    fn checked_mul(self, other: Self) -> Option<Self>;

    /// Checked truncating division, `None` on a zero divisor or overflow.
    fn checked_div(self, other: Self) -> Option<Self>;

    /// Checked remainder, `None` on a zero divisor or overflow.
    fn checked_rem(self, other: Self) -> Option<Self>;

    /// Checked negation, `None` for `MIN`.
    fn checked_neg(self) -> Option<Self>;

    /// Absolute value widened to `u128`. Never overflows, `MIN` included.
    fn unsigned_abs_u128(self) -> u128;

    /// Rebuild a value from its sign and magnitude.
    ///
    /// Returns `None` if the result is not representable. A negative
    /// magnitude of `2^(BITS-1)` yields `MIN`.
    fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self>;

    /// Convert to the nearest `f64`.
    fn to_f64(self) -> f64;

    /// Non-negative greatest common divisor of `self` and `other`.
    ///
    /// Returns `None` only when the divisor is `2^(BITS-1)`, which happens
    /// for `gcd(MIN, MIN)` and `gcd(MIN, 0)`.
    #[inline]
    fn checked_gcd(self, other: Self) -> Option<Self> {
        Self::from_magnitude(
            false,
            gcd_magnitude(self.unsigned_abs_u128(), other.unsigned_abs_u128()),
        )
    }
}

/// Integer type suitable for use in `Rational<T>`.
///
/// # Associated Type: Wide
///
/// The `Wide` type must hold the product of any two values of type `Self`
/// plus the sum of two such products:
/// - Minimum requirement: `Wide::BITS >= Self::BITS * 2`
///
/// # Implemented Types
///
/// `i8`, `i16`, `i32` and `i64`. `i128` has no wider primitive partner and
/// only implements `WideInteger`.
pub trait RatioInteger: WideInteger {
    /// The wide type for intermediate products.
    ///
    /// Must satisfy: `Wide::BITS >= Self::BITS * 2`
    type Wide: WideInteger;

    /// Losslessly convert to the wide type.
    fn to_wide(self) -> Self::Wide;
}

/// Macro to implement WideInteger for a primitive signed integer.
macro_rules! impl_wide_integer {
    ($type:ty, $unsigned:ty) => {
        impl WideInteger for $type {
            const BITS: u32 = <$type>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$type>::MIN;
            const MAX: Self = <$type>::MAX;

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline(always)]
            fn checked_add(self, other: Self) -> Option<Self> {
                <$type>::checked_add(self, other)
            }

            #[inline(always)]
            fn checked_sub(self, other: Self) -> Option<Self> {
                <$type>::checked_sub(self, other)
            }

            #[inline(always)]
            fn checked_mul(self, other: Self) -> Option<Self> {
                <$type>::checked_mul(self, other)
            }

            #[inline(always)]
            fn checked_div(self, other: Self) -> Option<Self> {
                <$type>::checked_div(self, other)
            }

            #[inline(always)]
            fn checked_rem(self, other: Self) -> Option<Self> {
                <$type>::checked_rem(self, other)
            }

            #[inline(always)]
            fn checked_neg(self) -> Option<Self> {
                <$type>::checked_neg(self)
            }

            #[inline(always)]
            fn unsigned_abs_u128(self) -> u128 {
                self.unsigned_abs() as u128
            }

            #[inline]
            fn from_magnitude(negative: bool, magnitude: u128) -> Option<Self> {
                let magnitude = <$unsigned>::try_from(magnitude).ok()?;
                if negative {
                    <$type>::checked_sub_unsigned(0, magnitude)
                } else {
                    <$type>::try_from(magnitude).ok()
                }
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

/// Macro to implement RatioInteger for a (narrow, wide) type pair.
macro_rules! impl_ratio_integer {
    ($narrow:ty, $unsigned:ty, $wide:ty) => {
        impl_wide_integer!($narrow, $unsigned);

        impl RatioInteger for $narrow {
            type Wide = $wide;

            #[inline(always)]
            fn to_wide(self) -> Self::Wide {
                <$wide>::from(self)
            }
        }
    };
}

impl_ratio_integer!(i8, u8, i16);
impl_ratio_integer!(i16, u16, i32);
impl_ratio_integer!(i32, u32, i64);
impl_ratio_integer!(i64, u64, i128);

// i128 is terminal - only WideInteger
impl_wide_integer!(i128, u128);

/// Greatest common divisor of two magnitudes using the Euclidean algorithm.
///
/// `gcd_magnitude(0, 0)` is `0`; otherwise the result is at least `1`.
///
/// # Examples
///
/// ```
/// use signed_ratio::gcd_magnitude;
///
/// assert_eq!(gcd_magnitude(48, 18), 6);
/// assert_eq!(gcd_magnitude(0, 7), 7);
/// ```
#[inline]
pub fn gcd_magnitude(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}
