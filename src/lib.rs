//! Exact rational arithmetic over fixed-width signed integers.
//!
//! This library provides `Rational<T>`, a rational number value type backed by
//! any primitive signed integer from `i8` to `i64`.
//!
//! # Features
//!
//! - **Generic over integer width**: `Rational8` through `Rational64`
//! - **Always reduced on read**: `numer()`/`denom()` return lowest terms with a
//!   non-negative denominator
//! - **NaN sentinel**: a zero denominator never panics, it produces a NaN value
//!   that propagates through every operator
//! - **Overflow-safe intermediates**: cross products are computed in a type twice
//!   as wide as the storage integer
//!
//! # Design Philosophy
//!
//! A `Rational<T>` keeps the numerator and denominator exactly as constructed and
//! reduces them whenever they are read. Arithmetic results are reduced before
//! they are stored. Only one operation can fail: narrowing a rational to a plain
//! integer, which returns a [`RatioError`].
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use signed_ratio::Rational32;
//!
//! let a = Rational32::new(1, 2);
//! let b = Rational32::new(1, 3);
//!
//! let sum = a + b;
//! assert_eq!(sum.numer(), 5);
//! assert_eq!(sum.denom(), 6);
//!
//! // Read access always reduces
//! let r = Rational32::new(2, -4);
//! assert_eq!(r.reduced(), (-1, 2));
//! ```
//!
//! ## NaN Propagation
//!
//! ```
//! use signed_ratio::Rational32;
//!
//! let half = Rational32::new(1, 2);
//! let zero = Rational32::zero();
//!
//! assert!((half / zero).is_nan());
//! assert!((half + Rational32::new(3, 0)).is_nan());
//! assert!(f64::from(Rational32::nan()).is_nan());
//! ```
//!
//! ## Conversions
//!
//! ```
//! use signed_ratio::{RatioError, Rational64};
//!
//! let three = Rational64::from(3);
//! assert_eq!(i64::try_from(three * Rational64::new(2, 3)), Ok(2));
//! assert!(matches!(
//!     i64::try_from(Rational64::new(1, 2)),
//!     Err(RatioError::NotAnInteger { .. })
//! ));
//! assert_eq!(f64::from(Rational64::new(3, 4)), 0.75);
//! ```

mod error;
pub mod ratio_trait;

pub use crate::error::{RatioError, RatioResult};
pub use crate::ratio_trait::{gcd_magnitude, RatioInteger, WideInteger};

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};
use log::trace;

/// A rational number stored as a raw numerator/denominator pair plus a NaN flag.
///
/// # Type Parameter
///
/// `T` must implement [`RatioInteger`]: `i8`, `i16`, `i32` or `i64`.
///
/// # Invariants
///
/// - A zero denominator at construction sets the NaN flag; nothing panics
/// - A zero numerator is stored over the denominator `1`
/// - The stored pair may be unreduced; every read reduces it and moves the sign
///   onto the numerator
/// - All NaN values compare equal and read as `1/0`
///
/// # Examples
///
/// ```
/// use signed_ratio::Rational;
///
/// let r = Rational::<i16>::new(-6, -8);
/// assert_eq!(r.raw_numer(), -6);
/// assert_eq!(r.numer(), 3);
/// assert_eq!(r.denom(), 4);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rational<T: RatioInteger> {
    numer: T,
    denom: T,
    nan: bool,
}

impl<T: RatioInteger> Rational<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational from a numerator and denominator without reducing.
    ///
    /// A zero denominator yields a NaN value; a zero numerator is stored as `0/1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use signed_ratio::Rational32;
    ///
    /// assert!(Rational32::new(7, 0).is_nan());
    /// assert_eq!(Rational32::new(0, -5).reduced(), (0, 1));
    /// ```
    #[inline]
    pub fn new(numer: T, denom: T) -> Self {
        Self {
            numer,
            denom: if numer.is_zero() { T::ONE } else { denom },
            nan: denom.is_zero(),
        }
    }

    /// Create the rational `x/1`.
    #[inline]
    pub fn from_integer(x: T) -> Self {
        Self::new(x, T::ONE)
    }

    /// The canonical NaN value, `1/0`.
    #[inline(always)]
    pub const fn nan() -> Self {
        Self {
            numer: T::ONE,
            denom: T::ZERO,
            nan: true,
        }
    }

    /// Create a rational representing 0.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self {
            numer: T::ZERO,
            denom: T::ONE,
            nan: false,
        }
    }

    /// Create a rational representing 1.
    #[inline(always)]
    pub const fn one() -> Self {
        Self {
            numer: T::ONE,
            denom: T::ONE,
            nan: false,
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    /// Check if the rational is NaN.
    #[inline(always)]
    pub fn is_nan(&self) -> bool {
        self.nan
    }

    /// The numerator as stored, before reduction.
    #[inline(always)]
    pub fn raw_numer(&self) -> T {
        self.numer
    }

    /// The denominator as stored, before reduction.
    #[inline(always)]
    pub fn raw_denom(&self) -> T {
        self.denom
    }

    /// Check if the rational is zero. NaN is not zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.nan && self.numer.is_zero()
    }

    /// Check if the rational is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.nan && !self.numer.is_zero() && self.numer.is_negative() != self.denom.is_negative()
    }

    /// Check if the rational is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.nan && !self.numer.is_zero() && self.numer.is_negative() == self.denom.is_negative()
    }

    /// Check if the rational represents an integer (reduced denominator is 1).
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(
            self.reduced_in::<T::Wide>(),
            Some((_, denom)) if denom == <T::Wide as WideInteger>::ONE
        )
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    /// The numerator in lowest terms, carrying the sign of the value.
    ///
    /// # Panics
    ///
    /// Panics if the reduced value does not fit `T`. Stored pairs near `T::MIN`,
    /// such as `1/MIN` or `MIN/-1`, cannot be read back with the sign on the
    /// numerator; use [`checked_reduced`](Rational::checked_reduced) for those.
    #[inline]
    pub fn numer(&self) -> T {
        self.reduced().0
    }

    /// The denominator in lowest terms. Never negative; zero only for NaN.
    ///
    /// # Panics
    ///
    /// Panics if the reduced value does not fit `T`. Stored pairs near `T::MIN`,
    /// such as `1/MIN` or `MIN/-1`, cannot be read back with the sign on the
    /// numerator; use [`checked_reduced`](Rational::checked_reduced) for those.
    #[inline]
    pub fn denom(&self) -> T {
        self.reduced().1
    }

    /// The `(numerator, denominator)` pair in lowest terms.
    ///
    /// # Panics
    ///
    /// Panics if the reduced value does not fit `T`, see [`checked_reduced`](Rational::checked_reduced).
    #[inline]
    pub fn reduced(&self) -> (T, T) {
        match self.checked_reduced() {
            Some(pair) => pair,
            None => panic!("rational overflow after reduction"),
        }
    }

    /// The `(numerator, denominator)` pair in lowest terms, or `None` if it does
    /// not fit `T`.
    ///
    /// Moving the sign onto the numerator can leave `T` around `T::MIN`: the
    /// reduced form of `MIN/-1` would be `-MIN/1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use signed_ratio::Rational8;
    ///
    /// assert_eq!(Rational8::new(-128, 2).checked_reduced(), Some((-64, 1)));
    /// assert_eq!(Rational8::new(-128, -1).checked_reduced(), None);
    /// ```
    #[inline]
    pub fn checked_reduced(&self) -> Option<(T, T)> {
        self.reduced_in::<T>()
    }

    /// Reduce the stored pair into any integer type.
    ///
    /// A raw numerator of 0 or 1, or a raw denominator of 1, has no common
    /// factor to strip, so the GCD is skipped and only the sign moves.
    fn reduced_in<U: WideInteger>(&self) -> Option<(U, U)> {
        if self.nan {
            return Some((U::ONE, U::ZERO));
        }
        let coprime = self.numer.is_zero() || self.numer == T::ONE || self.denom == T::ONE;
        lowest_terms(self.numer, self.denom, coprime)
    }

    /// Build a reduced rational from a wide numerator/denominator pair.
    fn from_wide_parts(numer: T::Wide, denom: T::Wide) -> Option<Self> {
        if denom.is_zero() {
            return Some(Self::nan());
        }
        let (numer, denom) = lowest_terms(numer, denom, false)?;
        Some(Self {
            numer,
            denom,
            nan: false,
        })
    }

    // ========================================================================
    // ARITHMETIC - ADDITION
    // ========================================================================

    /// Add two rationals, returning `None` if the reduced sum does not fit `T`.
    ///
    /// A NaN operand yields `Some(nan)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use signed_ratio::Rational8;
    ///
    /// let a = Rational8::new(1, 2);
    /// assert_eq!(a.checked_add(&Rational8::new(1, 3)), Some(Rational8::new(5, 6)));
    /// assert_eq!(Rational8::from(127).checked_add(&a), None);
    /// ```
    #[inline]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.combine(other, false)
    }

    /// Subtract `other`, returning `None` if the reduced difference does not fit `T`.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.combine(other, true)
    }

    /// `self + other`, or `self - other` when `negate_other` is set.
    fn combine(&self, other: &Self, negate_other: bool) -> Option<Self> {
        if self.nan || other.nan {
            return Some(Self::nan());
        }

        let (a_numer, a_denom) = self.reduced_in::<T::Wide>()?;
        let (mut b_numer, b_denom) = other.reduced_in::<T::Wide>()?;
        if negate_other {
            b_numer = b_numer.checked_neg()?;
        }

        if a_denom == b_denom {
            return Self::from_wide_parts(a_numer.checked_add(b_numer)?, a_denom);
        }

        let (a_scale, b_scale) = common_multipliers(a_denom, b_denom)?;
        let numer = a_numer
            .checked_mul(a_scale)?
            .checked_add(b_numer.checked_mul(b_scale)?)?;
        Self::from_wide_parts(numer, a_denom.checked_mul(a_scale)?)
    }

    // ========================================================================
    // ARITHMETIC - MULTIPLICATION
    // ========================================================================

    /// Multiply two rationals, returning `None` if the reduced product does not fit `T`.
    #[inline]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        if self.nan || other.nan {
            return Some(Self::nan());
        }

        let (a_numer, a_denom) = self.reduced_in::<T::Wide>()?;
        let (b_numer, b_denom) = other.reduced_in::<T::Wide>()?;
        Self::from_wide_parts(a_numer.checked_mul(b_numer)?, a_denom.checked_mul(b_denom)?)
    }

    /// Multiply by an integer, returning `None` if the reduced product does not fit `T`.
    ///
    /// The product is `(n·x)/(d·x)`, so multiplying by zero leaves a zero
    /// denominator and yields NaN, as does a NaN operand.
    ///
    /// # Examples
    ///
    /// ```
    /// use signed_ratio::Rational32;
    ///
    /// let r = Rational32::new(3, 4);
    /// assert_eq!(r.checked_mul_int(-2), Some(Rational32::new(-3, 2)));
    /// assert!(r.checked_mul_int(0).is_some_and(|p| p.is_nan()));
    /// ```
    #[inline]
    pub fn checked_mul_int(&self, x: T) -> Option<Self> {
        if self.nan {
            return Some(Self::nan());
        }

        let (numer, denom) = self.reduced_in::<T::Wide>()?;
        let x = x.to_wide();
        if x.is_zero() {
            trace!("multiplication of {} by integer zero yields NaN", self);
        }
        Self::from_wide_parts(numer.checked_mul(x)?, denom.checked_mul(x)?)
    }

    // ========================================================================
    // ARITHMETIC - DIVISION
    // ========================================================================

    /// Divide by another rational, returning `None` if the reduced quotient does not fit `T`.
    ///
    /// Dividing by the rational zero yields `Some(nan)`.
    #[inline]
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        if self.nan || other.nan {
            return Some(Self::nan());
        }

        let (a_numer, a_denom) = self.reduced_in::<T::Wide>()?;
        let (b_numer, b_denom) = other.reduced_in::<T::Wide>()?;
        if b_denom.is_zero() {
            return Some(Self::nan());
        }
        if b_numer.is_zero() {
            trace!("division of {} by a zero rational yields NaN", self);
        }

        Self::from_wide_parts(a_numer.checked_mul(b_denom)?, a_denom.checked_mul(b_numer)?)
    }

    /// The reciprocal, or `None` if it does not fit `T`. The reciprocal of zero is NaN.
    #[inline]
    pub fn checked_recip(&self) -> Option<Self> {
        if self.nan {
            return Some(Self::nan());
        }

        let (numer, denom) = self.reduced_in::<T::Wide>()?;
        Self::from_wide_parts(denom, numer)
    }

    /// Get the reciprocal (1/x). The reciprocal of zero is NaN.
    ///
    /// # Panics
    ///
    /// Panics if the reciprocal does not fit `T`.
    #[inline]
    pub fn recip(&self) -> Self {
        expect_fits(self.checked_recip(), "reciprocal")
    }

    /// Negate, returning `None` if the result does not fit `T`. NaN stays NaN.
    #[inline]
    pub fn checked_neg(&self) -> Option<Self> {
        if self.nan {
            return Some(Self::nan());
        }

        let (numer, denom) = self.reduced_in::<T::Wide>()?;
        Self::from_wide_parts(numer.checked_neg()?, denom)
    }

    // ========================================================================
    // CONVERSIONS
    // ========================================================================

    /// Convert to `f64`. NaN converts to `f64::NAN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use signed_ratio::Rational32;
    ///
    /// assert_eq!(Rational32::new(-1, 4).to_f64(), -0.25);
    /// assert!(Rational32::new(1, 0).to_f64().is_nan());
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        if self.nan {
            return f64::NAN;
        }
        match self.reduced_in::<T::Wide>() {
            Some((numer, denom)) if !denom.is_zero() => numer.to_f64() / denom.to_f64(),
            _ => f64::NAN,
        }
    }

    /// Convert to an integer, failing unless the value is a finite integer that fits `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use signed_ratio::{RatioError, Rational32};
    ///
    /// assert_eq!(Rational32::new(-12, 4).to_integer(), Ok(-3));
    /// assert_eq!(Rational32::nan().to_integer(), Err(RatioError::NotANumber));
    /// ```
    pub fn to_integer(&self) -> RatioResult<T> {
        if self.nan {
            trace!("refusing to narrow a NaN rational");
            return Err(RatioError::NotANumber);
        }

        let out_of_range = || RatioError::OutOfRange {
            value: self.to_string(),
            bits: T::BITS,
        };
        let (numer, denom) = self.reduced_in::<T::Wide>().ok_or_else(out_of_range)?;

        if !numer.checked_rem(denom).is_some_and(WideInteger::is_zero) {
            trace!("refusing to narrow non-integral rational {}/{}", numer, denom);
            return Err(RatioError::NotAnInteger {
                numer: numer.to_string(),
                denom: denom.to_string(),
            });
        }

        numer
            .checked_div(denom)
            .and_then(|q| T::from_magnitude(q.is_negative(), q.unsigned_abs_u128()))
            .ok_or_else(out_of_range)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Reduce `numer/denom` to lowest terms in `U`, with the sign on the numerator.
///
/// `denom` must be non-zero unless `coprime` is set. With `coprime` the GCD
/// step is skipped.
#[inline]
fn lowest_terms<W: WideInteger, U: WideInteger>(numer: W, denom: W, coprime: bool) -> Option<(U, U)> {
    let negative = !numer.is_zero() && numer.is_negative() != denom.is_negative();
    let (n, d) = (numer.unsigned_abs_u128(), denom.unsigned_abs_u128());
    let g = if coprime { 1 } else { gcd_magnitude(n, d) };
    Some((U::from_magnitude(negative, n / g)?, U::from_magnitude(false, d / g)?))
}

/// Multipliers bringing positive denominators `x` and `y` to their least common multiple.
///
/// When one divides the other this is the exact-multiple shortcut, e.g.
/// `(4, 1)` for `(2, 8)`.
#[inline]
fn common_multipliers<W: WideInteger>(x: W, y: W) -> Option<(W, W)> {
    let g = x.checked_gcd(y)?;
    Some((y.checked_div(g)?, x.checked_div(g)?))
}

#[inline]
fn expect_fits<T: RatioInteger>(result: Option<Rational<T>>, what: &str) -> Rational<T> {
    match result {
        Some(r) => r,
        None => panic!("{what} overflow after reduction"),
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

macro_rules! forward_binop {
    ($imp:ident, $method:ident, $checked:ident, $what:literal) => {
        impl<T: RatioInteger> $imp for Rational<T> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, other: Self) -> Self {
                expect_fits(Rational::$checked(&self, &other), $what)
            }
        }

        impl<T: RatioInteger> $imp for &Rational<T> {
            type Output = Rational<T>;
            #[inline(always)]
            fn $method(self, other: Self) -> Rational<T> {
                expect_fits(Rational::$checked(self, other), $what)
            }
        }
    };
}

forward_binop!(Add, add, checked_add, "addition");
forward_binop!(Sub, sub, checked_sub, "subtraction");
forward_binop!(Mul, mul, checked_mul, "multiplication");
forward_binop!(Div, div, checked_div, "division");

impl<T: RatioInteger> Mul<T> for Rational<T> {
    type Output = Self;
    #[inline(always)]
    fn mul(self, x: T) -> Self {
        expect_fits(self.checked_mul_int(x), "multiplication")
    }
}

impl<T: RatioInteger> Neg for Rational<T> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        expect_fits(self.checked_neg(), "negation")
    }
}

impl<T: RatioInteger> PartialEq for Rational<T> {
    fn eq(&self, other: &Self) -> bool {
        self.reduced_in::<T::Wide>() == other.reduced_in::<T::Wide>()
    }
}

impl<T: RatioInteger> Eq for Rational<T> {}

impl<T: RatioInteger> Hash for Rational<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.reduced_in::<T::Wide>().hash(state);
    }
}

impl<T: RatioInteger> Default for Rational<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: RatioInteger> From<T> for Rational<T> {
    #[inline]
    fn from(x: T) -> Self {
        Self::from_integer(x)
    }
}

impl<T: RatioInteger> From<Rational<T>> for f64 {
    #[inline]
    fn from(rational: Rational<T>) -> f64 {
        rational.to_f64()
    }
}

impl<T: RatioInteger> fmt::Display for Rational<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nan {
            return f.write_str("NaN");
        }
        let (numer, denom) = self
            .reduced_in::<T::Wide>()
            .unwrap_or((self.numer.to_wide(), self.denom.to_wide()));
        if denom == <T::Wide as WideInteger>::ONE {
            write!(f, "{numer}")
        } else {
            write!(f, "{numer}/{denom}")
        }
    }
}

/// Integer-on-the-left multiplication and narrowing conversion for each storage type.
macro_rules! impl_integer_interop {
    ($($type:ty),*) => {
        $(
            impl Mul<Rational<$type>> for $type {
                type Output = Rational<$type>;
                #[inline(always)]
                fn mul(self, rational: Rational<$type>) -> Rational<$type> {
                    rational * self
                }
            }

            impl TryFrom<Rational<$type>> for $type {
                type Error = RatioError;
                #[inline]
                fn try_from(rational: Rational<$type>) -> RatioResult<$type> {
                    rational.to_integer()
                }
            }
        )*
    };
}

impl_integer_interop!(i8, i16, i32, i64);

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Rational using 8-bit integers.
pub type Rational8 = Rational<i8>;

/// Rational using 16-bit integers.
pub type Rational16 = Rational<i16>;

/// Rational using 32-bit integers.
pub type Rational32 = Rational<i32>;

/// Rational using 64-bit integers.
pub type Rational64 = Rational<i64>;
