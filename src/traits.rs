//! Traits provided by this crate

pub(crate) mod sealed;

use crate::{DefaultPolicy, ZeroDivisorPolicy};
use core::fmt::{Binary, Debug, Display, LowerHex, UpperHex};
use num_traits::{PrimInt, Signed, Unsigned, WrappingNeg, WrappingSub};
use subtle::{Choice, ConditionallySelectable, CtOption};

/// Fixed-width primitive integers supported by this crate.
///
/// Implemented for `u8`, `u16`, `u32`, `i8`, `i16` and `i32` only.
pub trait Integer:
    'static
    + sealed::Sealed
    + Binary
    + ConditionallySelectable
    + Debug
    + Default
    + Display
    + LowerHex
    + PrimInt
    + Send
    + Sync
    + UpperHex
    + WrappingNeg
    + WrappingSub
{
    /// Size of this integer in bits.
    const BITS: u32;

    /// Is this a signed two's complement type?
    const IS_SIGNED: bool;

    /// The value `0`.
    const ZERO: Self;

    /// Maximum value this integer can express.
    const MAX: Self;

    /// Unsigned integer type of the same width.
    type Unsigned: UnsignedInteger;

    /// Is this value equal to [`Integer::ZERO`]?
    #[inline]
    fn is_zero_choice(&self) -> Choice {
        Choice::from(u8::from(*self == Self::ZERO))
    }
}

/// Unsigned integers: the only representation the division algorithms operate on.
pub trait UnsignedInteger: Integer<Unsigned = Self> + Unsigned {
    /// Value with only the most significant bit set.
    const HI_BIT: Self;
}

/// Signed integers, divided by reducing them to their unsigned magnitude.
pub trait SignedInteger: Integer + Signed {
    /// The magnitude and sign of this value.
    ///
    /// The magnitude is computed in [`Integer::Unsigned`], so `Self::MIN` does
    /// not overflow (e.g. `-128i8` yields `128u8`).
    fn abs_sign(self) -> (Self::Unsigned, Choice);

    /// Reinterpret the bits of an unsigned value of the same width.
    fn from_unsigned_bits(bits: Self::Unsigned) -> Self;

    /// Perform wrapping negation if `negate` is truthy, otherwise return `self`.
    #[inline]
    fn wrapping_neg_if(self, negate: Choice) -> Self {
        Self::conditional_select(&self, &self.wrapping_neg(), negate)
    }
}

/// Unsigned integers with an unsigned type exactly twice as wide.
///
/// This is what makes a `2N / N => N` narrowing division expressible: the
/// dividend is a [`DoubleWidth::Wide`] and the divisor and quotient are `Self`.
pub trait DoubleWidth: UnsignedInteger + sealed::RestoringLoop {
    /// Unsigned integer type of twice the width of `Self`.
    type Wide: UnsignedInteger + From<Self>;

    /// Split a wide value into its `(lo, hi)` halves.
    fn split(wide: Self::Wide) -> (Self, Self);

    /// Concatenate `lo` and `hi` halves into a wide value.
    fn join(lo: Self, hi: Self) -> Self::Wide;

    /// Zero-extend `self` to [`DoubleWidth::Wide`].
    #[inline]
    fn widen(self) -> Self::Wide {
        Self::Wide::from(self)
    }
}

/// Division that picks the cheapest correct algorithm for the operand types and values.
///
/// Implemented for the supported `(dividend, divisor)` pairs:
///
/// | dividend | divisors            |
/// |----------|---------------------|
/// | `u8`     | `u8`                |
/// | `u16`    | `u8`, `u16`         |
/// | `u32`    | `u8`, `u16`, `u32`  |
/// | `i8`     | `i8`                |
/// | `i16`    | `i8`, `i16`         |
/// | `i32`    | `i8`, `i16`, `i32`  |
///
/// Mixing signed and unsigned operands, or dividing by a wider type, does not compile.
pub trait FastDiv<Rhs: Integer = Self>: Integer {
    /// Computes `self / rhs`, truncating toward zero, using `P` when `rhs` is zero.
    fn fast_div_with<P: ZeroDivisorPolicy>(self, rhs: Rhs) -> Self;

    /// Computes `self / rhs`, truncating toward zero.
    ///
    /// Division by zero returns `0` (see [`DefaultPolicy`]). Signed `MIN / -1`
    /// wraps to `MIN`, like [`i32::wrapping_div`].
    #[inline]
    fn fast_div(self, rhs: Rhs) -> Self {
        self.fast_div_with::<DefaultPolicy>(rhs)
    }

    /// Computes `self / rhs`, returning `CtOption::none()` if `rhs` is zero.
    #[inline]
    fn checked_fast_div(self, rhs: Rhs) -> CtOption<Self> {
        let is_nz = !rhs.is_zero_choice();
        CtOption::new(self.fast_div_with::<DefaultPolicy>(rhs), is_nz)
    }
}
