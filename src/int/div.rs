//! [`FastDiv`][`crate::FastDiv`] for signed integers.

use crate::{FastDiv, ReturnZero, SignedInteger};

/// Divides the magnitudes and negates the quotient iff the operand signs differ.
///
/// `divisor` must be non-zero. `T::MIN / -1` wraps to `T::MIN`.
#[inline(always)]
fn div_signed<T, D>(dividend: T, divisor: D) -> T
where
    T: SignedInteger,
    D: SignedInteger,
    T::Unsigned: FastDiv<D::Unsigned>,
{
    let (udividend, dividend_neg) = dividend.abs_sign();
    let (udivisor, divisor_neg) = divisor.abs_sign();
    let uresult = udividend.fast_div_with::<ReturnZero>(udivisor);
    T::from_unsigned_bits(uresult).wrapping_neg_if(dividend_neg ^ divisor_neg)
}

impl_fast_div!(i8, i8, |dividend, divisor| div_signed(dividend, divisor));
impl_fast_div!(i16, i8, |dividend, divisor| div_signed(dividend, divisor));
impl_fast_div!(i16, i16, |dividend, divisor| div_signed(dividend, divisor));
impl_fast_div!(i32, i8, |dividend, divisor| div_signed(dividend, divisor));
impl_fast_div!(i32, i16, |dividend, divisor| div_signed(dividend, divisor));
impl_fast_div!(i32, i32, |dividend, divisor| div_signed(dividend, divisor));
