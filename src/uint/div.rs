//! [`FastDiv`][`crate::FastDiv`] for unsigned integers.
//!
//! Routing per `(dividend, divisor)` pair:
//!
//! - `u8 / u8`: native, nothing narrower exists.
//! - `u16 / u8`, `u32 / u16`, `u32 / u8`: narrowing division when the quotient
//!   provably fits the divisor width, native otherwise.
//! - `u16 / u16`, `u32 / u32`: narrow the divisor when it fits the half width,
//!   otherwise the divisor is large and aligned division is used.

use super::{div_large::divide_large_divisor, div_narrow::divide};
use crate::{DefaultPolicy, DoubleWidth, ZeroDivisorPolicy};

/// Computes `dividend / divisor` for a non-zero `divisor` of half the dividend width.
///
/// The quotient fits into `T` exactly when the dividend's high half is less
/// than `divisor`; only then is narrowing division used.
#[inline(always)]
fn div_wide_by_narrow<T: DoubleWidth>(dividend: T::Wide, divisor: T) -> T::Wide {
    let (_, hi) = T::split(dividend);
    if divisor > hi {
        divide(dividend, divisor).0.widen()
    } else {
        // quotient needs more than `T::BITS` bits: dividend >= divisor << T::BITS
        dividend / divisor.widen()
    }
}

/// Computes `dividend / divisor` for a non-zero `divisor` of the same width.
#[inline(always)]
fn div_same_width<T: DoubleWidth>(dividend: T::Wide, divisor: T::Wide) -> T::Wide {
    match T::split(divisor) {
        (lo, hi) if hi == T::ZERO => div_wide_by_narrow(dividend, lo),
        // high half is set: divisor > sqrt(T::Wide::MAX)
        _ => divide_large_divisor(dividend, divisor),
    }
}

impl_fast_div!(u8, u8, |dividend, divisor| dividend / divisor);
impl_fast_div!(u16, u8, |dividend, divisor| div_wide_by_narrow(dividend, divisor));
impl_fast_div!(u16, u16, |dividend, divisor| div_same_width::<u8>(dividend, divisor));
impl_fast_div!(u32, u8, |dividend, divisor| div_wide_by_narrow(dividend, u16::from(divisor)));
impl_fast_div!(u32, u16, |dividend, divisor| div_wide_by_narrow(dividend, divisor));
impl_fast_div!(u32, u32, |dividend, divisor| div_same_width::<u16>(dividend, divisor));

/// Divides a `u16` by a `u8` when the quotient is known to fit into a `u8`.
///
/// Unlike [`fast_div`][`crate::fast_div`], no check is made that the quotient
/// fits: the caller must guarantee `udividend >> 8 < udivisor`, otherwise the
/// result is wrong (see [`divide`][`crate::divide`]). Division by zero returns `0`.
///
/// ```
/// use fast_div::fast_div16_8;
///
/// assert_eq!(fast_div16_8(255 * 255, 255), 255);
/// assert_eq!(fast_div16_8(0, 0), 0);
/// ```
#[inline]
pub fn fast_div16_8(udividend: u16, udivisor: u8) -> u8 {
    if udivisor == 0 {
        return DefaultPolicy::quotient(0);
    }

    if cfg!(feature = "native") {
        (udividend / u16::from(udivisor)) as u8
    } else {
        divide(udividend, udivisor).0
    }
}

/// Divides a `u32` by a `u16` when the quotient is known to fit into a `u16`.
///
/// The caller must guarantee `udividend >> 16 < udivisor`, see [`fast_div16_8`].
/// Division by zero returns `0`.
///
/// ```
/// use fast_div::fast_div32_16;
///
/// // µs per minute / µs per revolution
/// assert_eq!(fast_div32_16(60_000_000, 7715), 7777);
/// ```
#[inline]
pub fn fast_div32_16(udividend: u32, udivisor: u16) -> u16 {
    if udivisor == 0 {
        return DefaultPolicy::quotient(0);
    }

    if cfg!(feature = "native") {
        (udividend / u32::from(udivisor)) as u16
    } else {
        divide(udividend, udivisor).0
    }
}
