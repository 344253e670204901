//! Same width division for large divisors.
//!
//! When the divisor's high half is non-zero the quotient has at most `N / 2`
//! significant bits. Aligning the divisor with the dividend's highest set bit
//! and then running shift/subtract from there only visits those bits.

use crate::UnsignedInteger;

/// Largest divisor still handled by narrowing division for a dividend of type `T`.
///
/// This is the maximum value of the half-width type (`u8::MAX` for `u16`,
/// `u16::MAX` for `u32`). Divisors above it are "large": greater than the
/// square root of `T::MAX`.
#[inline]
pub fn large_divisor_threshold<T: UnsignedInteger>() -> T {
    (T::one() << (T::BITS / 2) as usize) - T::one()
}

/// Computes `udividend / udivisor` by aligned shift/subtract division.
///
/// Correct for every pair of same width operands, but only faster than the
/// native division when `udivisor` exceeds [`large_divisor_threshold`].
/// Returns `0` when `udivisor` is zero.
///
/// ```
/// use fast_div::divide_large_divisor;
///
/// assert_eq!(divide_large_divisor(65535u16, 65535), 1);
/// assert_eq!(divide_large_divisor(65535u16, 32768), 1);
/// assert_eq!(divide_large_divisor(1000u16, 1001), 0);
/// ```
#[inline]
pub fn divide_large_divisor<T: UnsignedInteger>(udividend: T, udivisor: T) -> T {
    div_rem_large_divisor(udividend, udivisor).0
}

/// Computes `udividend / udivisor`, returning the quotient and remainder.
///
/// See [`divide_large_divisor`]. Returns `(0, udividend)` when `udivisor` is zero.
pub fn div_rem_large_divisor<T: UnsignedInteger>(mut udividend: T, mut udivisor: T) -> (T, T) {
    if udividend < udivisor || udivisor == T::ZERO {
        return (T::ZERO, udividend);
    }

    let mut bit = align(udividend, &mut udivisor);

    // `align` leaves `udivisor <= udividend`
    udividend = udividend - udivisor;
    let mut res = bit;
    bit = bit >> 1;
    udivisor = udivisor >> 1;

    while bit != T::ZERO {
        if udividend >= udivisor {
            udividend = udividend - udivisor;
            res = res | bit;
        }
        bit = bit >> 1;
        udivisor = udivisor >> 1;
    }

    (res, udividend)
}

/// Is `dependent` shifted as far left as it can go without exceeding `reference`?
#[inline(always)]
fn is_aligned<T: UnsignedInteger>(reference: T, dependent: T) -> bool {
    (dependent << 1) > reference || (dependent & T::HI_BIT) != T::ZERO
}

/// Left aligns the highest set bit of `dependent` with the highest set bit of `reference`.
///
/// Returns a value with a single bit set at the position `dependent`'s lowest
/// bit was moved to, i.e. the weight of the first quotient bit.
///
/// `dependent` must be non-zero and at most `reference`.
#[inline(always)]
fn align<T: UnsignedInteger>(reference: T, dependent: &mut T) -> T {
    let mut bit = T::one();
    while !is_aligned(reference, *dependent) {
        *dependent = *dependent << 1;
        bit = bit << 1;
    }
    bit
}
