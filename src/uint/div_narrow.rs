//! Narrowing division: `2N / N => N` by bit-serial restoring division.
//!
//! A full width `2N / 2N` division needs `2N` shift/subtract steps. When the
//! quotient is known to fit into `N` bits only the low `N` quotient bits can
//! be non-zero, so `N` steps starting from `rem:quot = hi:lo` are enough.

#[cfg(all(target_arch = "avr", feature = "asm"))]
mod avr;

use crate::{DoubleWidth, UnsignedInteger, traits::sealed::RestoringLoop};

/// Divides a double width `dividend` by `divisor`, returning the quotient and remainder.
///
/// Division by zero returns `(T::MAX, 0)`.
///
/// # Correctness
///
/// The quotient MUST fit into `T`, i.e. the high half of `dividend` must be
/// less than `divisor`. This is not checked in release builds: a quotient that
/// does not fit produces a wrong result rather than a panic, in debug and
/// release builds alike. [`FastDiv`][`crate::FastDiv`] establishes this before
/// calling in here.
///
/// ```
/// use fast_div::divide;
///
/// // 1000 RPM from a 60000 µs revolution time
/// assert_eq!(divide(60_000_000u32, 60_000u16), (1000, 0));
/// assert_eq!(divide(150u16, 30u8), (5, 0));
/// ```
#[inline]
pub fn divide<T: DoubleWidth>(dividend: T::Wide, divisor: T) -> (T, T) {
    if divisor == T::ZERO {
        return (T::MAX, T::ZERO);
    }

    let (quot, rem) = T::split(dividend);
    T::restoring_div(quot, rem, divisor)
}

/// Portable restoring division loop.
///
/// Each step shifts `rem:quot` left by one. The bit shifted out of `rem` stands
/// for an implicit `2^N`, so when it is set the partial remainder is larger
/// than any `N`-bit divisor.
#[inline(always)]
#[cfg_attr(all(target_arch = "avr", feature = "asm"), allow(dead_code))]
pub(crate) fn restoring_div<T: UnsignedInteger>(mut quot: T, mut rem: T, divisor: T) -> (T, T) {
    for _ in 0..T::BITS {
        let carry = (rem & T::HI_BIT) != T::ZERO;
        rem = (rem << 1) | (quot >> (T::BITS - 1) as usize);
        quot = quot << 1;

        if carry || rem >= divisor {
            rem = rem.wrapping_sub(&divisor);
            quot = quot | T::one();
        }
    }

    (quot, rem)
}

#[cfg(not(all(target_arch = "avr", feature = "asm")))]
impl RestoringLoop for u8 {
    #[inline(always)]
    fn restoring_div(quot: u8, rem: u8, divisor: u8) -> (u8, u8) {
        restoring_div(quot, rem, divisor)
    }
}

#[cfg(not(all(target_arch = "avr", feature = "asm")))]
impl RestoringLoop for u16 {
    #[inline(always)]
    fn restoring_div(quot: u16, rem: u16, divisor: u16) -> (u16, u16) {
        restoring_div(quot, rem, divisor)
    }
}
