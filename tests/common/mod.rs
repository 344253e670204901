//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use fast_div::{FastDiv, Integer};
use num_traits::AsPrimitive;

/// Reference quotient: truncating division in `i64`, wrapped into `T`.
///
/// Wrapping makes `MIN / -1` come out as `MIN`, like `wrapping_div`.
/// A zero divisor yields `0`.
pub fn reference_div<T, D>(dividend: T, divisor: D) -> T
where
    T: Integer + Into<i64>,
    D: Integer + Into<i64>,
    i64: AsPrimitive<T>,
{
    let divisor: i64 = divisor.into();
    if divisor == 0 {
        return T::ZERO;
    }
    (dividend.into() / divisor).as_()
}

/// Asserts [`FastDiv::fast_div`] agrees with [`reference_div`].
#[track_caller]
pub fn assert_fast_div<T, D>(dividend: T, divisor: D)
where
    T: FastDiv<D> + Into<i64>,
    D: Integer + Into<i64>,
    i64: AsPrimitive<T>,
{
    assert_eq!(
        dividend.fast_div(divisor),
        reference_div(dividend, divisor),
        "{dividend} / {divisor}"
    );
}

/// `steps + 1` evenly spaced values covering `[min, max]`, both ends included.
pub fn sweep<T>(min: T, max: T, steps: i64) -> impl Iterator<Item = T>
where
    T: Integer + Into<i64>,
    i64: AsPrimitive<T>,
{
    let (min, max): (i64, i64) = (min.into(), max.into());
    let step = ((max - min) / steps).max(1);
    (0..=steps)
        .map(move |i| (min + i * step).min(max))
        .chain(core::iter::once(max))
        .map(AsPrimitive::as_)
}

/// Checks the corners of a dividend/divisor rectangle, then a strided grid inside it.
#[track_caller]
pub fn assert_range<T, D>(dividends: (T, T), divisors: (D, D), steps: i64)
where
    T: FastDiv<D> + Into<i64>,
    D: Integer + Into<i64>,
    i64: AsPrimitive<T> + AsPrimitive<D>,
{
    let (div_min, div_max) = dividends;
    let (divisor_min, divisor_max) = divisors;

    for dividend in [div_min, div_max] {
        for divisor in [divisor_min, divisor_max] {
            assert_fast_div(dividend, divisor);
        }
    }

    for dividend in sweep(div_min, div_max, steps) {
        for divisor in sweep(divisor_min, divisor_max, steps) {
            assert_fast_div(dividend, divisor);
        }
    }
}
