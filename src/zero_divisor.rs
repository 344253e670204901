//! Division by zero policies.
//!
//! Every [`FastDiv`][`crate::FastDiv`] entry point checks the divisor before
//! doing anything else. When it is zero, no division algorithm runs: the
//! result comes from the [`ZeroDivisorPolicy`] the caller selected.

use crate::Integer;

/// Strategy deciding the result of `dividend / 0`.
pub trait ZeroDivisorPolicy {
    /// The quotient to report for `dividend / 0`.
    fn quotient<T: Integer>(dividend: T) -> T;
}

/// The policy used by [`fast_div`][`crate::fast_div`] and
/// [`FastDiv::fast_div`][`crate::FastDiv::fast_div`].
pub type DefaultPolicy = ReturnZero;

/// Division by zero returns `0`, matching the AVR runtime library.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReturnZero;

impl ZeroDivisorPolicy for ReturnZero {
    #[inline(always)]
    fn quotient<T: Integer>(_dividend: T) -> T {
        T::ZERO
    }
}

/// Division by zero returns the maximum value of the dividend type.
///
/// This is what a bit-serial divider produces when left to run with a zero
/// divisor: every step subtracts nothing and records a `1`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReturnMax;

impl ZeroDivisorPolicy for ReturnMax {
    #[inline(always)]
    fn quotient<T: Integer>(_dividend: T) -> T {
        T::MAX
    }
}

/// Division by zero panics, like the `/` operator.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Panic;

impl ZeroDivisorPolicy for Panic {
    #[inline]
    #[track_caller]
    fn quotient<T: Integer>(_dividend: T) -> T {
        panic!("attempt to divide by zero")
    }
}
