//! Pure Rust implementation of narrowing integer division.
//!
//! # About
//! Dividing a 32-bit value by a 16-bit one on a CPU without a hardware divider
//! usually costs a full 32-bit by 32-bit software division: operands are
//! promoted to a common width and handed to a generic routine which knows
//! nothing about their ranges.
//!
//! When the quotient is known to fit into the divisor's width, a bit-serial
//! restoring division needs half as many steps. [`fast_div`] checks the
//! operand values at runtime and picks the cheapest correct algorithm:
//!
//! - [`divide`]: `2N / N => N` restoring division, when the quotient fits.
//! - [`divide_large_divisor`]: aligned shift/subtract division, when the
//!   divisor is larger than the square root of the dividend's range.
//! - the native `/` operator otherwise.
//!
//! Results are identical to the `/` operator (truncating toward zero) for
//! every supported operand pair and every non-zero divisor.
//!
//! # Usage
//! ```
//! use fast_div::fast_div;
//!
//! let tooth_delta_v: u16 = 300;
//! let tooth_delta_t: u16 = 4000;
//! let rpm_delta = fast_div(u32::from(tooth_delta_v) << 10, 6 * tooth_delta_t);
//! assert_eq!(rpm_delta, 12);
//!
//! assert_eq!(fast_div(-128i16, 3i8), -42);
//! ```
//!
//! # Division by zero
//! No entry point ever traps on a zero divisor. [`fast_div`] returns `0`, the
//! convention of the AVR runtime library; other behavior can be selected per
//! call with [`FastDiv::fast_div_with`] and a [`ZeroDivisorPolicy`], or
//! detected with [`FastDiv::checked_fast_div`].
//!
//! # Signed overflow
//! `MIN / -1` wraps to `MIN`, like [`i32::wrapping_div`], instead of panicking.
//!
//! # Crate features
//! - `native`: route every entry point to the `/` operator (after the zero
//!   divisor check), for targets with fast hardware division.
//! - `asm`: AVR inline assembly for the restoring division loop. Requires
//!   `target_arch = "avr"` and a nightly toolchain; ignored elsewhere.
//! - `inline-always` / `inline-never`: inlining hint for the [`FastDiv`] impls.
//!
//! # Performance
//! All operations are variable-time. Do not use them on secret data.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(
    all(target_arch = "avr", feature = "asm"),
    feature(asm_experimental_arch)
)]
#![deny(unsafe_code)]
#![forbid(clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

#[cfg(all(feature = "inline-always", feature = "inline-never"))]
compile_error!("features `inline-always` and `inline-never` are mutually exclusive");

#[macro_use]
mod macros;

mod fast;
mod int;
mod traits;
mod uint;
mod zero_divisor;

pub use crate::{
    fast::Fast,
    traits::{DoubleWidth, FastDiv, Integer, SignedInteger, UnsignedInteger},
    uint::*,
    zero_divisor::{DefaultPolicy, Panic, ReturnMax, ReturnZero, ZeroDivisorPolicy},
};
pub use subtle;

/// Computes `dividend / divisor` with the fastest algorithm valid for the operands.
///
/// Equivalent to `dividend / divisor` for all non-zero divisors; returns `0`
/// when `divisor` is zero. See [`FastDiv`] for the supported type pairs.
///
/// ```
/// use fast_div::fast_div;
///
/// assert_eq!(fast_div(150u16, 30u8), 5);
/// assert_eq!(fast_div(7u8, 7u8), 1);
/// assert_eq!(fast_div(3_600_000_000u32, 60000u16), 60000);
/// assert_eq!(fast_div(-128i8, -1i8), -128);
/// ```
#[inline]
pub fn fast_div<T, D>(dividend: T, divisor: D) -> T
where
    T: FastDiv<D>,
    D: Integer,
{
    dividend.fast_div(divisor)
}
