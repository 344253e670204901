//! Unsigned division.
//!
//! Two division primitives plus the [`FastDiv`][`crate::FastDiv`] routing
//! between them:
//!
//! - [`divide`]: bit-serial restoring division, `2N / N => N`.
//! - [`divide_large_divisor`]: shift/subtract division, `N / N => N`, for
//!   divisors above [`large_divisor_threshold`].

mod div;
mod div_large;
mod div_narrow;

pub use self::{
    div::{fast_div16_8, fast_div32_16},
    div_large::{div_rem_large_divisor, divide_large_divisor, large_divisor_threshold},
    div_narrow::divide,
};

use crate::UnsignedInteger;

impl_integer! {
    u8 => u8, false;
    u16 => u16, false;
    u32 => u32, false;
}

impl_double_width! {
    u8 => u16,
    u16 => u32,
}

impl UnsignedInteger for u8 {
    const HI_BIT: Self = 1 << (u8::BITS - 1);
}

impl UnsignedInteger for u16 {
    const HI_BIT: Self = 1 << (u16::BITS - 1);
}

impl UnsignedInteger for u32 {
    const HI_BIT: Self = 1 << (u32::BITS - 1);
}
