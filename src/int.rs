//! Signed division.
//!
//! Signed operands are reduced to their unsigned magnitudes, divided by the
//! unsigned [`FastDiv`][`crate::FastDiv`] routing, and the sign is restored.

mod div;
mod sign;

impl_integer! {
    i8 => u8, true;
    i16 => u16, true;
    i32 => u32, true;
}
