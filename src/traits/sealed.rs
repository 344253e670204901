//! Sealed traits.

/// Restricts the public traits to the primitive integers this crate supports.
pub trait Sealed {}

/// Bit-serial restoring division loop over a `rem:quot` register pair.
///
/// Lives here so the hot loop can be swapped per target without becoming part
/// of the public API.
pub trait RestoringLoop: Sized {
    /// Runs `Self::BITS` shift/compare/subtract steps on `rem:quot`, returning
    /// the final `(quot, rem)`.
    ///
    /// Requires `rem < divisor` on entry.
    fn restoring_div(quot: Self, rem: Self, divisor: Self) -> (Self, Self);
}

impl Sealed for u8 {}
impl Sealed for u16 {}
impl Sealed for u32 {}
impl Sealed for i8 {}
impl Sealed for i16 {}
impl Sealed for i32 {}
