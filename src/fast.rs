//! Operator wrapper routing division through [`FastDiv`].

use crate::{FastDiv, Integer};
use core::{
    fmt,
    ops::{Div, DivAssign},
};

/// Provides the `/` and `/=` operators on `T` via [`FastDiv`].
///
/// This is analogous to [`core::num::Wrapping`]: wrap a value once and
/// ordinary operator syntax picks the fastest division for the operand types.
///
/// ```
/// use fast_div::Fast;
///
/// let mut rpm = Fast(60_000_000u32) / 7715u16;
/// assert_eq!(rpm, Fast(7777));
///
/// rpm /= 7u8;
/// assert_eq!(rpm.0, 1111);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Fast<T>(pub T);

impl<T> Fast<T> {
    /// Returns the inner value.
    pub fn get(self) -> T {
        self.0
    }
}

impl<T, D> Div<D> for Fast<T>
where
    T: FastDiv<D>,
    D: Integer,
{
    type Output = Fast<T>;

    #[inline]
    fn div(self, rhs: D) -> Fast<T> {
        Fast(self.0.fast_div(rhs))
    }
}

impl<T, D> Div<Fast<D>> for Fast<T>
where
    T: FastDiv<D>,
    D: Integer,
{
    type Output = Fast<T>;

    #[inline]
    fn div(self, rhs: Fast<D>) -> Fast<T> {
        Fast(self.0.fast_div(rhs.0))
    }
}

impl<T, D> Div<&Fast<D>> for Fast<T>
where
    T: FastDiv<D>,
    D: Integer,
{
    type Output = Fast<T>;

    #[inline]
    fn div(self, rhs: &Fast<D>) -> Fast<T> {
        Fast(self.0.fast_div(rhs.0))
    }
}

impl<T, D> Div<Fast<D>> for &Fast<T>
where
    T: FastDiv<D>,
    D: Integer,
{
    type Output = Fast<T>;

    #[inline]
    fn div(self, rhs: Fast<D>) -> Fast<T> {
        Fast(self.0.fast_div(rhs.0))
    }
}

impl<T, D> DivAssign<D> for Fast<T>
where
    T: FastDiv<D>,
    D: Integer,
{
    #[inline]
    fn div_assign(&mut self, rhs: D) {
        self.0 = self.0.fast_div(rhs);
    }
}

impl<T, D> DivAssign<Fast<D>> for Fast<T>
where
    T: FastDiv<D>,
    D: Integer,
{
    #[inline]
    fn div_assign(&mut self, rhs: Fast<D>) {
        self.0 = self.0.fast_div(rhs.0);
    }
}

impl<T> From<T> for Fast<T> {
    #[inline]
    fn from(value: T) -> Self {
        Fast(value)
    }
}

impl<T: fmt::Display> fmt::Display for Fast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::Binary> fmt::Binary for Fast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::LowerHex> fmt::LowerHex for Fast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: fmt::UpperHex> fmt::UpperHex for Fast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
