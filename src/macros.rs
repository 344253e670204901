//! Macros used to implement this crate's traits for the primitive integers.

/// Implement [`Integer`][`crate::Integer`] for primitive integers.
macro_rules! impl_integer {
    ($($int:ty => $uint:ty, $signed:expr);+ $(;)?) => {
        $(
            impl $crate::Integer for $int {
                const BITS: u32 = <$int>::BITS;
                const IS_SIGNED: bool = $signed;
                const ZERO: Self = 0;
                const MAX: Self = <$int>::MAX;

                type Unsigned = $uint;
            }
        )+
    };
}

/// Implement [`DoubleWidth`][`crate::DoubleWidth`] for a narrow/wide pair of unsigned integers.
macro_rules! impl_double_width {
    ($($narrow:ty => $wide:ty),+ $(,)?) => {
        $(
            const _: () = assert!(
                <$wide>::BITS == 2 * <$narrow>::BITS,
                "wide type must be exactly twice as wide"
            );

            impl $crate::DoubleWidth for $narrow {
                type Wide = $wide;

                #[inline(always)]
                fn split(wide: $wide) -> (Self, Self) {
                    (wide as $narrow, (wide >> <$narrow>::BITS) as $narrow)
                }

                #[inline(always)]
                fn join(lo: Self, hi: Self) -> $wide {
                    (<$wide>::from(hi) << <$narrow>::BITS) | <$wide>::from(lo)
                }
            }
        )+
    };
}

/// Implement [`FastDiv`][`crate::FastDiv`] for a `(dividend, divisor)` pair.
///
/// The zero divisor check, the `native` fallback and the inlining hint are
/// shared by every pair. `$body` computes `$lhs / $rhs` for a non-zero `$rhs`.
macro_rules! impl_fast_div {
    ($dividend:ty, $divisor:ty, |$lhs:ident, $rhs:ident| $body:expr) => {
        impl $crate::FastDiv<$divisor> for $dividend {
            #[cfg_attr(feature = "inline-always", inline(always))]
            #[cfg_attr(feature = "inline-never", inline(never))]
            #[cfg_attr(not(any(feature = "inline-always", feature = "inline-never")), inline)]
            fn fast_div_with<P: $crate::ZeroDivisorPolicy>(self, rhs: $divisor) -> Self {
                if rhs == 0 {
                    return P::quotient(self);
                }

                if cfg!(feature = "native") {
                    self.wrapping_div(<$dividend>::from(rhs))
                } else {
                    let ($lhs, $rhs) = (self, rhs);
                    $body
                }
            }
        }
    };
}
