use crate::SignedInteger;
use subtle::Choice;

macro_rules! impl_signed_integer {
    ($($int:ty => $uint:ty),+ $(,)?) => {
        $(
            impl SignedInteger for $int {
                #[inline(always)]
                fn abs_sign(self) -> ($uint, Choice) {
                    (self.unsigned_abs(), Choice::from(u8::from(self < 0)))
                }

                #[inline(always)]
                fn from_unsigned_bits(bits: $uint) -> Self {
                    bits as $int
                }
            }
        )+
    };
}

impl_signed_integer! {
    i8 => u8,
    i16 => u16,
    i32 => u32,
}
