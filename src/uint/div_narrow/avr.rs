//! AVR inline assembly restoring division loops.
//!
//! Same algorithm as the portable loop, one instruction per bit operation:
//! `lsl`/`rol` shift `rem:quot` and leave the carry out of `rem` in `C`,
//! `cp`/`cpc` compare against the divisor, `sub`/`sbc` subtract and `ori`
//! records the quotient bit. `ori` only accepts `r16..r31`, hence `reg_upper`
//! for the low quotient byte.
#![allow(unsafe_code)]

use crate::traits::sealed::RestoringLoop;
use core::arch::asm;

impl RestoringLoop for u8 {
    #[inline(always)]
    fn restoring_div(mut quot: u8, mut rem: u8, divisor: u8) -> (u8, u8) {
        // SAFETY: register-only arithmetic; no memory or stack access.
        unsafe {
            asm!(
                "2:",
                "lsl {q}",
                "rol {r}",
                "brcs 3f",
                "cp {r}, {d}",
                "brcs 4f",
                "3:",
                "sub {r}, {d}",
                "ori {q}, 1",
                "4:",
                "dec {n}",
                "brne 2b",
                q = inout(reg_upper) quot,
                r = inout(reg) rem,
                d = in(reg) divisor,
                n = inout(reg) u8::BITS as u8 => _,
                options(pure, nomem, nostack),
            );
        }
        (quot, rem)
    }
}

impl RestoringLoop for u16 {
    #[inline(always)]
    fn restoring_div(quot: u16, rem: u16, divisor: u16) -> (u16, u16) {
        let [mut q0, mut q1] = quot.to_le_bytes();
        let [mut r0, mut r1] = rem.to_le_bytes();
        let [d0, d1] = divisor.to_le_bytes();

        // SAFETY: register-only arithmetic; no memory or stack access.
        unsafe {
            asm!(
                "2:",
                "lsl {q0}",
                "rol {q1}",
                "rol {r0}",
                "rol {r1}",
                "brcs 3f",
                "cp {r0}, {d0}",
                "cpc {r1}, {d1}",
                "brcs 4f",
                "3:",
                "sub {r0}, {d0}",
                "sbc {r1}, {d1}",
                "ori {q0}, 1",
                "4:",
                "dec {n}",
                "brne 2b",
                q0 = inout(reg_upper) q0,
                q1 = inout(reg) q1,
                r0 = inout(reg) r0,
                r1 = inout(reg) r1,
                d0 = in(reg) d0,
                d1 = in(reg) d1,
                n = inout(reg) u16::BITS as u8 => _,
                options(pure, nomem, nostack),
            );
        }

        (u16::from_le_bytes([q0, q1]), u16::from_le_bytes([r0, r1]))
    }
}
