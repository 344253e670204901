//! Equivalence tests for unsigned `fast_div`.

mod common;

use common::{assert_fast_div, assert_range};
use fast_div::{FastDiv, Panic, ReturnMax, fast_div, fast_div16_8, fast_div32_16};
use proptest::prelude::*;

#[test]
fn full_ranges() {
    assert_range((u8::MIN, u8::MAX), (u8::MIN, u8::MAX), 255);
    assert_range((u16::MIN, u16::MAX), (u8::MIN, u8::MAX), 600);
    assert_range((u16::MIN, u16::MAX), (u16::MIN, u16::MAX), 600);
    assert_range((u32::MIN, u32::MAX), (u8::MIN, u8::MAX), 400);
    assert_range((u32::MIN, u32::MAX), (u16::MIN, u16::MAX), 400);
    assert_range((u32::MIN, u32::MAX), (u32::MIN, u32::MAX), 400);
}

#[test]
fn large_divisor_ranges() {
    assert_range((u16::MIN, u16::MAX), (256u16, u16::MAX), 500);
    assert_range((u32::MIN, u32::MAX), (65536u32, u32::MAX), 500);
}

#[test]
fn narrowing_ranges() {
    // Quotient fits the divisor width.
    assert_range((0u16, 0x3FFF), (0x40u8, u8::MAX), 500);
    assert_range((0u32, 0x3FFF_FFFF), (0x4000u16, u16::MAX), 500);
}

#[test]
fn exhaustive_u16_u8() {
    for dividend in 0..=u16::MAX {
        for divisor in 1..=u8::MAX {
            assert_eq!(fast_div(dividend, divisor), dividend / u16::from(divisor));
        }
    }
}

#[test]
fn exhaustive_u8_u8() {
    for dividend in 0..=u8::MAX {
        for divisor in 0..=u8::MAX {
            assert_fast_div(dividend, divisor);
        }
    }
}

#[test]
fn rpm_table() {
    // Microseconds per minute over the revolution period in microseconds.
    let dividend = 60_000_000u32;
    for (divisor, expected) in [
        (60000u16, 1000u32),
        (54005, 1111),
        (7590, 7905),
        (7715, 7777),
        (3333, 18001),
    ] {
        assert_eq!(fast_div(dividend, divisor), expected);
        assert_eq!(fast_div(dividend, u32::from(divisor)), expected);
    }
}

#[test]
fn idle_table() {
    for (dividend, divisor, expected) in [(150u16, 30u8, 5u16), (70, 14, 5), (60, 25, 2), (40, 9, 4)]
    {
        assert_eq!(fast_div(dividend, divisor), expected);
        assert_eq!(fast_div(u32::from(dividend), divisor), u32::from(expected));
    }
}

#[test]
fn zero_divisor_returns_zero() {
    assert_eq!(fast_div(u8::MAX, 0u8), 0);
    assert_eq!(fast_div(u16::MAX, 0u8), 0);
    assert_eq!(fast_div(u16::MAX, 0u16), 0);
    assert_eq!(fast_div(u32::MAX, 0u8), 0);
    assert_eq!(fast_div(u32::MAX, 0u16), 0);
    assert_eq!(fast_div(u32::MAX, 0u32), 0);
}

#[test]
fn zero_divisor_policies() {
    assert_eq!(1234u16.fast_div_with::<ReturnMax>(0u8), u16::MAX);
    assert!(bool::from(1234u32.checked_fast_div(0u16).is_none()));
    assert_eq!(1234u32.checked_fast_div(2u16).unwrap(), 617);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn zero_divisor_panic_policy() {
    let _ = 1234u32.fast_div_with::<Panic>(0u32);
}

#[test]
fn narrowing_entry_points_never_panic() {
    // Quotient does not fit: result is unspecified but must not trap.
    let _ = fast_div16_8(0xFF00, 1);
    let _ = fast_div16_8(u16::MAX, u8::MAX);
    let _ = fast_div32_16(u32::MAX, 1);
    let _ = fast_div32_16(0xFFFF_0000, u16::MAX);
}

prop_compose! {
    /// A `u16` dividend whose quotient by the generated divisor fits in `u8`.
    fn narrowing_u16_u8()(divisor in 1u8..)(
        divisor in Just(divisor),
        hi in 0..divisor,
        lo in any::<u8>(),
    ) -> (u16, u8) {
        ((u16::from(hi) << 8) | u16::from(lo), divisor)
    }
}

prop_compose! {
    /// A `u32` dividend whose quotient by the generated divisor fits in `u16`.
    fn narrowing_u32_u16()(divisor in 1u16..)(
        divisor in Just(divisor),
        hi in 0..divisor,
        lo in any::<u16>(),
    ) -> (u32, u16) {
        ((u32::from(hi) << 16) | u32::from(lo), divisor)
    }
}

proptest! {
    #[test]
    fn u8_u8(a in any::<u8>(), b in any::<u8>()) {
        prop_assert_eq!(fast_div(a, b), a.checked_div(b).unwrap_or(0));
    }

    #[test]
    fn u16_u8(a in any::<u16>(), b in any::<u8>()) {
        prop_assert_eq!(fast_div(a, b), a.checked_div(u16::from(b)).unwrap_or(0));
    }

    #[test]
    fn u16_u16(a in any::<u16>(), b in any::<u16>()) {
        prop_assert_eq!(fast_div(a, b), a.checked_div(b).unwrap_or(0));
    }

    #[test]
    fn u32_u8(a in any::<u32>(), b in any::<u8>()) {
        prop_assert_eq!(fast_div(a, b), a.checked_div(u32::from(b)).unwrap_or(0));
    }

    #[test]
    fn u32_u16(a in any::<u32>(), b in any::<u16>()) {
        prop_assert_eq!(fast_div(a, b), a.checked_div(u32::from(b)).unwrap_or(0));
    }

    #[test]
    fn u32_u32(a in any::<u32>(), b in any::<u32>()) {
        prop_assert_eq!(fast_div(a, b), a.checked_div(b).unwrap_or(0));
    }

    #[test]
    fn u32_u16_narrowing((a, b) in narrowing_u32_u16()) {
        let expected = a / u32::from(b);
        prop_assert!(expected <= u32::from(u16::MAX));
        prop_assert_eq!(fast_div(a, b), expected);
        prop_assert_eq!(fast_div32_16(a, b), expected as u16);
    }

    #[test]
    fn u16_u8_narrowing((a, b) in narrowing_u16_u8()) {
        let expected = a / u16::from(b);
        prop_assert!(expected <= u16::from(u8::MAX));
        prop_assert_eq!(fast_div(a, b), expected);
        prop_assert_eq!(fast_div16_8(a, b), expected as u8);
    }

    #[test]
    fn u32_large_divisor(a in any::<u32>(), b in 0x1_0000u32..) {
        prop_assert_eq!(fast_div(a, b), a / b);
    }
}
