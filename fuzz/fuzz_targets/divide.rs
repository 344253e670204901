#![no_main]
use fast_div::{div_rem_large_divisor, divide};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, u16, u32)| {
    let (dividend, divisor, large) = input;

    if divisor != 0 && (dividend >> 16) < u32::from(divisor) {
        let (quot, rem) = divide(dividend, divisor);
        assert_eq!(u32::from(quot), dividend / u32::from(divisor));
        assert_eq!(u32::from(rem), dividend % u32::from(divisor));
    }

    if large != 0 {
        assert_eq!(
            div_rem_large_divisor(dividend, large),
            (dividend / large, dividend % large)
        );
    }
});
