#![no_main]
use arbitrary::Arbitrary;
use fast_div::fast_div;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
pub enum Operation {
    U8U8(u8, u8),
    U16U8(u16, u8),
    U16U16(u16, u16),
    U32U8(u32, u8),
    U32U16(u32, u16),
    U32U32(u32, u32),
    I8I8(i8, i8),
    I16I8(i16, i8),
    I16I16(i16, i16),
    I32I8(i32, i8),
    I32I16(i32, i16),
    I32I32(i32, i32),
}

macro_rules! check {
    ($x:expr, $y:expr, $wide:ty) => {{
        let (x, y) = ($x, $y);
        let expected = if y == 0 { 0 } else { x.wrapping_div(<$wide>::from(y)) };
        assert_eq!(fast_div(x, y), expected, "{x} / {y}");
    }};
}

fuzz_target!(|operations: Vec<Operation>| {
    for op in operations {
        match op {
            Operation::U8U8(x, y) => check!(x, y, u8),
            Operation::U16U8(x, y) => check!(x, y, u16),
            Operation::U16U16(x, y) => check!(x, y, u16),
            Operation::U32U8(x, y) => check!(x, y, u32),
            Operation::U32U16(x, y) => check!(x, y, u32),
            Operation::U32U32(x, y) => check!(x, y, u32),
            Operation::I8I8(x, y) => check!(x, y, i8),
            Operation::I16I8(x, y) => check!(x, y, i16),
            Operation::I16I16(x, y) => check!(x, y, i16),
            Operation::I32I8(x, y) => check!(x, y, i32),
            Operation::I32I16(x, y) => check!(x, y, i32),
            Operation::I32I32(x, y) => check!(x, y, i32),
        }
    }
});
