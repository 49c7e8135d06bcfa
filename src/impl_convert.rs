//! Conversions from primitive integers
//!
//! Every primitive goes through the standard decimal formatter and the
//! string parser, so validation and normalization are identical to
//! parsing the same numeral from text.

use crate::parsing;
use crate::BigInteger;

macro_rules! impl_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for BigInteger {
            #[inline]
            fn from(n: $t) -> BigInteger {
                parsing::parse_from_str(&n.to_string())
                    .expect("formatted primitive integer is a valid numeral")
            }
        }
    )*};
}

impl_from_int!(u8, u16, u32, u64, u128, usize);
impl_from_int!(i8, i16, i32, i64, i128, isize);
