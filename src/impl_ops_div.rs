//! Implement division
//!
//! Integer division truncates toward zero. Dividing by zero panics;
//! use `checked_div` for a fallible variant.

use crate::arithmetic;
use crate::BigInteger;
use crate::{Div, DivAssign};
use num_traits::Zero;

impl Div<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn div(self, other: &BigInteger) -> BigInteger {
        if other.is_zero() {
            panic!("Division by zero");
        }
        arithmetic::division::div_bigintegers(self, other)
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInteger, div);

impl DivAssign<BigInteger> for BigInteger {
    #[inline]
    fn div_assign(&mut self, rhs: BigInteger) {
        self.div_assign(&rhs);
    }
}

impl DivAssign<&BigInteger> for BigInteger {
    fn div_assign(&mut self, rhs: &BigInteger) {
        let quotient = &*self / rhs;
        *self = quotient;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a:literal / $b:literal => $c:literal) => {
            #[test]
            fn $name() {
                let a: BigInteger = $a.parse().unwrap();
                let b: BigInteger = $b.parse().unwrap();
                let c: BigInteger = $c.parse().unwrap();

                assert_eq!(c, a.clone() / b.clone());
                assert_eq!(c, a.clone() / &b);
                assert_eq!(c, &a / b.clone());
                assert_eq!(c, &a / &b);

                let mut n = a;
                n /= &b;
                assert_eq!(c, n);
            }
        };
    }

    impl_case!(case_1024_42: "1024" / "42" => "24");
    impl_case!(case_42_1024: "42" / "1024" => "0");
    impl_case!(case_0_7: "0" / "7" => "0");
    impl_case!(case_equal_magnitudes: "42" / "42" => "1");
    impl_case!(case_equal_magnitudes_mixed: "-42" / "42" => "-1");
    impl_case!(case_divisor_one: "123456" / "1" => "123456");
    impl_case!(case_divisor_neg_one: "123456" / "-1" => "-123456");

    // truncation toward zero for every sign combination
    impl_case!(case_7_2: "7" / "2" => "3");
    impl_case!(case_n7_2: "-7" / "2" => "-3");
    impl_case!(case_7_n2: "7" / "-2" => "-3");
    impl_case!(case_n7_n2: "-7" / "-2" => "3");

    impl_case!(case_43008_42: "43008" / "42" => "1024");
    impl_case!(case_internal_zeros: "100400100" / "100" => "1004001");
    impl_case!(case_long: "340282366920938463463374607431768211456" / "18446744073709551616" => "18446744073709551616");

    #[test]
    #[should_panic(expected = "Division by zero")]
    fn division_by_zero_panics() {
        let a: BigInteger = "1".parse().unwrap();
        let _ = a / BigInteger::zero();
    }

    #[cfg(property_tests)]
    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_primitive_division(a: i64, b: i64) {
                prop_assume!(b != 0);
                let x = BigInteger::from(a);
                let y = BigInteger::from(b);
                let expected = BigInteger::from(a as i128 / b as i128);

                prop_assert_eq!(x / y, expected);
            }
        }
    }
}
