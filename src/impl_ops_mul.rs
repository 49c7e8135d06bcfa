//! Multiplication operator trait implementation
//!

use crate::arithmetic;
use crate::BigInteger;
use crate::{Mul, MulAssign};

impl Mul<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn mul(self, rhs: &BigInteger) -> BigInteger {
        arithmetic::multiplication::mul_bigintegers(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInteger, mul);

impl MulAssign<BigInteger> for BigInteger {
    #[inline]
    fn mul_assign(&mut self, rhs: BigInteger) {
        self.mul_assign(&rhs);
    }
}

impl MulAssign<&BigInteger> for BigInteger {
    fn mul_assign(&mut self, rhs: &BigInteger) {
        let product = &*self * rhs;
        *self = product;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::{One, Zero};

    macro_rules! impl_case {
        ($name:ident: $a:literal * $b:literal => $c:literal) => {
            #[test]
            fn $name() {
                let a: BigInteger = $a.parse().unwrap();
                let b: BigInteger = $b.parse().unwrap();
                let c: BigInteger = $c.parse().unwrap();

                assert_eq!(c, a.clone() * b.clone());
                assert_eq!(c, a.clone() * &b);
                assert_eq!(c, &a * b.clone());
                assert_eq!(c, &a * &b);

                // commutes
                assert_eq!(c, &b * &a);

                let mut n = a.clone();
                n *= b.clone();
                assert_eq!(c, n);

                let mut n = a;
                n *= &b;
                assert_eq!(c, n);
            }
        };
    }

    impl_case!(case_1024_42: "1024" * "42" => "43008");
    impl_case!(case_0_42: "0" * "42" => "0");
    impl_case!(case_0_n42: "0" * "-42" => "0");
    impl_case!(case_1_n42: "1" * "-42" => "-42");
    impl_case!(case_n7_n6: "-7" * "-6" => "42");
    impl_case!(case_n7_6: "-7" * "6" => "-42");
    impl_case!(case_99_99: "99" * "99" => "9801");
    impl_case!(case_factorial_step: "2432902008176640000" * "21" => "51090942171709440000");
    impl_case!(case_large_square: "123456789123456789" * "123456789123456789" => "15241578780673678515622620750190521");

    #[test]
    fn multiplicative_identity_and_zero() {
        for s in &["0", "1", "-1", "42", "-1024", "123456789012345678901234567890"] {
            let a: BigInteger = s.parse().unwrap();
            assert_eq!(&a * &BigInteger::one(), a);
            assert!((&a * &BigInteger::zero()).is_zero());
        }
    }

    #[cfg(property_tests)]
    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn matches_primitive_multiplication(a: i64, b: i64) {
                let x = BigInteger::from(a);
                let y = BigInteger::from(b);
                let expected = BigInteger::from(a as i128 * b as i128);

                prop_assert_eq!(x * y, expected);
            }
        }
    }
}
