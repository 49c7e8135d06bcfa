//! Implement math operations against primitive integers, and unary Neg
//!

use crate::BigInteger;
use crate::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use num_traits::Zero;

impl Neg for BigInteger {
    type Output = BigInteger;

    /// Flip the sign; zero stays non-negative
    #[inline]
    fn neg(mut self) -> BigInteger {
        if !self.is_zero() {
            self.negative = !self.negative;
        }
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn neg(self) -> BigInteger {
        self.clone().neg()
    }
}

macro_rules! impl_binop_for_primitive {
    (impl $imp:ident::$method:ident, $assign_imp:ident::$assign_method:ident for $t:ty) => {
        impl $imp<$t> for BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: $t) -> BigInteger {
                $imp::$method(self, BigInteger::from(rhs))
            }
        }

        impl $imp<$t> for &BigInteger {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: $t) -> BigInteger {
                $imp::$method(self, &BigInteger::from(rhs))
            }
        }

        impl $imp<BigInteger> for $t {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: BigInteger) -> BigInteger {
                $imp::$method(BigInteger::from(self), rhs)
            }
        }

        impl $imp<&BigInteger> for $t {
            type Output = BigInteger;

            #[inline]
            fn $method(self, rhs: &BigInteger) -> BigInteger {
                $imp::$method(&BigInteger::from(self), rhs)
            }
        }

        impl $assign_imp<$t> for BigInteger {
            #[inline]
            fn $assign_method(&mut self, rhs: $t) {
                $assign_imp::$assign_method(self, BigInteger::from(rhs));
            }
        }
    };
}

macro_rules! impl_ops_for_primitive {
    ($($t:ty),*) => {$(
        impl_binop_for_primitive!(impl Add::add, AddAssign::add_assign for $t);
        impl_binop_for_primitive!(impl Sub::sub, SubAssign::sub_assign for $t);
        impl_binop_for_primitive!(impl Mul::mul, MulAssign::mul_assign for $t);
        impl_binop_for_primitive!(impl Div::div, DivAssign::div_assign for $t);
        impl_binop_for_primitive!(impl Rem::rem, RemAssign::rem_assign for $t);
    )*};
}

impl_ops_for_primitive!(u8, u16, u32, u64, u128, usize);
impl_ops_for_primitive!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_neg() {
        let a: BigInteger = "42".parse().unwrap();
        assert_eq!((-&a).to_string(), "-42");
        assert_eq!((-(-&a)), a);

        let zero = BigInteger::zero();
        let negated = -zero;
        assert!(!negated.is_negative());
        assert_eq!(negated.to_string(), "0");
    }

    #[test]
    fn test_ops_with_primitives() {
        let a: BigInteger = "1024".parse().unwrap();

        assert_eq!((a.clone() + 42u8).to_string(), "1066");
        assert_eq!((&a - 2048i32).to_string(), "-1024");
        assert_eq!((a.clone() * 42u64).to_string(), "43008");
        assert_eq!((&a / 10i8).to_string(), "102");
        assert_eq!((a.clone() % 42u16).to_string(), "16");

        assert_eq!((42i32 + &a).to_string(), "1066");
        assert_eq!((2048u32 - a.clone()).to_string(), "1024");
        assert_eq!((-2i64 * &a).to_string(), "-2048");

        let mut n = a;
        n += 42u8;
        n -= 2i16;
        n *= 2u32;
        n /= 4i64;
        n %= 100u64;
        assert_eq!(n.to_string(), "32");
    }
}
