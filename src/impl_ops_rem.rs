//! Implement remainder
//!
//! Remainder follows truncating division: a non-zero result takes the
//! dividend's sign and `(a / b) * b + (a % b) == a` for non-zero `b`.
//! Taking the remainder by zero panics; use `checked_rem` for a
//! fallible variant.

use crate::arithmetic;
use crate::BigInteger;
use crate::{Rem, RemAssign};
use num_traits::Zero;

impl Rem<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn rem(self, other: &BigInteger) -> BigInteger {
        if other.is_zero() {
            panic!("Division by zero");
        }
        arithmetic::modulo::rem_bigintegers(self, other)
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInteger, rem);

impl RemAssign<BigInteger> for BigInteger {
    #[inline]
    fn rem_assign(&mut self, rhs: BigInteger) {
        self.rem_assign(&rhs);
    }
}

impl RemAssign<&BigInteger> for BigInteger {
    fn rem_assign(&mut self, rhs: &BigInteger) {
        let remainder = &*self % rhs;
        *self = remainder;
    }
}
