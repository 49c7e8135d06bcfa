//! Subtraction operator trait implementation
//!

use crate::arithmetic;
use crate::BigInteger;
use crate::{Sub, SubAssign};

impl Sub<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn sub(self, rhs: &BigInteger) -> BigInteger {
        arithmetic::subtraction::sub_bigintegers(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Sub for BigInteger, sub);

impl SubAssign<BigInteger> for BigInteger {
    #[inline]
    fn sub_assign(&mut self, rhs: BigInteger) {
        self.sub_assign(&rhs);
    }
}

impl SubAssign<&BigInteger> for BigInteger {
    fn sub_assign(&mut self, rhs: &BigInteger) {
        let difference = &*self - rhs;
        *self = difference;
    }
}
