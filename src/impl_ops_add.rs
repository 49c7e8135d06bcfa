//! Addition operator trait implementation
//!

use crate::arithmetic;
use crate::BigInteger;
use crate::{Add, AddAssign};

impl Add<&BigInteger> for &BigInteger {
    type Output = BigInteger;

    #[inline]
    fn add(self, rhs: &BigInteger) -> BigInteger {
        arithmetic::addition::add_bigintegers(self, rhs)
    }
}

forward_all_binop_to_ref_ref!(impl Add for BigInteger, add);

impl AddAssign<BigInteger> for BigInteger {
    #[inline]
    fn add_assign(&mut self, rhs: BigInteger) {
        self.add_assign(&rhs);
    }
}

impl AddAssign<&BigInteger> for BigInteger {
    fn add_assign(&mut self, rhs: &BigInteger) {
        let sum = &*self + rhs;
        *self = sum;
    }
}
