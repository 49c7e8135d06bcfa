//! Implementations of num_traits and num_integer traits
//!

use crate::{BigInteger, ParseBigIntegerError};
use num_integer::Integer;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, FromPrimitive, Num, One, Signed,
    ToPrimitive, Zero,
};

impl Zero for BigInteger {
    #[inline]
    fn zero() -> BigInteger {
        BigInteger::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.digits == [0]
    }
}

impl One for BigInteger {
    #[inline]
    fn one() -> BigInteger {
        BigInteger {
            digits: vec![1],
            negative: false,
        }
    }
}

impl Num for BigInteger {
    type FromStrRadixErr = ParseBigIntegerError;

    /// Decimal-only parsing; any other radix is rejected
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInteger, ParseBigIntegerError> {
        if radix != 10 {
            return Err(ParseBigIntegerError::Other(String::from(
                "The radix for BigInteger MUST be 10",
            )));
        }
        crate::parsing::parse_from_str(s)
    }
}

impl Signed for BigInteger {
    fn abs(&self) -> BigInteger {
        BigInteger {
            digits: self.digits.clone(),
            negative: false,
        }
    }

    fn abs_sub(&self, other: &BigInteger) -> BigInteger {
        if self <= other {
            BigInteger::zero()
        } else {
            self - other
        }
    }

    fn signum(&self) -> BigInteger {
        if self.is_zero() {
            BigInteger::zero()
        } else if self.negative {
            -BigInteger::one()
        } else {
            BigInteger::one()
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.negative && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl CheckedAdd for BigInteger {
    #[inline]
    fn checked_add(&self, v: &BigInteger) -> Option<BigInteger> {
        Some(self + v)
    }
}

impl CheckedSub for BigInteger {
    #[inline]
    fn checked_sub(&self, v: &BigInteger) -> Option<BigInteger> {
        Some(self - v)
    }
}

impl CheckedMul for BigInteger {
    #[inline]
    fn checked_mul(&self, v: &BigInteger) -> Option<BigInteger> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInteger {
    #[inline]
    fn checked_div(&self, v: &BigInteger) -> Option<BigInteger> {
        BigInteger::checked_div(self, v)
    }
}

impl CheckedRem for BigInteger {
    #[inline]
    fn checked_rem(&self, v: &BigInteger) -> Option<BigInteger> {
        BigInteger::checked_rem(self, v)
    }
}

impl ToPrimitive for BigInteger {
    fn to_i64(&self) -> Option<i64> {
        self.to_string().parse().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_string().parse().ok()
    }

    fn to_i128(&self) -> Option<i128> {
        self.to_string().parse().ok()
    }

    fn to_u128(&self) -> Option<u128> {
        self.to_string().parse().ok()
    }
}

impl FromPrimitive for BigInteger {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_i128(n: i128) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }

    #[inline]
    fn from_u128(n: u128) -> Option<BigInteger> {
        Some(BigInteger::from(n))
    }
}

impl Integer for BigInteger {
    /// Floored division; differs from `/` only when the operand signs
    /// disagree and the division is inexact
    fn div_floor(&self, other: &BigInteger) -> BigInteger {
        let (quotient, remainder) = self.div_rem(other);
        if remainder.is_zero() || self.is_negative() == other.is_negative() {
            quotient
        } else {
            quotient - BigInteger::one()
        }
    }

    /// Floored remainder; takes the sign of the divisor
    fn mod_floor(&self, other: &BigInteger) -> BigInteger {
        let remainder = self % other;
        if remainder.is_zero() || remainder.is_negative() == other.is_negative() {
            remainder
        } else {
            remainder + other
        }
    }

    fn gcd(&self, other: &BigInteger) -> BigInteger {
        // Euclid's algorithm over magnitudes
        let mut a = self.abs();
        let mut b = other.abs();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    fn lcm(&self, other: &BigInteger) -> BigInteger {
        if self.is_zero() || other.is_zero() {
            return BigInteger::zero();
        }
        let gcd = self.gcd(other);
        (self / &gcd * other).abs()
    }

    fn is_multiple_of(&self, other: &BigInteger) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        // last digit decides parity; the digit vec is never empty
        matches!(self.digits.last(), Some(d) if d % 2 == 0)
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }

    #[inline]
    fn div_rem(&self, other: &BigInteger) -> (BigInteger, BigInteger) {
        (self / other, self % other)
    }
}
