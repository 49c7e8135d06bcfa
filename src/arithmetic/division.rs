//!
//! Long division for decimal digit magnitudes
//!

use crate::arithmetic::{cmp_magnitudes, strip_leading_zeros, subtraction::sub_magnitudes};
use crate::BigInteger;
use num_traits::Zero;
use std::cmp::Ordering;

/// Running partial remainder for long division.
///
/// Always holds at least one digit and never has leading zeros, so
/// magnitude comparisons against the divisor are valid at every step.
struct Remainder {
    digits: Vec<u8>,
}

impl Remainder {
    fn new() -> Remainder {
        Remainder { digits: vec![0] }
    }

    /// Bring down the next dividend digit (multiply by ten and add)
    fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        if self.digits == [0] {
            self.digits[0] = digit;
        } else {
            self.digits.push(digit);
        }
    }

    /// Subtract `divisor` while the remainder allows it, returning the
    /// subtraction count. During long division this is the next
    /// quotient digit and never exceeds nine.
    fn reduce_by(&mut self, divisor: &[u8]) -> u8 {
        let mut count = 0;
        while cmp_magnitudes(&self.digits, divisor) != Ordering::Less {
            self.digits = sub_magnitudes(&self.digits, divisor);
            count += 1;
        }
        debug_assert!(count <= 9);
        count
    }
}

/// Divide magnitude `a` by `divisor`, truncating toward zero.
///
/// Classic long division: one dividend digit is brought down per step
/// and one quotient digit emitted, so quotient positions always align
/// with dividend positions; leading zeros are stripped once at the
/// end. Requires `a >= divisor` and a non-zero divisor.
fn div_magnitudes(a: &[u8], divisor: &[u8]) -> Vec<u8> {
    let mut quotient = Vec::with_capacity(a.len());
    let mut remainder = Remainder::new();

    for &digit in a {
        remainder.push_digit(digit);
        quotient.push(remainder.reduce_by(divisor));
    }

    strip_leading_zeros(&mut quotient);
    return quotient;
}

/// Truncating signed division. The divisor must be non-zero; operator
/// impls and checked entry points reject zero before calling here.
pub(crate) fn div_bigintegers(a: &BigInteger, divisor: &BigInteger) -> BigInteger {
    debug_assert!(!divisor.is_zero());

    let negative = a.is_negative() != divisor.is_negative();

    match cmp_magnitudes(a.digits(), divisor.digits()) {
        Ordering::Less => BigInteger::default(),
        Ordering::Equal => BigInteger::from_parts(vec![1], negative),
        // dividing by one keeps the dividend magnitude
        Ordering::Greater if divisor.digits() == [1] => {
            BigInteger::from_parts(a.digits().to_vec(), negative)
        }
        Ordering::Greater => {
            let digits = div_magnitudes(a.digits(), divisor.digits());
            BigInteger::from_parts(digits, negative)
        }
    }
}
