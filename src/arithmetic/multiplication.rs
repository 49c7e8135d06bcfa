//!
//! Grade-school multiplication for decimal digit magnitudes
//!

use crate::arithmetic::strip_leading_zeros;
use crate::BigInteger;
use num_traits::Zero;

/// Multiply two digit magnitudes, most significant digit first.
///
/// Partial digit products accumulate into a buffer sized to the sum of
/// the operand lengths, indexed from the least significant end, then a
/// single carry-propagation pass reduces every cell to one digit. The
/// fixed buffer size introduces at most one leading zero, stripped at
/// the end.
pub(crate) fn mul_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut product = vec![0u64; a.len() + b.len()];

    for (i, &a_digit) in a.iter().rev().enumerate() {
        for (j, &b_digit) in b.iter().rev().enumerate() {
            product[i + j] += u64::from(a_digit) * u64::from(b_digit);
        }
    }

    let mut result = Vec::with_capacity(product.len());
    let mut carry = 0;
    for cell in product {
        let value = cell + carry;
        result.push((value % 10) as u8);
        carry = value / 10;
    }
    debug_assert_eq!(carry, 0);

    result.reverse();
    strip_leading_zeros(&mut result);
    return result;
}

/// Signed multiplication with zero short-circuit
pub(crate) fn mul_bigintegers(a: &BigInteger, b: &BigInteger) -> BigInteger {
    // multiplication by zero, avoids sign and leading-zero artifacts
    if a.is_zero() || b.is_zero() {
        return BigInteger::default();
    }

    let digits = mul_magnitudes(a.digits(), b.digits());
    BigInteger::from_parts(digits, a.is_negative() != b.is_negative())
}
