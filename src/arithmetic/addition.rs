//!
//! Addition algorithms for decimal digit magnitudes
//!

use crate::BigInteger;

/// Add two digit magnitudes, most significant digit first.
///
/// Operands are aligned on their least significant ends; the shorter
/// one is treated as zero-padded. A final carry digit is prepended if
/// one remains.
pub(crate) fn add_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (longer, shorter) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut result = Vec::with_capacity(longer.len() + 1);
    let mut shorter_digits = shorter.iter().rev();
    let mut carry = 0;

    for &digit in longer.iter().rev() {
        let sum = digit + shorter_digits.next().copied().unwrap_or(0) + carry;
        result.push(sum % 10);
        carry = sum / 10;
    }

    if carry != 0 {
        result.push(carry);
    }

    result.reverse();
    return result;
}

/// Signed addition, dispatching mixed signs through the combine core
#[inline]
pub(crate) fn add_bigintegers(a: &BigInteger, b: &BigInteger) -> BigInteger {
    crate::arithmetic::combine_signed(a, b, false)
}
