//! arithmetic routines

use crate::BigInteger;
use std::cmp::Ordering;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod division;
pub(crate) mod modulo;

/// Compare two digit magnitudes, most significant digit first.
///
/// Both slices must be normalized (no leading zeros), so a longer
/// slice is always the greater magnitude and equal lengths compare
/// lexicographically.
pub(crate) fn cmp_magnitudes(a: &[u8], b: &[u8]) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// True iff a normalized magnitude is zero
#[inline]
pub(crate) fn is_zero_magnitude(digits: &[u8]) -> bool {
    digits == [0]
}

/// Remove superfluous leading zeros, always keeping at least one digit
pub(crate) fn strip_leading_zeros(digits: &mut Vec<u8>) {
    debug_assert!(!digits.is_empty());
    let leading = digits.iter().take_while(|&&d| d == 0).count();
    let leading = leading.min(digits.len() - 1);
    digits.drain(..leading);
}

/// Combine two signed values with a single add/subtract core.
///
/// `subtract` requests `a - b`; addition with mixed signs and
/// subtraction both reduce to the same two magnitude-level routines
/// after sign normalization, so the four sign combinations share this
/// one dispatch and nothing recurses.
pub(crate) fn combine_signed(a: &BigInteger, b: &BigInteger, subtract: bool) -> BigInteger {
    let b_negative = b.is_negative() ^ subtract;

    if a.is_negative() == b_negative {
        // same effective sign: magnitudes add, sign carries over
        let digits = addition::add_magnitudes(a.digits(), b.digits());
        return BigInteger::from_parts(digits, a.is_negative());
    }

    match cmp_magnitudes(a.digits(), b.digits()) {
        Ordering::Equal => BigInteger::default(),
        Ordering::Greater => {
            let digits = subtraction::sub_magnitudes(a.digits(), b.digits());
            BigInteger::from_parts(digits, a.is_negative())
        }
        Ordering::Less => {
            let digits = subtraction::sub_magnitudes(b.digits(), a.digits());
            BigInteger::from_parts(digits, b_negative)
        }
    }
}
