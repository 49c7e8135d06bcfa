//!
//! Remainder calculation for decimal digit magnitudes
//!

use crate::arithmetic::{cmp_magnitudes, subtraction::sub_magnitudes};
use crate::BigInteger;
use num_traits::Zero;
use std::cmp::Ordering;

/// Remainder of magnitude `a` divided by magnitude `b`.
///
/// The divisor is scaled up by trailing zero digits (powers of ten)
/// until its digit count matches the running remainder, backing off by
/// one zero when the scaled divisor overshoots, then subtracted out
/// repeatedly. The scale shrinks as the remainder shrinks until the
/// remainder drops below `b`. Requires `a >= b` and `b >= 2`.
fn rem_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut remainder = a.to_vec();

    loop {
        let mut scaled = b.to_vec();
        scaled.resize(remainder.len(), 0);

        if cmp_magnitudes(&remainder, &scaled) == Ordering::Less {
            scaled.pop();
        }

        while cmp_magnitudes(&remainder, &scaled) != Ordering::Less {
            remainder = sub_magnitudes(&remainder, &scaled);
        }

        if cmp_magnitudes(&remainder, b) == Ordering::Less {
            return remainder;
        }
    }
}

/// Remainder with truncating-division semantics: non-zero results copy
/// the dividend's sign, so `(a / b) * b + (a % b) == a` holds. The
/// divisor must be non-zero; operator impls and checked entry points
/// reject zero before calling here.
pub(crate) fn rem_bigintegers(a: &BigInteger, b: &BigInteger) -> BigInteger {
    debug_assert!(!b.is_zero());

    if a.is_zero() {
        return BigInteger::default();
    }

    match cmp_magnitudes(a.digits(), b.digits()) {
        // remainder is the dividend itself
        Ordering::Less => BigInteger::from_parts(a.digits().to_vec(), a.is_negative()),
        Ordering::Equal => BigInteger::default(),
        // anything divides evenly by one
        Ordering::Greater if b.digits() == [1] => BigInteger::default(),
        Ordering::Greater => {
            let digits = rem_magnitudes(a.digits(), b.digits());
            // from_parts normalizes a zero remainder to non-negative
            BigInteger::from_parts(digits, a.is_negative())
        }
    }
}
