//!
//! Subtraction algorithms for decimal digit magnitudes
//!

use crate::arithmetic::{cmp_magnitudes, strip_leading_zeros};
use crate::BigInteger;
use std::cmp::Ordering;

/// Subtract the smaller magnitude `b` from the larger magnitude `a`.
///
/// Digit-wise subtraction with borrow propagation from the least
/// significant end; a borrow carries negative one into the next higher
/// digit. The result is normalized (leading zeros stripped, never
/// empty).
pub(crate) fn sub_magnitudes(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);

    let mut result = Vec::with_capacity(a.len());
    let mut b_digits = b.iter().rev();
    let mut borrow = 0;

    for &digit in a.iter().rev() {
        let subtrahend = b_digits.next().copied().unwrap_or(0) + borrow;
        if digit >= subtrahend {
            result.push(digit - subtrahend);
            borrow = 0;
        } else {
            result.push(digit + 10 - subtrahend);
            borrow = 1;
        }
    }

    debug_assert_eq!(borrow, 0);

    result.reverse();
    strip_leading_zeros(&mut result);
    return result;
}

/// Signed subtraction, dispatching mixed signs through the combine core
#[inline]
pub(crate) fn sub_bigintegers(a: &BigInteger, b: &BigInteger) -> BigInteger {
    crate::arithmetic::combine_signed(a, b, true)
}

#[cfg(test)]
mod test_sub_magnitudes {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($a:literal),*] [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let diff = sub_magnitudes(&[$($a),*], &[$($b),*]);
                assert_eq!(diff, [$($c),*]);
            }
        };
    }

    impl_case!(case_0_0: [0] [0] == [0]);
    impl_case!(case_7_7: [7] [7] == [0]);
    impl_case!(case_10_1: [1, 0] [1] == [9]);
    impl_case!(case_42_12: [4, 2] [1, 2] == [3, 0]);
    impl_case!(case_1000_1: [1, 0, 0, 0] [1] == [9, 9, 9]);
    impl_case!(case_2048_1024: [2, 0, 4, 8] [1, 0, 2, 4] == [1, 0, 2, 4]);
    impl_case!(case_100_99: [1, 0, 0] [9, 9] == [1]);
    impl_case!(case_borrow_chain: [1, 0, 0, 0, 0] [9, 9, 9, 9] == [1]);
    impl_case!(case_same_length_inner: [5, 0, 3] [1, 9, 4] == [3, 0, 9]);
}
