//! Implementation of comparison operations
//!
//! Equality is derived: normalization makes structural equality and
//! numeric equality the same thing. Ordering is sign first, then
//! digit count, then lexicographic digit comparison, with the result
//! reversed when both operands are negative.
//!

use crate::arithmetic::cmp_magnitudes;
use crate::BigInteger;

use std::cmp::Ordering;

impl PartialOrd for BigInteger {
    #[inline]
    fn partial_cmp(&self, other: &BigInteger) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    /// Complete ordering implementation for BigInteger
    ///
    /// # Example
    ///
    /// ```
    /// use std::str::FromStr;
    ///
    /// let a = biginteger::BigInteger::from_str("-1").unwrap();
    /// let b = biginteger::BigInteger::from_str("1").unwrap();
    /// assert!(a < b);
    /// assert!(b > a);
    /// let c = biginteger::BigInteger::from_str("10").unwrap();
    /// assert!(c > b);
    /// ```
    fn cmp(&self, other: &BigInteger) -> Ordering {
        match (self.negative, other.negative) {
            // a negative value is less than any non-negative value
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitudes(&self.digits, &other.digits),
            // larger magnitude means smaller value
            (true, true) => cmp_magnitudes(&other.digits, &self.digits),
        }
    }
}
