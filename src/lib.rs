//! A big integer
//!
//! `BigInteger` stores a signed integer of unbounded magnitude as a
//! sequence of decimal digits, most significant first, paired with a
//! sign flag. It supports the four basic arithmetic operations (with
//! truncating division), the remainder operation, and total ordering,
//! where native fixed-width integers would overflow.
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers.
//!
//! # Example
//!
//! ```
//! use biginteger::BigInteger;
//! use std::str::FromStr;
//!
//! let a = BigInteger::from_str("1024").unwrap();
//! let b = BigInteger::from(42);
//!
//! assert_eq!((&a * &b).to_string(), "43008");
//! assert_eq!((&a % &b).to_string(), "16");
//! ```
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]

extern crate num_integer;
extern crate num_traits;

#[cfg(feature = "serde")]
extern crate serde;

use std::fmt;
use std::io;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

pub use num_traits::{One, Signed, Zero};

#[macro_use]
mod macros;

// From<T> impls for primitive integers
mod impl_convert;
// Add<T>, Sub<T>, etc...
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// Ord, PartialOrd
mod impl_cmp;

// Display, Debug
mod impl_fmt;

// Implementations of num_traits and num_integer
mod impl_num;

#[cfg(feature = "serde")]
mod impl_serde;

mod parsing;

pub(crate) mod arithmetic;

/// An arbitrary-precision signed integer.
///
/// Stored as decimal digits, most significant first. The digit vector
/// is never empty, carries no leading zeros (except the single digit
/// zero), and zero is never negative. Every operation returns a value
/// upholding those invariants, so derived equality and hashing agree
/// with numeric equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInteger {
    digits: Vec<u8>,
    negative: bool,
}

impl BigInteger {
    /// Build a value from raw decimal digits, most significant first.
    ///
    /// Digits are validated to be in `0..=9` and the result is
    /// normalized (leading zeros stripped, zero forced non-negative).
    ///
    /// # Example
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let n = BigInteger::from_digits(vec![0, 4, 2], true).unwrap();
    /// assert_eq!(n.to_string(), "-42");
    /// ```
    pub fn from_digits(digits: Vec<u8>, negative: bool) -> Result<BigInteger, ParseBigIntegerError> {
        if digits.is_empty() {
            return Err(ParseBigIntegerError::Empty);
        }
        if digits.iter().any(|&d| d > 9) {
            return Err(ParseBigIntegerError::Other(
                "Digit out of range for BigInteger".to_string(),
            ));
        }
        Ok(BigInteger::from_parts(digits, negative))
    }

    /// Construct from digits known to be valid, normalizing the result.
    pub(crate) fn from_parts(mut digits: Vec<u8>, negative: bool) -> BigInteger {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&d| d <= 9));
        arithmetic::strip_leading_zeros(&mut digits);
        let negative = negative && !arithmetic::is_zero_magnitude(&digits);
        BigInteger { digits, negative }
    }

    /// The decimal digits of the magnitude, most significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// True iff the value is strictly less than zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Read one integer token from a buffered reader.
    ///
    /// Skips leading whitespace, then accepts an optional `+`/`-` sign
    /// followed by decimal digits. The first non-digit terminator is
    /// left unconsumed in the reader, except a single whitespace
    /// character which is swallowed.
    ///
    /// Format failures are reported as [`io::ErrorKind::InvalidData`]
    /// wrapping a [`ParseBigIntegerError`]; end of input before any
    /// token as [`io::ErrorKind::UnexpectedEof`].
    ///
    /// # Example
    ///
    /// ```
    /// use biginteger::BigInteger;
    ///
    /// let mut input = "  -204 17".as_bytes();
    /// let n = BigInteger::read_token(&mut input).unwrap();
    /// assert_eq!(n.to_string(), "-204");
    /// let m = BigInteger::read_token(&mut input).unwrap();
    /// assert_eq!(m.to_string(), "17");
    /// ```
    pub fn read_token<R: io::BufRead>(reader: &mut R) -> io::Result<BigInteger> {
        parsing::read_token(reader)
    }

    /// Truncating division, returning `None` for a zero divisor.
    #[inline]
    pub fn checked_div(&self, divisor: &BigInteger) -> Option<BigInteger> {
        if divisor.is_zero() {
            return None;
        }
        Some(arithmetic::division::div_bigintegers(self, divisor))
    }

    /// Remainder of truncating division, returning `None` for a zero divisor.
    #[inline]
    pub fn checked_rem(&self, divisor: &BigInteger) -> Option<BigInteger> {
        if divisor.is_zero() {
            return None;
        }
        Some(arithmetic::modulo::rem_bigintegers(self, divisor))
    }

    /// Add one to the value in place.
    #[inline]
    pub fn increment(&mut self) {
        *self += BigInteger::one();
    }

    /// Subtract one from the value in place.
    #[inline]
    pub fn decrement(&mut self) {
        *self -= BigInteger::one();
    }
}

impl Default for BigInteger {
    #[inline]
    fn default() -> BigInteger {
        BigInteger {
            digits: vec![0],
            negative: false,
        }
    }
}

/// Error parsing a `BigInteger` from text
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseBigIntegerError {
    Empty,
    InvalidDigit(char),
    Other(String),
}

impl fmt::Display for ParseBigIntegerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseBigIntegerError::*;

        match *self {
            Empty => "Failed to parse empty string".fmt(f),
            InvalidDigit(c) => write!(f, "Invalid digit found in string: {:?}", c),
            Other(ref reason) => reason[..].fmt(f),
        }
    }
}

impl std::error::Error for ParseBigIntegerError {}

impl FromStr for BigInteger {
    type Err = ParseBigIntegerError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInteger, ParseBigIntegerError> {
        parsing::parse_from_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_is_zero() {
        let zero = BigInteger::default();
        assert!(zero.is_zero());
        assert_eq!(zero.digits(), [0]);
        assert!(!zero.is_negative());
    }

    #[test]
    fn from_digits_normalizes() {
        let n = BigInteger::from_digits(vec![0, 0, 7], false).unwrap();
        assert_eq!(n.digits(), [7]);

        let zero = BigInteger::from_digits(vec![0, 0], true).unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn from_digits_rejects_bad_input() {
        assert_eq!(
            BigInteger::from_digits(vec![], false).unwrap_err(),
            ParseBigIntegerError::Empty
        );
        assert!(BigInteger::from_digits(vec![1, 12], false).is_err());
    }

    #[test]
    fn increment_carries_through() {
        let mut n: BigInteger = "999".parse().unwrap();
        n.increment();
        assert_eq!(n.to_string(), "1000");
    }

    #[test]
    fn decrement_borrows_through() {
        let mut n: BigInteger = "-999".parse().unwrap();
        n.decrement();
        assert_eq!(n.to_string(), "-1000");

        let mut zero = BigInteger::zero();
        zero.decrement();
        assert_eq!(zero.to_string(), "-1");
    }

    #[test]
    fn checked_div_zero_divisor() {
        let a: BigInteger = "100".parse().unwrap();
        assert_eq!(a.checked_div(&BigInteger::zero()), None);
        assert_eq!(a.checked_rem(&BigInteger::zero()), None);

        let five: BigInteger = "5".parse().unwrap();
        assert_eq!(a.checked_div(&five), Some("20".parse().unwrap()));
        assert_eq!(a.checked_rem(&five), Some(BigInteger::zero()));
    }

    #[test]
    fn round_trip_through_display() {
        for s in &["0", "1", "-1", "1024", "-2048", "900719925474099190071992547409919"] {
            let value: BigInteger = s.parse().unwrap();
            let round_tripped: BigInteger = value.to_string().parse().unwrap();
            assert_eq!(value, round_tripped);
            assert_eq!(&round_tripped.to_string(), s);
        }
    }
}
