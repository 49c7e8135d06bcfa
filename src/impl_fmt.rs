//! Implementation of std::fmt traits
//!

use crate::BigInteger;
use std::fmt;

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut digits = String::with_capacity(self.digits.len());
        for &d in &self.digits {
            digits.push(char::from(b'0' + d));
        }
        // pad_integral handles the sign along with width/fill/plus flags
        f.pad_integral(!self.negative, "", &digits)
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInteger(\"{}\")", self)
    }
}
