//!
//! Support for serde implementations
//!

use crate::BigInteger;
use serde::{de, ser};
use std::fmt;
use std::str::FromStr;

impl ser::Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by serde to construct a BigInteger
struct BigIntegerVisitor;

impl<'de> de::Visitor<'de> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "an integer or formatted integer string")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        BigInteger::from_str(value).map_err(|err| E::custom(format!("{}", err)))
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }

    fn visit_i128<E>(self, value: i128) -> Result<BigInteger, E>
    where
        E: de::Error,
    {
        Ok(BigInteger::from(value))
    }
}

impl<'de> de::Deserialize<'de> for BigInteger {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigIntegerVisitor)
    }
}
