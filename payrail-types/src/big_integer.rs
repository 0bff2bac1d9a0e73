/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Big integer type represented as a string.
//!
//! A simple string wrapper that carries arbitrary-precision integer fields
//! (catalog versions and the like) through the wire layer without loss. Users
//! who need arithmetic should parse the string with their preferred big
//! integer library.

use std::fmt;

/// An arbitrary-precision integer represented as its decimal digit string.
///
/// This type does not perform arithmetic operations and does not validate its
/// contents; the wire-mapping layer validates digit strings before
/// constructing one from external input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger(String);

impl Default for BigInteger {
    fn default() -> Self {
        Self("0".to_string())
    }
}

impl std::str::FromStr for BigInteger {
    // Infallible because any string is accepted - we just store it without validation
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for BigInteger {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for BigInteger {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn big_integer_basic() {
        let bi = BigInteger::from_str("12345678901234567890123").unwrap();
        assert_eq!(bi.as_ref(), "12345678901234567890123");
    }

    #[test]
    fn big_integer_default() {
        let bi = BigInteger::default();
        assert_eq!(bi.as_ref(), "0");
    }

    #[test]
    fn big_integer_from_fixed_width() {
        assert_eq!(BigInteger::from(-42i64).as_ref(), "-42");
        assert_eq!(BigInteger::from(u64::MAX).as_ref(), "18446744073709551615");
    }
}
