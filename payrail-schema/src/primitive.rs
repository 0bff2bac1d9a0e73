/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schemas for the scalar wire types.
//!
//! Each primitive validates the runtime type of a wire value and passes it
//! through unchanged. The numeric primitives are split by target width
//! (`integer`/`long`/`double`) so each model field gets the precise Rust type
//! its declaration calls for; conversions out of the wire number are checked,
//! never truncating.

use crate::{Schema, SchemaError};
use payrail_types::{BigInteger, Document, Number};

/// Schema for string values.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringSchema;

/// Returns the schema for string values.
pub fn string() -> StringSchema {
    StringSchema
}

impl Schema for StringSchema {
    type Value = String;

    fn read(&self, value: &Document) -> Result<String, SchemaError> {
        match value {
            Document::String(s) => Ok(s.clone()),
            other => Err(SchemaError::type_mismatch("string", other)),
        }
    }

    fn write(&self, value: &String) -> Document {
        Document::String(value.clone())
    }
}

/// Schema for boolean values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanSchema;

/// Returns the schema for boolean values.
pub fn boolean() -> BooleanSchema {
    BooleanSchema
}

impl Schema for BooleanSchema {
    type Value = bool;

    fn read(&self, value: &Document) -> Result<bool, SchemaError> {
        match value {
            Document::Bool(b) => Ok(*b),
            other => Err(SchemaError::type_mismatch("boolean", other)),
        }
    }

    fn write(&self, value: &bool) -> Document {
        Document::Bool(*value)
    }
}

/// Schema for 32-bit integer values.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerSchema;

/// Returns the schema for 32-bit integer values.
pub fn integer() -> IntegerSchema {
    IntegerSchema
}

impl Schema for IntegerSchema {
    type Value = i32;

    fn read(&self, value: &Document) -> Result<i32, SchemaError> {
        match value {
            Document::Number(n) => {
                i32::try_from(n).map_err(|_| SchemaError::type_mismatch("integer", value))
            }
            other => Err(SchemaError::type_mismatch("integer", other)),
        }
    }

    fn write(&self, value: &i32) -> Document {
        Document::from(*value)
    }
}

/// Schema for 64-bit integer values.
#[derive(Debug, Clone, Copy, Default)]
pub struct LongSchema;

/// Returns the schema for 64-bit integer values.
pub fn long() -> LongSchema {
    LongSchema
}

impl Schema for LongSchema {
    type Value = i64;

    fn read(&self, value: &Document) -> Result<i64, SchemaError> {
        match value {
            Document::Number(n) => {
                i64::try_from(n).map_err(|_| SchemaError::type_mismatch("integer", value))
            }
            other => Err(SchemaError::type_mismatch("integer", other)),
        }
    }

    fn write(&self, value: &i64) -> Document {
        Document::from(*value)
    }
}

/// Schema for 64-bit float values.
#[derive(Debug, Clone, Copy, Default)]
pub struct DoubleSchema;

/// Returns the schema for 64-bit float values.
pub fn double() -> DoubleSchema {
    DoubleSchema
}

impl Schema for DoubleSchema {
    type Value = f64;

    fn read(&self, value: &Document) -> Result<f64, SchemaError> {
        match value {
            Document::Number(n) => {
                f64::try_from(n).map_err(|_| SchemaError::type_mismatch("number", value))
            }
            other => Err(SchemaError::type_mismatch("number", other)),
        }
    }

    fn write(&self, value: &f64) -> Document {
        Document::from(*value)
    }
}

/// Schema for arbitrary-precision integer values.
///
/// Accepts an integer wire number of any magnitude, or a numeric-string
/// encoding (optional sign followed by decimal digits). Writes back as a raw
/// wire number, so values wider than 64 bits round-trip losslessly.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigIntegerSchema;

/// Returns the schema for arbitrary-precision integer values.
pub fn big_integer() -> BigIntegerSchema {
    BigIntegerSchema
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl Schema for BigIntegerSchema {
    type Value = BigInteger;

    fn read(&self, value: &Document) -> Result<BigInteger, SchemaError> {
        match value {
            Document::Number(Number::PosInt(v)) => Ok(BigInteger::from(*v)),
            Document::Number(Number::NegInt(v)) => Ok(BigInteger::from(*v)),
            Document::Number(Number::BigInt(v)) => Ok(v.clone()),
            Document::String(s) if is_integer_literal(s) => Ok(BigInteger::from(s.clone())),
            other => Err(SchemaError::type_mismatch("big integer", other)),
        }
    }

    fn write(&self, value: &BigInteger) -> Document {
        // Narrow back to a fixed-width wire number when the digits fit.
        let digits = value.as_ref();
        if let Ok(v) = digits.parse::<u64>() {
            return Document::from(v);
        }
        if let Ok(v) = digits.parse::<i64>() {
            return Document::from(v);
        }
        Document::Number(Number::BigInt(value.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_accepts_only_strings() {
        assert_eq!(string().read(&Document::from("abc")).unwrap(), "abc");
        let err = string().read(&Document::from(5u64)).unwrap_err();
        assert_eq!(err.to_string(), "expected string, found integer");
    }

    #[test]
    fn boolean_round_trip() {
        assert!(boolean().read(&Document::Bool(true)).unwrap());
        assert_eq!(boolean().write(&false), Document::Bool(false));
        assert!(boolean().read(&Document::Null).is_err());
    }

    #[test]
    fn integer_checks_range() {
        assert_eq!(integer().read(&Document::from(12u64)).unwrap(), 12);
        assert_eq!(integer().read(&Document::from(-12i64)).unwrap(), -12);
        assert!(integer().read(&Document::from(i64::MAX)).is_err());
        assert!(integer().read(&Document::from(1.5)).is_err());
        assert!(integer().read(&Document::from("5")).is_err());
    }

    #[test]
    fn double_accepts_exact_integers() {
        assert_eq!(double().read(&Document::from(2.5)).unwrap(), 2.5);
        assert_eq!(double().read(&Document::from(4u64)).unwrap(), 4.0);
        assert!(double().read(&Document::Bool(true)).is_err());
    }

    #[test]
    fn big_integer_accepts_numbers_and_digit_strings() {
        let schema = big_integer();
        assert_eq!(
            schema.read(&Document::from(7u64)).unwrap().as_ref(),
            "7"
        );
        assert_eq!(
            schema
                .read(&Document::from("123456789012345678901234567890"))
                .unwrap()
                .as_ref(),
            "123456789012345678901234567890"
        );
        assert_eq!(
            schema.read(&Document::from("-42")).unwrap().as_ref(),
            "-42"
        );
        assert!(schema.read(&Document::from("12x")).is_err());
        assert!(schema.read(&Document::from("")).is_err());
        assert!(schema.read(&Document::from(1.5)).is_err());
    }

    #[test]
    fn big_integer_writes_fixed_width_when_possible() {
        let schema = big_integer();
        assert_eq!(
            schema.write(&BigInteger::from(9u64)),
            Document::from(9u64)
        );
        assert_eq!(
            schema.write(&BigInteger::from(-9i64)),
            Document::from(-9i64)
        );
        let wide = BigInteger::from("123456789012345678901234567890".to_string());
        assert_eq!(
            schema.write(&wide),
            Document::Number(Number::BigInt(wide.clone()))
        );
    }
}
