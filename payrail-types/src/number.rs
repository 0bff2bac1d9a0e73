/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::BigInteger;
use std::fmt;

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// <https://docs.serde.rs/src/serde_json/number.rs.html#20-22>
///
/// The extra [`Number::BigInt`] variant carries integer literals that are too
/// wide for `u64`/`i64`, so arbitrary-precision wire values survive a parse
/// and re-serialize without loss.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    /// An unsigned integer.
    PosInt(u64),
    /// A signed integer.
    NegInt(i64),
    /// A 64-bit float.
    Float(f64),
    /// An integer wider than 64 bits, kept as its literal text.
    BigInt(BigInteger),
}

impl Number {
    /// Returns the name of this number kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Number::PosInt(_) | Number::NegInt(_) | Number::BigInt(_) => "integer",
            Number::Float(_) => "float",
        }
    }
}

/// The error type for failed conversions out of [`Number`].
#[derive(Debug)]
pub struct TryFromNumberError {
    kind: TryFromNumberErrorKind,
}

#[derive(Debug)]
enum TryFromNumberErrorKind {
    /// The integral value is outside the range of the target type.
    OutsideIntegerRange,
    /// A float cannot be converted to an integer type.
    FloatToIntegerLossyConversion,
    /// An integer cannot be represented exactly as an `f64`.
    IntegerToFloatLossyConversion,
}

impl TryFromNumberError {
    fn new(kind: TryFromNumberErrorKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for TryFromNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TryFromNumberErrorKind::*;
        match self.kind {
            OutsideIntegerRange => write!(f, "integer outside the range of the target type"),
            FloatToIntegerLossyConversion => {
                write!(f, "cannot convert a float to an integer type")
            }
            IntegerToFloatLossyConversion => {
                write!(f, "integer cannot be represented exactly as a float")
            }
        }
    }
}

impl std::error::Error for TryFromNumberError {}

impl From<std::num::TryFromIntError> for TryFromNumberError {
    fn from(_: std::num::TryFromIntError) -> Self {
        Self::new(TryFromNumberErrorKind::OutsideIntegerRange)
    }
}

impl TryFrom<&Number> for i32 {
    type Error = TryFromNumberError;

    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i32::try_from(*v)?),
            Number::NegInt(v) => Ok(i32::try_from(*v)?),
            Number::BigInt(v) => parse_big(v.as_ref()),
            Number::Float(_) => Err(TryFromNumberError::new(
                TryFromNumberErrorKind::FloatToIntegerLossyConversion,
            )),
        }
    }
}

impl TryFrom<&Number> for i64 {
    type Error = TryFromNumberError;

    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(i64::try_from(*v)?),
            Number::NegInt(v) => Ok(*v),
            Number::BigInt(v) => parse_big(v.as_ref()),
            Number::Float(_) => Err(TryFromNumberError::new(
                TryFromNumberErrorKind::FloatToIntegerLossyConversion,
            )),
        }
    }
}

impl TryFrom<&Number> for u64 {
    type Error = TryFromNumberError;

    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        match value {
            Number::PosInt(v) => Ok(*v),
            Number::NegInt(v) => Ok(u64::try_from(*v)?),
            Number::BigInt(v) => parse_big(v.as_ref()),
            Number::Float(_) => Err(TryFromNumberError::new(
                TryFromNumberErrorKind::FloatToIntegerLossyConversion,
            )),
        }
    }
}

impl TryFrom<&Number> for f64 {
    type Error = TryFromNumberError;

    fn try_from(value: &Number) -> Result<Self, Self::Error> {
        match value {
            Number::Float(v) => Ok(*v),
            Number::PosInt(v) => {
                let converted = *v as f64;
                // Compare in u128: the saturating f64 -> u64 cast would make
                // a rounded-up u64::MAX look exact.
                if converted as u128 == u128::from(*v) {
                    Ok(converted)
                } else {
                    Err(TryFromNumberError::new(
                        TryFromNumberErrorKind::IntegerToFloatLossyConversion,
                    ))
                }
            }
            Number::NegInt(v) => {
                let converted = *v as f64;
                if converted as i128 == i128::from(*v) {
                    Ok(converted)
                } else {
                    Err(TryFromNumberError::new(
                        TryFromNumberErrorKind::IntegerToFloatLossyConversion,
                    ))
                }
            }
            Number::BigInt(_) => Err(TryFromNumberError::new(
                TryFromNumberErrorKind::IntegerToFloatLossyConversion,
            )),
        }
    }
}

fn parse_big<T: std::str::FromStr>(digits: &str) -> Result<T, TryFromNumberError> {
    // BigInt only holds values that overflowed u64/i64 at parse time, but a
    // user-constructed one may still fit the target type.
    digits
        .parse::<T>()
        .map_err(|_| TryFromNumberError::new(TryFromNumberErrorKind::OutsideIntegerRange))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BigInteger;

    #[test]
    fn pos_int_conversions() {
        assert_eq!(i32::try_from(&Number::PosInt(42)).unwrap(), 42);
        assert_eq!(i64::try_from(&Number::PosInt(42)).unwrap(), 42);
        assert_eq!(u64::try_from(&Number::PosInt(u64::MAX)).unwrap(), u64::MAX);
        assert!(i64::try_from(&Number::PosInt(u64::MAX)).is_err());
    }

    #[test]
    fn neg_int_conversions() {
        assert_eq!(i32::try_from(&Number::NegInt(-7)).unwrap(), -7);
        assert_eq!(i64::try_from(&Number::NegInt(i64::MIN)).unwrap(), i64::MIN);
        assert!(u64::try_from(&Number::NegInt(-1)).is_err());
        assert!(i32::try_from(&Number::NegInt(i64::MAX)).is_err());
    }

    #[test]
    fn float_rejected_for_integers() {
        assert!(i32::try_from(&Number::Float(1.5)).is_err());
        assert!(i64::try_from(&Number::Float(2.0)).is_err());
        assert!(u64::try_from(&Number::Float(2.0)).is_err());
    }

    #[test]
    fn float_conversions() {
        assert_eq!(f64::try_from(&Number::Float(0.25)).unwrap(), 0.25);
        assert_eq!(f64::try_from(&Number::PosInt(5)).unwrap(), 5.0);
        assert_eq!(f64::try_from(&Number::NegInt(-5)).unwrap(), -5.0);
        // u64::MAX is not representable exactly as f64
        assert!(f64::try_from(&Number::PosInt(u64::MAX)).is_err());
    }

    #[test]
    fn big_int_conversions() {
        let small = Number::BigInt(BigInteger::from(12i64));
        assert_eq!(i32::try_from(&small).unwrap(), 12);

        let wide = Number::BigInt(BigInteger::from("98765432109876543210987".to_string()));
        assert!(i64::try_from(&wide).is_err());
        assert!(u64::try_from(&wide).is_err());
        assert!(f64::try_from(&wide).is_err());
    }
}
