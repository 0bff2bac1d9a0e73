/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_types::Document;
use std::borrow::Cow;
use std::fmt;

/// Why a conversion failed.
#[derive(Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The wire value's runtime type does not match what the schema expects.
    /// Structural mismatches (scalar where an object or array was expected,
    /// and vice versa) report the same way.
    TypeMismatch {
        /// The type the schema expected.
        expected: &'static str,
        /// The type actually found on the wire.
        found: &'static str,
    },
    /// A non-optional member's external key was missing from the wire object.
    MissingField,
    /// Anything else, described in prose.
    Custom(Cow<'static, str>),
}

/// One step of the field path leading to a failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// An object member, by its external key.
    Field(Cow<'static, str>),
    /// An array element, by position.
    Index(usize),
}

/// The error type for wire-mapping failures.
///
/// Carries the reason plus the field path from the top-level value down to
/// the offending position, e.g. `payment_requests[2].computed_amount_money.amount`.
/// The path is assembled as the error propagates out of nested combinators.
#[derive(Debug)]
pub struct SchemaError {
    kind: ErrorKind,
    // Innermost segment first; rendered outermost-first.
    path: Vec<PathSegment>,
}

impl SchemaError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            path: Vec::new(),
        }
    }

    /// A type mismatch against the given wire value.
    pub fn type_mismatch(expected: &'static str, found: &Document) -> Self {
        Self::new(ErrorKind::TypeMismatch {
            expected,
            found: found.type_name(),
        })
    }

    /// A missing non-optional member.
    pub fn missing_field() -> Self {
        Self::new(ErrorKind::MissingField)
    }

    /// A custom failure.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ErrorKind::Custom(message.into()))
    }

    /// Records that this error occurred under the given object member.
    pub fn at_field(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.path.push(PathSegment::Field(name.into()));
        self
    }

    /// Records that this error occurred under the given array index.
    pub fn at_index(mut self, index: usize) -> Self {
        self.path.push(PathSegment::Index(index));
        self
    }

    /// Returns the reason for the failure.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Renders the field path, outermost segment first.
    ///
    /// Empty when the failure was at the top-level value itself.
    pub fn path(&self) -> String {
        let mut rendered = String::new();
        for segment in self.path.iter().rev() {
            match segment {
                PathSegment::Field(name) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }
                    rendered.push_str(name);
                }
                PathSegment::Index(index) => {
                    rendered.push('[');
                    rendered.push_str(&index.to_string());
                    rendered.push(']');
                }
            }
        }
        rendered
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.path();
        if !path.is_empty() {
            write!(f, "at {path}: ")?;
        }
        match &self.kind {
            ErrorKind::TypeMismatch { expected, found } => {
                write!(f, "expected {expected}, found {found}")
            }
            ErrorKind::MissingField => write!(f, "missing required field"),
            ErrorKind::Custom(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for SchemaError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_path_outermost_first() {
        let err = SchemaError::type_mismatch("string", &Document::Bool(true))
            .at_field("amount")
            .at_index(2)
            .at_field("payment_requests");
        assert_eq!(err.path(), "payment_requests[2].amount");
        assert_eq!(
            err.to_string(),
            "at payment_requests[2].amount: expected string, found boolean"
        );
    }

    #[test]
    fn top_level_error_has_no_path() {
        let err = SchemaError::type_mismatch("object", &Document::Null);
        assert_eq!(err.path(), "");
        assert_eq!(err.to_string(), "expected object, found null");
    }
}
