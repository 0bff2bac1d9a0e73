/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Number;
use std::collections::HashMap;

/// Untyped wire value tree.
///
/// A `Document` is the JSON-like shape exchanged with the remote API before
/// any schema has been applied: nested string-keyed mappings and sequences
/// over a small set of scalar values. The wire-mapping layer converts between
/// `Document` and typed model values.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A string-keyed mapping.
    Object(HashMap<String, Document>),
    /// An ordered sequence.
    Array(Vec<Document>),
    /// A number.
    Number(Number),
    /// A string.
    String(String),
    /// A boolean.
    Bool(bool),
    /// An explicit null.
    Null,
}

impl Document {
    /// Returns the name of this value's runtime type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Object(_) => "object",
            Document::Array(_) => "array",
            Document::Number(n) => n.kind_name(),
            Document::String(_) => "string",
            Document::Bool(_) => "boolean",
            Document::Null => "null",
        }
    }

    /// Returns the inner mapping if this is an object.
    pub fn as_object(&self) -> Option<&HashMap<String, Document>> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the inner sequence if this is an array.
    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the inner number if this is a number.
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Document::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the inner string if this is a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner boolean if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns true if this is a null.
    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_string())
    }
}

impl From<Vec<Document>> for Document {
    fn from(values: Vec<Document>) -> Self {
        Document::Array(values)
    }
}

impl From<HashMap<String, Document>> for Document {
    fn from(values: HashMap<String, Document>) -> Self {
        Document::Object(values)
    }
}

impl From<u64> for Document {
    fn from(value: u64) -> Self {
        Document::Number(Number::PosInt(value))
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        if value < 0 {
            Document::Number(Number::NegInt(value))
        } else {
            Document::Number(Number::PosInt(value as u64))
        }
    }
}

impl From<i32> for Document {
    fn from(value: i32) -> Self {
        Document::from(value as i64)
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Number(Number::Float(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Document::Null.type_name(), "null");
        assert_eq!(Document::Bool(true).type_name(), "boolean");
        assert_eq!(Document::from("x").type_name(), "string");
        assert_eq!(Document::from(1u64).type_name(), "integer");
        assert_eq!(Document::from(1.5).type_name(), "float");
        assert_eq!(Document::Array(vec![]).type_name(), "array");
        assert_eq!(Document::Object(HashMap::new()).type_name(), "object");
    }

    #[test]
    fn accessors() {
        let doc = Document::from("hello");
        assert_eq!(doc.as_string(), Some("hello"));
        assert!(doc.as_number().is_none());
        assert!(doc.as_object().is_none());

        let arr = Document::Array(vec![Document::Null, Document::Bool(false)]);
        assert_eq!(arr.as_array().map(|a| a.len()), Some(2));
        assert!(arr.as_array().unwrap()[0].is_null());
        assert_eq!(arr.as_array().unwrap()[1].as_bool(), Some(false));
    }

    #[test]
    fn signed_from_picks_variant() {
        assert_eq!(Document::from(-1i64), Document::Number(Number::NegInt(-1)));
        assert_eq!(Document::from(1i64), Document::Number(Number::PosInt(1)));
    }
}
