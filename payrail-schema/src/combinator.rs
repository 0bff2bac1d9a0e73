/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Schema combinators: optionality, sequences, string-keyed maps, and lazy
//! references for cyclic model graphs.

use crate::{Schema, SchemaError};
use payrail_types::Document;
use std::collections::HashMap;

/// Wraps a schema so absence is a legal value.
///
/// An absent key or an explicit wire `null` reads as `None`; `None` writes as
/// an omitted member rather than an explicit `null`.
#[derive(Debug, Clone, Copy)]
pub struct Optional<S> {
    inner: S,
}

/// Marks the inner schema's field as optional.
pub fn optional<S: Schema>(inner: S) -> Optional<S> {
    Optional { inner }
}

impl<S: Schema> Schema for Optional<S> {
    type Value = Option<S::Value>;

    fn read(&self, value: &Document) -> Result<Self::Value, SchemaError> {
        match value {
            Document::Null => Ok(None),
            other => self.inner.read(other).map(Some),
        }
    }

    fn write(&self, value: &Self::Value) -> Document {
        match value {
            Some(inner_value) => self.inner.write(inner_value),
            None => Document::Null,
        }
    }

    fn read_absent(&self) -> Result<Self::Value, SchemaError> {
        Ok(None)
    }

    fn writes_absent(&self, value: &Self::Value) -> bool {
        value.is_none()
    }
}

/// Applies an element schema across a wire sequence, preserving order.
#[derive(Debug, Clone, Copy)]
pub struct ArraySchema<S> {
    element: S,
}

/// Returns a schema for sequences of `element`.
pub fn array<S: Schema>(element: S) -> ArraySchema<S> {
    ArraySchema { element }
}

impl<S: Schema> Schema for ArraySchema<S> {
    type Value = Vec<S::Value>;

    fn read(&self, value: &Document) -> Result<Self::Value, SchemaError> {
        let items = match value {
            Document::Array(items) => items,
            other => return Err(SchemaError::type_mismatch("array", other)),
        };
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                self.element
                    .read(item)
                    .map_err(|err| err.at_index(index))
            })
            .collect()
    }

    fn write(&self, value: &Self::Value) -> Document {
        Document::Array(value.iter().map(|item| self.element.write(item)).collect())
    }
}

/// Applies a value schema across a string-keyed wire object.
///
/// Used for seller-defined metadata members, where keys are free-form.
#[derive(Debug, Clone, Copy)]
pub struct MapSchema<S> {
    value: S,
}

/// Returns a schema for string-keyed maps of `value`.
pub fn map<S: Schema>(value: S) -> MapSchema<S> {
    MapSchema { value }
}

impl<S: Schema> Schema for MapSchema<S> {
    type Value = HashMap<String, S::Value>;

    fn read(&self, value: &Document) -> Result<Self::Value, SchemaError> {
        let entries = match value {
            Document::Object(entries) => entries,
            other => return Err(SchemaError::type_mismatch("object", other)),
        };
        entries
            .iter()
            .map(|(key, entry)| {
                self.value
                    .read(entry)
                    .map(|converted| (key.clone(), converted))
                    .map_err(|err| err.at_field(key.clone()))
            })
            .collect()
    }

    fn write(&self, value: &Self::Value) -> Document {
        Document::Object(
            value
                .iter()
                .map(|(key, entry)| (key.clone(), self.value.write(entry)))
                .collect(),
        )
    }
}

/// Defers resolution of a referenced schema until conversion time.
///
/// Model schemas are memoized statics, so storing the accessor function here
/// (instead of the schema itself) breaks definition-time cycles between
/// mutually referencing record types. Recursion during conversion is bounded
/// by the depth of the actual input data.
#[derive(Debug)]
pub struct LazySchema<S: 'static> {
    thunk: fn() -> &'static S,
}

/// Returns a schema that resolves `thunk` on first use.
pub fn lazy<S: Schema>(thunk: fn() -> &'static S) -> LazySchema<S> {
    LazySchema { thunk }
}

impl<S: Schema> Schema for LazySchema<S> {
    type Value = S::Value;

    fn read(&self, value: &Document) -> Result<Self::Value, SchemaError> {
        (self.thunk)().read(value)
    }

    fn write(&self, value: &Self::Value) -> Document {
        (self.thunk)().write(value)
    }

    fn read_absent(&self) -> Result<Self::Value, SchemaError> {
        (self.thunk)().read_absent()
    }

    fn writes_absent(&self, value: &Self::Value) -> bool {
        (self.thunk)().writes_absent(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{string, ObjectSchema, WireModel};
    use payrail_types::Number;
    use std::sync::LazyLock;

    #[test]
    fn optional_null_and_absent() {
        let schema = optional(string());
        assert_eq!(schema.read(&Document::Null).unwrap(), None);
        assert_eq!(schema.read_absent().unwrap(), None);
        assert_eq!(
            schema.read(&Document::from("x")).unwrap().as_deref(),
            Some("x")
        );
        assert!(schema.writes_absent(&None));
        assert!(!schema.writes_absent(&Some("x".to_string())));
    }

    #[test]
    fn optional_still_rejects_wrong_types() {
        let schema = optional(string());
        let err = schema.read(&Document::Bool(true)).unwrap_err();
        assert_eq!(err.to_string(), "expected string, found boolean");
    }

    #[test]
    fn array_preserves_order() {
        let schema = array(string());
        let wire = Document::Array(vec![
            Document::from("c"),
            Document::from("a"),
            Document::from("b"),
        ]);
        assert_eq!(schema.read(&wire).unwrap(), vec!["c", "a", "b"]);
        assert_eq!(schema.write(&schema.read(&wire).unwrap()), wire);
    }

    #[test]
    fn array_failure_carries_index() {
        let schema = array(string());
        let wire = Document::Array(vec![
            Document::from("ok"),
            Document::Number(Number::Float(1.0)),
        ]);
        let err = schema.read(&wire).unwrap_err();
        assert_eq!(err.path(), "[1]");
    }

    #[test]
    fn empty_array_is_present_not_absent() {
        let schema = optional(array(string()));
        let value = schema.read(&Document::Array(vec![])).unwrap();
        assert_eq!(value, Some(vec![]));
        assert!(!schema.writes_absent(&value));
    }

    #[test]
    fn map_converts_values() {
        let schema = map(string());
        let mut entries = HashMap::new();
        entries.insert("note".to_string(), Document::from("gift"));
        let value = schema.read(&Document::Object(entries)).unwrap();
        assert_eq!(value["note"], "gift");

        let mut bad = HashMap::new();
        bad.insert("note".to_string(), Document::Bool(true));
        let err = schema.read(&Document::Object(bad)).unwrap_err();
        assert_eq!(err.path(), "note");
    }

    // Two mutually referencing record types, the shape the invoice graph has
    // at full scale. Each schema is a memoized static resolved through
    // `lazy`, so constructing either one must not recurse.
    #[derive(Debug, Clone, Default, PartialEq)]
    struct Team {
        name: Option<String>,
        lead: Option<Box<Member>>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Member {
        name: Option<String>,
        team: Option<Box<Team>>,
    }

    #[derive(Debug, Clone, Copy)]
    struct Boxed<S> {
        inner: S,
    }

    fn boxed<S: Schema>(inner: S) -> Boxed<S> {
        Boxed { inner }
    }

    impl<S: Schema> Schema for Boxed<S> {
        type Value = Box<S::Value>;

        fn read(&self, value: &Document) -> Result<Self::Value, SchemaError> {
            self.inner.read(value).map(Box::new)
        }

        fn write(&self, value: &Self::Value) -> Document {
            self.inner.write(value)
        }
    }

    impl WireModel for Team {
        fn schema() -> &'static ObjectSchema<Self> {
            static SCHEMA: LazyLock<ObjectSchema<Team>> = LazyLock::new(|| {
                ObjectSchema::builder("Team")
                    .field("name", optional(string()), |t: &Team| &t.name, |t, v| {
                        t.name = v
                    })
                    .field(
                        "lead",
                        optional(boxed(lazy(Member::schema))),
                        |t: &Team| &t.lead,
                        |t, v| t.lead = v,
                    )
                    .build()
            });
            &SCHEMA
        }
    }

    impl WireModel for Member {
        fn schema() -> &'static ObjectSchema<Self> {
            static SCHEMA: LazyLock<ObjectSchema<Member>> = LazyLock::new(|| {
                ObjectSchema::builder("Member")
                    .field(
                        "name",
                        optional(string()),
                        |m: &Member| &m.name,
                        |m, v| m.name = v,
                    )
                    .field(
                        "team",
                        optional(boxed(lazy(Team::schema))),
                        |m: &Member| &m.team,
                        |m, v| m.team = v,
                    )
                    .build()
            });
            &SCHEMA
        }
    }

    #[test]
    fn mutually_referencing_schemas_construct_and_convert() {
        let team = Team {
            name: Some("billing".to_string()),
            lead: Some(Box::new(Member {
                name: Some("sam".to_string()),
                team: Some(Box::new(Team {
                    name: Some("billing".to_string()),
                    lead: None,
                })),
            })),
        };
        let restored = Team::from_document(&team.to_document()).unwrap();
        assert_eq!(restored, team);
    }

    #[test]
    fn lazy_error_paths_span_the_reference() {
        let mut inner = HashMap::new();
        inner.insert("name".to_string(), Document::from(1u64));
        let mut outer = HashMap::new();
        outer.insert("lead".to_string(), Document::Object(inner));
        let err = Team::from_document(&Document::Object(outer)).unwrap_err();
        assert_eq!(err.path(), "lead.name");
    }
}
