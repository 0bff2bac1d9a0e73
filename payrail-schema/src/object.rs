/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Record schemas built from static field-mapping tables.
//!
//! An [`ObjectSchema`] pairs each internal field with its external snake_case
//! key and the schema that converts the field's value, mirroring the API's
//! per-model declarations. Unknown external keys are ignored on read; absent
//! optional members are omitted on write.

use crate::{Schema, SchemaError};
use payrail_types::Document;
use std::collections::HashMap;

/// One row of the field-mapping table, type-erased over the field's value type.
trait FieldBinding<T>: Send + Sync {
    fn read_into(
        &self,
        wire: &HashMap<String, Document>,
        target: &mut T,
    ) -> Result<(), SchemaError>;

    fn write_into(&self, source: &T, out: &mut HashMap<String, Document>);
}

struct Field<T, S: Schema> {
    external: &'static str,
    schema: S,
    get: fn(&T) -> &S::Value,
    set: fn(&mut T, S::Value),
}

impl<T, S: Schema> FieldBinding<T> for Field<T, S> {
    fn read_into(
        &self,
        wire: &HashMap<String, Document>,
        target: &mut T,
    ) -> Result<(), SchemaError> {
        let value = match wire.get(self.external) {
            Some(wire_value) => self.schema.read(wire_value),
            None => self.schema.read_absent(),
        }
        .map_err(|err| err.at_field(self.external))?;
        (self.set)(target, value);
        Ok(())
    }

    fn write_into(&self, source: &T, out: &mut HashMap<String, Document>) {
        let value = (self.get)(source);
        if !self.schema.writes_absent(value) {
            out.insert(self.external.to_string(), self.schema.write(value));
        }
    }
}

/// Schema for a record type.
///
/// Holds the declarative mapping from internal fields to
/// `(external key, value schema)` pairs. Construct with
/// [`ObjectSchema::builder`]:
///
/// ```
/// use payrail_schema::{optional, string, ObjectSchema, Schema};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Note {
///     body: Option<String>,
/// }
///
/// let schema: ObjectSchema<Note> = ObjectSchema::builder("Note")
///     .field("body", optional(string()), |n: &Note| &n.body, |n, v| n.body = v)
///     .build();
///
/// let wire = schema.write(&Note { body: Some("hi".into()) });
/// assert_eq!(schema.read(&wire).unwrap().body.as_deref(), Some("hi"));
/// ```
pub struct ObjectSchema<T> {
    name: &'static str,
    fields: Vec<Box<dyn FieldBinding<T>>>,
}

impl<T: 'static> ObjectSchema<T> {
    /// Starts a field-mapping table for the named record type.
    pub fn builder(name: &'static str) -> ObjectSchemaBuilder<T> {
        ObjectSchemaBuilder {
            name,
            fields: Vec::new(),
        }
    }
}

impl<T> ObjectSchema<T> {
    /// Returns the record type's name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl<T: Default + 'static> Schema for ObjectSchema<T> {
    type Value = T;

    fn read(&self, value: &Document) -> Result<T, SchemaError> {
        let wire = match value {
            Document::Object(map) => map,
            other => return Err(SchemaError::type_mismatch("object", other)),
        };
        let mut target = T::default();
        for field in &self.fields {
            field.read_into(wire, &mut target)?;
        }
        Ok(target)
    }

    fn write(&self, value: &T) -> Document {
        let mut out = HashMap::new();
        for field in &self.fields {
            field.write_into(value, &mut out);
        }
        Document::Object(out)
    }
}

/// Builder for [`ObjectSchema`].
pub struct ObjectSchemaBuilder<T> {
    name: &'static str,
    fields: Vec<Box<dyn FieldBinding<T>>>,
}

impl<T: 'static> ObjectSchemaBuilder<T> {
    /// Declares one member: its external wire key, the schema for its value,
    /// and the accessor pair tying it to the internal field.
    pub fn field<S>(
        mut self,
        external: &'static str,
        schema: S,
        get: fn(&T) -> &S::Value,
        set: fn(&mut T, S::Value),
    ) -> Self
    where
        S: Schema + 'static,
    {
        self.fields.push(Box::new(Field {
            external,
            schema,
            get,
            set,
        }));
        self
    }

    /// Finishes the table.
    pub fn build(self) -> ObjectSchema<T> {
        ObjectSchema {
            name: self.name,
            fields: self.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, integer, optional, string, ErrorKind};
    use payrail_types::Number;

    #[derive(Debug, Default, PartialEq)]
    struct Item {
        label: Option<String>,
        count: Option<i32>,
        tags: Option<Vec<String>>,
    }

    fn item_schema() -> ObjectSchema<Item> {
        ObjectSchema::builder("Item")
            .field("label", optional(string()), |i: &Item| &i.label, |i, v| {
                i.label = v
            })
            .field("count", optional(integer()), |i: &Item| &i.count, |i, v| {
                i.count = v
            })
            .field(
                "tags",
                optional(array(string())),
                |i: &Item| &i.tags,
                |i, v| i.tags = v,
            )
            .build()
    }

    fn wire_object(entries: Vec<(&str, Document)>) -> Document {
        Document::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn reads_declared_keys() {
        let schema = item_schema();
        let item = schema
            .read(&wire_object(vec![
                ("label", Document::from("widget")),
                ("count", Document::from(3u64)),
            ]))
            .unwrap();
        assert_eq!(item.label.as_deref(), Some("widget"));
        assert_eq!(item.count, Some(3));
        assert_eq!(item.tags, None);
    }

    #[test]
    fn ignores_unknown_keys() {
        let schema = item_schema();
        let item = schema
            .read(&wire_object(vec![
                ("label", Document::from("widget")),
                ("internal_use_only", Document::Bool(true)),
            ]))
            .unwrap();
        assert_eq!(item.label.as_deref(), Some("widget"));
    }

    #[test]
    fn explicit_null_reads_as_absent() {
        let schema = item_schema();
        let item = schema
            .read(&wire_object(vec![("label", Document::Null)]))
            .unwrap();
        assert_eq!(item.label, None);
    }

    #[test]
    fn absent_fields_are_omitted_on_write() {
        let schema = item_schema();
        let wire = schema.write(&Item {
            label: Some("widget".to_string()),
            count: None,
            tags: None,
        });
        let map = wire.as_object().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["label"].as_string(), Some("widget"));
    }

    #[test]
    fn type_mismatch_names_the_field() {
        let schema = item_schema();
        let err = schema
            .read(&wire_object(vec![(
                "count",
                Document::from("three"),
            )]))
            .unwrap_err();
        assert_eq!(err.path(), "count");
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
    }

    #[test]
    fn element_failure_names_the_index() {
        let schema = item_schema();
        let err = schema
            .read(&wire_object(vec![(
                "tags",
                Document::Array(vec![
                    Document::from("a"),
                    Document::Number(Number::PosInt(1)),
                ]),
            )]))
            .unwrap_err();
        assert_eq!(err.path(), "tags[1]");
    }

    #[test]
    fn non_object_is_a_structural_mismatch() {
        let schema = item_schema();
        let err = schema.read(&Document::from("nope")).unwrap_err();
        assert_eq!(err.to_string(), "expected object, found string");
    }

    #[test]
    fn round_trip() {
        let schema = item_schema();
        let original = Item {
            label: Some("widget".to_string()),
            count: Some(7),
            tags: Some(vec!["a".to_string(), "b".to_string()]),
        };
        let restored = schema.read(&schema.write(&original)).unwrap();
        assert_eq!(restored, original);
    }
}
