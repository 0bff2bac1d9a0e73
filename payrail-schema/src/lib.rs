/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Declarative wire-mapping schemas for the Payrail SDK.
//!
//! A [`Schema`] is a reusable, composable descriptor that converts between
//! the external wire representation (snake_case keyed [`Document`] trees) and
//! the typed internal representation used by application code. Schemas are
//! built from a small set of combinators:
//!
//! - primitives: [`string`], [`boolean`], [`integer`], [`long`], [`double`],
//!   [`big_integer`]
//! - containers: [`ObjectSchema`] (via [`ObjectSchema::builder`]), [`array`],
//!   [`map`]
//! - modifiers: [`optional`], [`lazy`]
//!
//! Conversion is a pure, synchronous tree transformation. Schemas are
//! immutable after construction and `Send + Sync`, so a single static schema
//! serves any number of concurrent conversions. A conversion either fully
//! succeeds or fails with a [`SchemaError`] naming the field path of the
//! first offending value; there are no partial results.

mod combinator;
mod error;
mod object;
mod primitive;

pub use combinator::{array, lazy, map, optional, ArraySchema, LazySchema, MapSchema, Optional};
pub use error::{ErrorKind, PathSegment, SchemaError};
pub use object::{ObjectSchema, ObjectSchemaBuilder};
pub use primitive::{
    big_integer, boolean, double, integer, long, string, BigIntegerSchema, BooleanSchema,
    DoubleSchema, IntegerSchema, LongSchema, StringSchema,
};

use payrail_types::Document;

/// Bidirectional converter between a wire value and one typed internal value.
///
/// `read` maps a wire [`Document`] into the internal representation, failing
/// with a [`SchemaError`] on a runtime type mismatch. `write` is the inverse
/// and cannot fail: every internal value this workspace models has a wire
/// form.
///
/// The two absence hooks exist for object members: when a declared external
/// key is missing from a wire object, the member's schema decides what that
/// means via [`Schema::read_absent`], and symmetrically
/// [`Schema::writes_absent`] lets a member be omitted from wire output. Only
/// [`optional`] overrides the defaults.
pub trait Schema: Send + Sync {
    /// The internal representation this schema produces and consumes.
    type Value;

    /// Converts a wire value into the internal representation.
    fn read(&self, value: &Document) -> Result<Self::Value, SchemaError>;

    /// Converts an internal value back into wire form.
    fn write(&self, value: &Self::Value) -> Document;

    /// Called when the external key for this member is missing entirely.
    fn read_absent(&self) -> Result<Self::Value, SchemaError> {
        Err(SchemaError::missing_field())
    }

    /// Returns true if this value should be omitted from wire output.
    fn writes_absent(&self, _value: &Self::Value) -> bool {
        false
    }
}

/// A model type with a canonical schema.
///
/// Implemented by every generated model struct; the schema is a memoized
/// static, so mutually referencing models resolve through [`lazy`] without
/// any definition-order cycle.
pub trait WireModel: Default + Sized + 'static {
    /// Returns the canonical schema for this model.
    fn schema() -> &'static ObjectSchema<Self>;

    /// Converts a wire value into this model.
    fn from_document(value: &Document) -> Result<Self, SchemaError> {
        Self::schema().read(value)
    }

    /// Converts this model into wire form.
    fn to_document(&self) -> Document {
        Self::schema().write(self)
    }
}
