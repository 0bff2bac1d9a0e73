/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Ties the JSON layer to the schema layer.
//!
//! [`JsonCodec`] parses wire text into a [`Document`](payrail_types::Document)
//! and hands it to a model's schema, and the reverse on encode. The free
//! functions [`from_json`] and [`to_json`] cover the common case of default
//! settings.

use crate::parse::{parse_json_with, JsonParseError};
use crate::serialize::write_document;
use payrail_schema::{SchemaError, WireModel};

/// Configuration for [`JsonCodec`].
#[non_exhaustive]
#[derive(Debug, Clone)]
pub struct JsonCodecSettings {
    /// Refuse wire payloads nested deeper than this many levels.
    pub max_depth: usize,
}

impl Default for JsonCodecSettings {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Decodes and encodes wire models as JSON text.
#[derive(Debug, Clone, Default)]
pub struct JsonCodec {
    settings: JsonCodecSettings,
}

/// The error type for [`JsonCodec`] decoding.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// The payload was not well-formed JSON.
    #[error("failed to parse wire JSON")]
    Parse(#[from] JsonParseError),
    /// The payload was valid JSON but did not match the model's schema.
    #[error("failed to map wire value")]
    Mapping(#[from] SchemaError),
}

impl JsonCodec {
    pub fn new(settings: JsonCodecSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &JsonCodecSettings {
        &self.settings
    }

    /// Decodes JSON text into a typed model.
    pub fn decode<T: WireModel>(&self, input: &str) -> Result<T, JsonError> {
        tracing::trace!(model = T::schema().name(), "decoding wire JSON");
        let document = parse_json_with(input, self.settings.max_depth)?;
        T::from_document(&document).map_err(|err| {
            tracing::debug!(model = T::schema().name(), error = %err, "wire value did not match schema");
            err.into()
        })
    }

    /// Encodes a typed model as JSON text.
    pub fn encode<T: WireModel>(&self, model: &T) -> String {
        let mut output = String::new();
        write_document(&mut output, &model.to_document());
        output
    }
}

/// Decodes JSON text into a typed model with default codec settings.
pub fn from_json<T: WireModel>(input: &str) -> Result<T, JsonError> {
    JsonCodec::default().decode(input)
}

/// Encodes a typed model as JSON text with default codec settings.
pub fn to_json<T: WireModel>(model: &T) -> String {
    JsonCodec::default().encode(model)
}
