/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! JSON wire codec for the Payrail SDK.
//!
//! Turns wire JSON text into [`payrail_types::Document`] trees and back, and
//! pairs that with the schema layer through [`JsonCodec`]: `decode` parses
//! and maps in one step, `encode` is the inverse. The writer and parser are
//! hand-rolled so arbitrary-precision integer literals pass through
//! losslessly.

mod codec;
mod escape;
mod parse;
mod serialize;

pub use codec::{from_json, to_json, JsonCodec, JsonCodecSettings, JsonError};
pub use escape::{escape_string, unescape_string, EscapeError};
pub use parse::{parse_json, parse_json_with, JsonParseError};
pub use serialize::{write_document, JsonArrayWriter, JsonObjectWriter};
