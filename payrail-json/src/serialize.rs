/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::escape::escape_string;
use payrail_types::{Document, Number};

/// Writes a whole wire value tree as JSON text.
pub fn write_document(json: &mut String, value: &Document) {
    match value {
        Document::Null => json.push_str("null"),
        Document::Bool(value) => json.push_str(if *value { "true" } else { "false" }),
        Document::String(value) => append_string(json, value),
        Document::Number(value) => append_number(json, value),
        Document::Array(items) => {
            let mut array = JsonArrayWriter::new(json);
            for item in items {
                array.document(item);
            }
            array.finish();
        }
        Document::Object(entries) => {
            let mut object = JsonObjectWriter::new(json);
            for (key, entry) in entries {
                object.document(key, entry);
            }
            object.finish();
        }
    }
}

pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value with the given `key`.
    pub fn null(&mut self, key: &str) -> &mut Self {
        self.key(key);
        self.json.push_str("null");
        self
    }

    /// Writes the boolean `value` with the given `key`.
    pub fn boolean(&mut self, key: &str, value: bool) -> &mut Self {
        self.key(key);
        self.json.push_str(match value {
            true => "true",
            _ => "false",
        });
        self
    }

    /// Writes a string `value` with the given `key`.
    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.key(key);
        append_string(self.json, value);
        self
    }

    /// Writes a number `value` with the given `key`.
    pub fn number(&mut self, key: &str, value: &Number) -> &mut Self {
        self.key(key);
        append_number(self.json, value);
        self
    }

    /// Writes an arbitrary wire value with the given `key`.
    pub fn document(&mut self, key: &str, value: &Document) -> &mut Self {
        self.key(key);
        write_document(self.json, value);
        self
    }

    /// Starts an array with the given `key`.
    pub fn start_array(&mut self, key: &str) -> JsonArrayWriter<'_> {
        self.key(key);
        JsonArrayWriter::new(self.json)
    }

    /// Starts an object with the given `key`.
    pub fn start_object(&mut self, key: &str) -> JsonObjectWriter<'_> {
        self.key(key);
        JsonObjectWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }

    fn key(&mut self, key: &str) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;

        self.json.push('"');
        self.json.push_str(&escape_string(key));
        self.json.push_str("\":");
    }
}

pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value to the array.
    pub fn null(&mut self) -> &mut Self {
        self.comma_delimit();
        self.json.push_str("null");
        self
    }

    /// Writes the boolean `value` to the array.
    pub fn boolean(&mut self, value: bool) -> &mut Self {
        self.comma_delimit();
        self.json.push_str(match value {
            true => "true",
            _ => "false",
        });
        self
    }

    /// Writes a string to the array.
    pub fn string(&mut self, value: &str) -> &mut Self {
        self.comma_delimit();
        append_string(self.json, value);
        self
    }

    /// Writes a number `value` to the array.
    pub fn number(&mut self, value: &Number) -> &mut Self {
        self.comma_delimit();
        append_number(self.json, value);
        self
    }

    /// Writes an arbitrary wire value to the array.
    pub fn document(&mut self, value: &Document) -> &mut Self {
        self.comma_delimit();
        write_document(self.json, value);
        self
    }

    /// Starts a nested array inside of the array.
    pub fn start_array(&mut self) -> JsonArrayWriter<'_> {
        self.comma_delimit();
        JsonArrayWriter::new(self.json)
    }

    /// Starts a nested object inside of the array.
    pub fn start_object(&mut self) -> JsonObjectWriter<'_> {
        self.comma_delimit();
        JsonObjectWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }

    fn comma_delimit(&mut self) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
    }
}

fn append_string(json: &mut String, value: &str) {
    json.push('"');
    json.push_str(&escape_string(value));
    json.push('"');
}

fn append_number(json: &mut String, value: &Number) {
    match value {
        Number::PosInt(value) => {
            // itoa::Buffer is a fixed-size stack allocation, so this is cheap
            json.push_str(itoa::Buffer::new().format(*value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(*value));
        }
        Number::Float(value) => {
            // JSON has no representation for NaN or infinity; match
            // serde_json and write null.
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                // ryu::Buffer is a fixed-size stack allocation, so this is cheap
                json.push_str(ryu::Buffer::new().format_finite(*value));
            }
        }
        Number::BigInt(value) => {
            // Already a validated integer literal; write the digits raw.
            json.push_str(value.as_ref());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{write_document, JsonArrayWriter, JsonObjectWriter};
    use crate::serialize::append_number;
    use payrail_types::{BigInteger, Document, Number};
    use proptest::proptest;
    use std::collections::HashMap;

    #[test]
    fn empty() {
        let mut output = String::new();
        JsonObjectWriter::new(&mut output).finish();
        assert_eq!("{}", &output);

        let mut output = String::new();
        JsonArrayWriter::new(&mut output).finish();
        assert_eq!("[]", &output);
    }

    #[test]
    fn object_inside_array() {
        let mut output = String::new();
        let mut array = JsonArrayWriter::new(&mut output);
        array.start_object().finish();
        array.start_object().finish();
        array.finish();
        assert_eq!("[{},{}]", &output);
    }

    #[test]
    fn object_inside_object() {
        let mut output = String::new();
        let mut obj_1 = JsonObjectWriter::new(&mut output);

        let mut obj_2 = obj_1.start_object("nested");
        obj_2.string("test", "test");
        obj_2.finish();

        obj_1.finish();
        assert_eq!(r#"{"nested":{"test":"test"}}"#, &output);
    }

    #[test]
    fn array_inside_object() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.start_array("foo").finish();
        object.start_array("ba\nr").finish();
        object.finish();
        assert_eq!(r#"{"foo":[],"ba\nr":[]}"#, &output);
    }

    #[test]
    fn object_values() {
        let mut output = String::new();
        let mut object = JsonObjectWriter::new(&mut output);
        object.boolean("true_val", true);
        object.boolean("false_val", false);
        object.string("some_string", "some\nstring\nvalue");
        object.number("some_number", &Number::Float(3.5));
        object.null("some_null");

        let mut array = object.start_array("some_mixed_array");
        array
            .string("1")
            .number(&Number::NegInt(-2))
            .boolean(true)
            .null();
        array.finish();

        object.finish();

        assert_eq!(
            r#"{"true_val":true,"false_val":false,"some_string":"some\nstring\nvalue","some_number":3.5,"some_null":null,"some_mixed_array":["1",-2,true,null]}"#,
            &output
        );
    }

    #[test]
    fn document_scalars() {
        let mut output = String::new();
        write_document(&mut output, &Document::Null);
        assert_eq!("null", &output);

        let mut output = String::new();
        write_document(&mut output, &Document::from("hi"));
        assert_eq!(r#""hi""#, &output);

        let mut output = String::new();
        write_document(&mut output, &Document::from(-12i64));
        assert_eq!("-12", &output);
    }

    #[test]
    fn document_nested() {
        let mut entries = HashMap::new();
        entries.insert(
            "items".to_string(),
            Document::Array(vec![Document::from(1u64), Document::from(2u64)]),
        );
        let mut output = String::new();
        write_document(&mut output, &Document::Object(entries));
        assert_eq!(r#"{"items":[1,2]}"#, &output);
    }

    #[test]
    fn big_int_written_raw() {
        let wide = BigInteger::from("123456789012345678901234567890".to_string());
        let mut output = String::new();
        write_document(&mut output, &Document::Number(Number::BigInt(wide)));
        assert_eq!("123456789012345678901234567890", &output);
    }

    fn format_test_number(number: Number) -> String {
        let mut formatted = String::new();
        append_number(&mut formatted, &number);
        formatted
    }

    #[test]
    fn number_formatting() {
        assert_eq!("1", format_test_number(Number::PosInt(1)));
        assert_eq!("-1", format_test_number(Number::NegInt(-1)));
        assert_eq!("0.0", format_test_number(Number::Float(0.0)));
        assert_eq!("10000000000.0", format_test_number(Number::Float(1e10)));
        assert_eq!("-1.2", format_test_number(Number::Float(-1.2)));

        // JSON doesn't support NaN, Infinity, or -Infinity, so we're matching
        // the behavior of the serde_json crate in these cases.
        assert_eq!(
            serde_json::to_string(&f64::NAN).unwrap(),
            format_test_number(Number::Float(f64::NAN))
        );
        assert_eq!(
            serde_json::to_string(&f64::INFINITY).unwrap(),
            format_test_number(Number::Float(f64::INFINITY))
        );
        assert_eq!(
            serde_json::to_string(&f64::NEG_INFINITY).unwrap(),
            format_test_number(Number::Float(f64::NEG_INFINITY))
        );
    }

    proptest! {
        #[test]
        fn matches_serde_json_pos_int_format(value: u64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::PosInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_neg_int_format(value: i64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::NegInt(value)),
            )
        }

        #[test]
        fn matches_serde_json_float_format(value: f64) {
            assert_eq!(
                serde_json::to_string(&value).unwrap(),
                format_test_number(Number::Float(value)),
            )
        }
    }
}
