/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Parses wire JSON text into [`Document`] trees.
//!
//! Integer literals too wide for `u64`/`i64` become [`Number::BigInt`] and
//! carry their exact digits, so arbitrary-precision fields survive a parse
//! and re-serialize byte-for-byte.

use crate::escape::{unescape_string, EscapeError};
use payrail_types::{BigInteger, Document, Number};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
enum ParseErrorKind {
    Custom(Cow<'static, str>),
    ExpectedLiteral(String),
    InvalidNumber,
    MaxDepthExceeded,
    UnescapeFailed(EscapeError),
    UnexpectedControlCharacter(u8),
    UnexpectedEos,
    UnexpectedToken(char, &'static str),
}

/// The error type for malformed wire JSON.
#[derive(Debug)]
#[cfg_attr(test, derive(PartialEq))]
pub struct JsonParseError {
    kind: ParseErrorKind,
    offset: Option<usize>,
}

impl JsonParseError {
    fn new(kind: ParseErrorKind, offset: Option<usize>) -> Self {
        Self { kind, offset }
    }

    /// Returns a custom error without an offset.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new(ParseErrorKind::Custom(message.into()), None)
    }

    /// Returns the byte offset at which parsing failed, if known.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }
}

impl fmt::Display for JsonParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ParseErrorKind::*;
        if let Some(offset) = self.offset {
            write!(f, "Error at offset {}: ", offset)?;
        }
        match &self.kind {
            Custom(msg) => write!(f, "failed to parse JSON: {msg}"),
            ExpectedLiteral(literal) => write!(f, "expected literal: {literal}"),
            InvalidNumber => write!(f, "invalid number"),
            MaxDepthExceeded => write!(f, "maximum nesting depth exceeded"),
            UnescapeFailed(_) => write!(f, "failed to unescape JSON string"),
            UnexpectedControlCharacter(value) => write!(
                f,
                "encountered unescaped control character in string: 0x{value:X}"
            ),
            UnexpectedEos => write!(f, "unexpected end of stream"),
            UnexpectedToken(token, expected) => {
                write!(f, "unexpected token '{token}'. Expected one of {expected}")
            }
        }
    }
}

impl std::error::Error for JsonParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::UnescapeFailed(source) => Some(source),
            _ => None,
        }
    }
}

/// Parses JSON text into a wire value tree with the default depth limit.
pub fn parse_json(input: &str) -> Result<Document, JsonParseError> {
    parse_json_with(input, DEFAULT_MAX_DEPTH)
}

/// Parses JSON text into a wire value tree, refusing input nested deeper
/// than `max_depth`.
pub fn parse_json_with(input: &str, max_depth: usize) -> Result<Document, JsonParseError> {
    let mut parser = Parser {
        input,
        bytes: input.as_bytes(),
        pos: 0,
    };
    parser.skip_whitespace();
    let value = parser.parse_value(max_depth)?;
    parser.skip_whitespace();
    if parser.pos != parser.bytes.len() {
        return Err(parser.unexpected_token("end of stream"));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn error(&self, kind: ParseErrorKind) -> JsonParseError {
        JsonParseError::new(kind, Some(self.pos))
    }

    fn unexpected_token(&self, expected: &'static str) -> JsonParseError {
        match self.peek() {
            Some(_) => {
                let token = self.input[self.pos..].chars().next().unwrap_or('?');
                self.error(ParseErrorKind::UnexpectedToken(token, expected))
            }
            None => self.error(ParseErrorKind::UnexpectedEos),
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(byte) = self.peek() {
            match byte {
                b' ' | b'\t' | b'\n' | b'\r' => self.pos += 1,
                _ => break,
            }
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Document, JsonParseError> {
        if depth == 0 {
            return Err(self.error(ParseErrorKind::MaxDepthExceeded));
        }
        match self.peek() {
            Some(b'{') => self.parse_object(depth),
            Some(b'[') => self.parse_array(depth),
            Some(b'"') => self.parse_string().map(Document::String),
            Some(b't') => self.expect_literal("true").map(|_| Document::Bool(true)),
            Some(b'f') => self.expect_literal("false").map(|_| Document::Bool(false)),
            Some(b'n') => self.expect_literal("null").map(|_| Document::Null),
            Some(b'-') | Some(b'0'..=b'9') => self.parse_number().map(Document::Number),
            Some(_) => Err(self.unexpected_token("'{', '[', '\"', number, or literal")),
            None => Err(self.error(ParseErrorKind::UnexpectedEos)),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Document, JsonParseError> {
        self.pos += 1; // past '{'
        let mut entries = HashMap::new();
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Document::Object(entries));
        }
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(self.unexpected_token("'\"'"));
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(self.unexpected_token("':'"));
            }
            self.pos += 1;
            self.skip_whitespace();
            let value = self.parse_value(depth - 1)?;
            entries.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Document::Object(entries));
                }
                _ => return Err(self.unexpected_token("',' or '}'")),
            }
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Document, JsonParseError> {
        self.pos += 1; // past '['
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Document::Array(items));
        }
        loop {
            self.skip_whitespace();
            items.push(self.parse_value(depth - 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Document::Array(items));
                }
                _ => return Err(self.unexpected_token("',' or ']'")),
            }
        }
    }

    fn parse_string(&mut self) -> Result<String, JsonParseError> {
        self.pos += 1; // past '"'
        let start = self.pos;
        loop {
            match self.peek() {
                Some(b'"') => break,
                Some(b'\\') => {
                    // Skip the escape introducer and whatever follows it;
                    // unescaping validates the escape itself.
                    self.pos += 2;
                }
                Some(byte) if byte < 0x20 => {
                    return Err(self.error(ParseErrorKind::UnexpectedControlCharacter(byte)));
                }
                Some(_) => self.pos += 1,
                None => return Err(self.error(ParseErrorKind::UnexpectedEos)),
            }
        }
        let escaped = &self.input[start..self.pos];
        self.pos += 1; // past the closing '"'
        let offset = start;
        unescape_string(escaped)
            .map(Cow::into_owned)
            .map_err(|err| JsonParseError::new(ParseErrorKind::UnescapeFailed(err), Some(offset)))
    }

    fn expect_literal(&mut self, literal: &str) -> Result<(), JsonParseError> {
        if self.input[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(())
        } else {
            Err(self.error(ParseErrorKind::ExpectedLiteral(literal.to_string())))
        }
    }

    fn parse_number(&mut self) -> Result<Number, JsonParseError> {
        let start = self.pos;
        let negative = self.peek() == Some(b'-');
        if negative {
            self.pos += 1;
        }
        let int_digits = self.consume_digits();
        if int_digits == 0 {
            return Err(self.error(ParseErrorKind::InvalidNumber));
        }
        // JSON forbids leading zeros.
        let first_digit_at = if negative { start + 1 } else { start };
        if int_digits > 1 && self.bytes[first_digit_at] == b'0' {
            return Err(JsonParseError::new(
                ParseErrorKind::InvalidNumber,
                Some(start),
            ));
        }

        let mut is_float = false;
        if self.peek() == Some(b'.') {
            is_float = true;
            self.pos += 1;
            if self.consume_digits() == 0 {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }
        if matches!(self.peek(), Some(b'e') | Some(b'E')) {
            is_float = true;
            self.pos += 1;
            if matches!(self.peek(), Some(b'+') | Some(b'-')) {
                self.pos += 1;
            }
            if self.consume_digits() == 0 {
                return Err(self.error(ParseErrorKind::InvalidNumber));
            }
        }

        let text = &self.input[start..self.pos];
        if is_float {
            return text
                .parse::<f64>()
                .map(Number::Float)
                .map_err(|_| JsonParseError::new(ParseErrorKind::InvalidNumber, Some(start)));
        }
        if negative {
            if let Ok(value) = text.parse::<i64>() {
                return Ok(Number::NegInt(value));
            }
        } else if let Ok(value) = text.parse::<u64>() {
            return Ok(Number::PosInt(value));
        }
        // Wider than any fixed-width integer; keep the literal text.
        Ok(Number::BigInt(BigInteger::from(text.to_string())))
    }

    fn consume_digits(&mut self) -> usize {
        let start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        self.pos - start
    }
}
