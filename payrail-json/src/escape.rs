/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt;

/// Escapes a string for embedding in a JSON string value.
pub fn escape_string(value: &str) -> Cow<'_, str> {
    let bytes = value.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        match byte {
            0..=0x1F | b'"' | b'\\' => {
                return Cow::Owned(escape_string_inner(&bytes[0..index], &bytes[index..]))
            }
            _ => {}
        }
    }
    Cow::Borrowed(value)
}

fn escape_string_inner(start: &[u8], rest: &[u8]) -> String {
    let mut escaped = start.to_vec();
    for byte in rest {
        match byte {
            b'"' => escaped.extend("\\\"".bytes()),
            b'\\' => escaped.extend("\\\\".bytes()),
            0x08 => escaped.extend("\\b".bytes()),
            0x0C => escaped.extend("\\f".bytes()),
            b'\n' => escaped.extend("\\n".bytes()),
            b'\r' => escaped.extend("\\r".bytes()),
            b'\t' => escaped.extend("\\t".bytes()),
            0..=0x1F => escaped.extend(format!("\\u{:04x}", byte).bytes()),
            _ => escaped.push(*byte),
        }
    }
    // Our input was originally valid UTF-8, and we didn't do anything to invalidate it
    debug_assert!(String::from_utf8(escaped.clone()).is_ok());
    unsafe { String::from_utf8_unchecked(escaped) }
}

/// The error type for failed unescaping.
#[derive(Debug, PartialEq, Eq)]
pub enum EscapeError {
    /// A high surrogate escape wasn't followed by its low half.
    ExpectedSurrogatePair(String),
    /// An unrecognized character followed a backslash.
    InvalidEscapeCharacter(char),
    /// The surrogate halves don't combine into a code point.
    InvalidSurrogatePair(u16, u16),
    /// A `\u` escape didn't name a valid code point.
    InvalidUnicodeEscape(String),
    /// Unescaping produced invalid UTF-8.
    InvalidUtf8,
    /// The input ended in the middle of an escape.
    UnexpectedEndOfString,
}

impl fmt::Display for EscapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use EscapeError::*;
        match self {
            ExpectedSurrogatePair(high) => write!(
                f,
                "expected a UTF-16 surrogate pair, but only found the high half: {high}"
            ),
            InvalidEscapeCharacter(chr) => write!(f, "invalid JSON escape: \\{chr}"),
            InvalidSurrogatePair(high, low) => {
                write!(f, "invalid UTF-16 surrogate pair: {high:#06x}, {low:#06x}")
            }
            InvalidUnicodeEscape(escape) => write!(f, "invalid unicode escape: \\u{escape}"),
            InvalidUtf8 => write!(f, "unescaping produced invalid UTF-8"),
            UnexpectedEndOfString => write!(f, "unexpected end of string"),
        }
    }
}

impl std::error::Error for EscapeError {}

/// Unescapes a JSON-escaped string.
/// If the string doesn't need unescaping, it will be returned directly.
pub fn unescape_string(value: &str) -> Result<Cow<'_, str>, EscapeError> {
    let bytes = value.as_bytes();
    for (index, byte) in bytes.iter().enumerate() {
        if *byte == b'\\' {
            return unescape_string_inner(&bytes[0..index], &bytes[index..]).map(Cow::Owned);
        }
    }
    Ok(Cow::Borrowed(value))
}

fn unescape_string_inner(start: &[u8], rest: &[u8]) -> Result<String, EscapeError> {
    let mut unescaped = start.to_vec();
    let mut index = 0;
    while index < rest.len() {
        let byte = rest[index];
        if byte != b'\\' {
            unescaped.push(byte);
            index += 1;
            continue;
        }
        index += 1;
        let Some(&escape) = rest.get(index) else {
            return Err(EscapeError::UnexpectedEndOfString);
        };
        index += 1;
        match escape {
            b'"' => unescaped.push(b'"'),
            b'\\' => unescaped.push(b'\\'),
            b'/' => unescaped.push(b'/'),
            b'b' => unescaped.push(0x08),
            b'f' => unescaped.push(0x0C),
            b'n' => unescaped.push(b'\n'),
            b'r' => unescaped.push(b'\r'),
            b't' => unescaped.push(b'\t'),
            b'u' => {
                let high = read_hex_escape(&rest[index..])?;
                index += 4;
                let codepoint = if (0xD800..=0xDBFF).contains(&high) {
                    if rest.get(index) != Some(&b'\\') || rest.get(index + 1) != Some(&b'u') {
                        return Err(EscapeError::ExpectedSurrogatePair(format!("{high:#06x}")));
                    }
                    let low = read_hex_escape(&rest[index + 2..])?;
                    index += 6;
                    if !(0xDC00..=0xDFFF).contains(&low) {
                        return Err(EscapeError::InvalidSurrogatePair(high, low));
                    }
                    0x10000 + ((high as u32 - 0xD800) << 10) + (low as u32 - 0xDC00)
                } else if (0xDC00..=0xDFFF).contains(&high) {
                    return Err(EscapeError::InvalidUnicodeEscape(format!("{high:04x}")));
                } else {
                    high as u32
                };
                let chr = char::from_u32(codepoint)
                    .ok_or_else(|| EscapeError::InvalidUnicodeEscape(format!("{codepoint:x}")))?;
                let mut buffer = [0u8; 4];
                unescaped.extend_from_slice(chr.encode_utf8(&mut buffer).as_bytes());
            }
            chr => return Err(EscapeError::InvalidEscapeCharacter(chr as char)),
        }
    }
    String::from_utf8(unescaped).map_err(|_| EscapeError::InvalidUtf8)
}

fn read_hex_escape(slice: &[u8]) -> Result<u16, EscapeError> {
    if slice.len() < 4 {
        return Err(EscapeError::UnexpectedEndOfString);
    }
    // The four bytes are hex digits in any valid escape, so this slice is ASCII.
    let digits = std::str::from_utf8(&slice[..4])
        .map_err(|_| EscapeError::InvalidUnicodeEscape("non-ASCII".to_string()))?;
    u16::from_str_radix(digits, 16)
        .map_err(|_| EscapeError::InvalidUnicodeEscape(digits.to_string()))
}
