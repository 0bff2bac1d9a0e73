/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Shared value types for the Payrail SDK.
//!
//! These are the protocol-agnostic building blocks the wire-mapping layer is
//! written against: [`Document`] as the untyped wire value tree, [`Number`]
//! with JSON semantics, and [`BigInteger`] for fields whose wire encoding is
//! wider than any fixed-width integer.

mod big_integer;
mod document;
mod number;

pub use big_integer::BigInteger;
pub use document::Document;
pub use number::{Number, TryFromNumberError};
