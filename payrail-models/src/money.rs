/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_schema::{long, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Represents an amount of money.
///
/// `Money` fields can be signed or unsigned. Fields that do not explicitly
/// define whether they are signed or unsigned are considered unsigned and can
/// only hold positive amounts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Money {
    /// The amount of money, in the smallest denomination of the currency.
    /// For example, when `currency` is `USD`, the amount is in cents.
    pub amount: Option<i64>,
    /// The type of currency, in ISO 4217 format.
    pub currency: Option<String>,
}

impl WireModel for Money {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<Money>> = LazyLock::new(|| {
            ObjectSchema::builder("Money")
                .field(
                    "amount",
                    optional(long()),
                    |model: &Money| &model.amount,
                    |model, value| model.amount = value,
                )
                .field(
                    "currency",
                    optional(string()),
                    |model: &Money| &model.currency,
                    |model, value| model.currency = value,
                )
                .build()
        });
        &SCHEMA
    }
}
