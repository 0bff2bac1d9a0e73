/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Money;
use payrail_schema::{big_integer, lazy, map, optional, string, ObjectSchema, WireModel};
use payrail_types::BigInteger;
use std::collections::HashMap;
use std::sync::LazyLock;

/// A catalog modifier applied to a line item in an order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderLineItemModifier {
    /// A unique ID that identifies the modifier only within this order.
    pub uid: Option<String>,
    /// The catalog object ID referencing the catalog modifier.
    pub catalog_object_id: Option<String>,
    /// The version of the catalog object that this modifier references.
    /// Catalog versions exceed the range of any fixed-width integer, so the
    /// value is carried as an arbitrary-precision integer.
    pub catalog_version: Option<BigInteger>,
    /// The name of the item modifier.
    pub name: Option<String>,
    /// The quantity of the line item modifier, as a string representation
    /// of a decimal number.
    pub quantity: Option<String>,
    /// The base price for the modifier.
    pub base_price_money: Option<Money>,
    /// The total price of the item modifier for its line item. This is the
    /// modifier's `base_price_money` multiplied by the line item's quantity.
    pub total_price_money: Option<Money>,
    /// Application-defined data attached to this modifier. Keys and values
    /// are seller-defined strings.
    pub metadata: Option<HashMap<String, String>>,
}

impl WireModel for OrderLineItemModifier {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<OrderLineItemModifier>> = LazyLock::new(|| {
            ObjectSchema::builder("OrderLineItemModifier")
                .field(
                    "uid",
                    optional(string()),
                    |model: &OrderLineItemModifier| &model.uid,
                    |model, value| model.uid = value,
                )
                .field(
                    "catalog_object_id",
                    optional(string()),
                    |model: &OrderLineItemModifier| &model.catalog_object_id,
                    |model, value| model.catalog_object_id = value,
                )
                .field(
                    "catalog_version",
                    optional(big_integer()),
                    |model: &OrderLineItemModifier| &model.catalog_version,
                    |model, value| model.catalog_version = value,
                )
                .field(
                    "name",
                    optional(string()),
                    |model: &OrderLineItemModifier| &model.name,
                    |model, value| model.name = value,
                )
                .field(
                    "quantity",
                    optional(string()),
                    |model: &OrderLineItemModifier| &model.quantity,
                    |model, value| model.quantity = value,
                )
                .field(
                    "base_price_money",
                    optional(lazy(Money::schema)),
                    |model: &OrderLineItemModifier| &model.base_price_money,
                    |model, value| model.base_price_money = value,
                )
                .field(
                    "total_price_money",
                    optional(lazy(Money::schema)),
                    |model: &OrderLineItemModifier| &model.total_price_money,
                    |model, value| model.total_price_money = value,
                )
                .field(
                    "metadata",
                    optional(map(string())),
                    |model: &OrderLineItemModifier| &model.metadata,
                    |model, value| model.metadata = value,
                )
                .build()
        });
        &SCHEMA
    }
}
