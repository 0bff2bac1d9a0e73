/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Money;
use payrail_schema::{array, lazy, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Represents a gift card. You use the Gift Cards API to create and manage
/// gift cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GiftCard {
    /// The Payrail-assigned ID of the gift card.
    pub id: Option<String>,
    /// The gift card type.
    pub r#type: Option<String>,
    /// The source that generated the gift card account number (GAN).
    pub gan_source: Option<String>,
    /// The current gift card state.
    pub state: Option<String>,
    /// The current gift card balance. This balance is always greater than
    /// or equal to zero.
    pub balance_money: Option<Money>,
    /// The gift card account number (GAN). Buyers can use the GAN to make
    /// purchases or check the gift card balance.
    pub gan: Option<String>,
    /// The timestamp when the gift card was created, in RFC 3339 format.
    pub created_at: Option<String>,
    /// The IDs of the customer profiles to whom this gift card is linked.
    pub customer_ids: Option<Vec<String>>,
}

impl WireModel for GiftCard {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<GiftCard>> = LazyLock::new(|| {
            ObjectSchema::builder("GiftCard")
                .field(
                    "id",
                    optional(string()),
                    |model: &GiftCard| &model.id,
                    |model, value| model.id = value,
                )
                .field(
                    "type",
                    optional(string()),
                    |model: &GiftCard| &model.r#type,
                    |model, value| model.r#type = value,
                )
                .field(
                    "gan_source",
                    optional(string()),
                    |model: &GiftCard| &model.gan_source,
                    |model, value| model.gan_source = value,
                )
                .field(
                    "state",
                    optional(string()),
                    |model: &GiftCard| &model.state,
                    |model, value| model.state = value,
                )
                .field(
                    "balance_money",
                    optional(lazy(Money::schema)),
                    |model: &GiftCard| &model.balance_money,
                    |model, value| model.balance_money = value,
                )
                .field(
                    "gan",
                    optional(string()),
                    |model: &GiftCard| &model.gan,
                    |model, value| model.gan = value,
                )
                .field(
                    "created_at",
                    optional(string()),
                    |model: &GiftCard| &model.created_at,
                    |model, value| model.created_at = value,
                )
                .field(
                    "customer_ids",
                    optional(array(string())),
                    |model: &GiftCard| &model.customer_ids,
                    |model, value| model.customer_ids = value,
                )
                .build()
        });
        &SCHEMA
    }
}
