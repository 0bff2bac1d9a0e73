/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_schema::{integer, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// A request to list gift cards. You can optionally specify a filter to
/// retrieve a subset of gift cards.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListGiftCardsRequest {
    /// If a type is provided, gift cards of this type are returned.
    /// Otherwise, gift cards of all types are returned.
    pub r#type: Option<String>,
    /// If the state is provided, returns the gift cards in the specified
    /// state. Otherwise, returns the gift cards of all states.
    pub state: Option<String>,
    /// If a value is provided, returns only that number of results per
    /// page. The maximum number of results allowed per page is 50. The
    /// default value is 30.
    pub limit: Option<i32>,
    /// A pagination cursor returned by a previous call to this endpoint.
    /// Provide this cursor to retrieve the next set of results for the
    /// original query.
    pub cursor: Option<String>,
    /// If a value is provided, returns only the gift cards linked to the
    /// specified customer.
    pub customer_id: Option<String>,
}

impl WireModel for ListGiftCardsRequest {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<ListGiftCardsRequest>> = LazyLock::new(|| {
            ObjectSchema::builder("ListGiftCardsRequest")
                .field(
                    "type",
                    optional(string()),
                    |model: &ListGiftCardsRequest| &model.r#type,
                    |model, value| model.r#type = value,
                )
                .field(
                    "state",
                    optional(string()),
                    |model: &ListGiftCardsRequest| &model.state,
                    |model, value| model.state = value,
                )
                .field(
                    "limit",
                    optional(integer()),
                    |model: &ListGiftCardsRequest| &model.limit,
                    |model, value| model.limit = value,
                )
                .field(
                    "cursor",
                    optional(string()),
                    |model: &ListGiftCardsRequest| &model.cursor,
                    |model, value| model.cursor = value,
                )
                .field(
                    "customer_id",
                    optional(string()),
                    |model: &ListGiftCardsRequest| &model.customer_id,
                    |model, value| model.customer_id = value,
                )
                .build()
        });
        &SCHEMA
    }
}
