/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_schema::{optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Represents a postal address in a country.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Address {
    /// The first line of the address.
    pub address_line_1: Option<String>,
    /// The second line of the address, if any.
    pub address_line_2: Option<String>,
    /// The city or town of the address.
    pub locality: Option<String>,
    /// A civil entity within the address's country. In the US, this is the
    /// state.
    pub administrative_district_level_1: Option<String>,
    /// The address's postal code.
    pub postal_code: Option<String>,
    /// The address's country, in ISO 3166-1-alpha-2 format.
    pub country: Option<String>,
}

impl WireModel for Address {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<Address>> = LazyLock::new(|| {
            ObjectSchema::builder("Address")
                .field(
                    "address_line_1",
                    optional(string()),
                    |model: &Address| &model.address_line_1,
                    |model, value| model.address_line_1 = value,
                )
                .field(
                    "address_line_2",
                    optional(string()),
                    |model: &Address| &model.address_line_2,
                    |model, value| model.address_line_2 = value,
                )
                .field(
                    "locality",
                    optional(string()),
                    |model: &Address| &model.locality,
                    |model, value| model.locality = value,
                )
                .field(
                    "administrative_district_level_1",
                    optional(string()),
                    |model: &Address| &model.administrative_district_level_1,
                    |model, value| model.administrative_district_level_1 = value,
                )
                .field(
                    "postal_code",
                    optional(string()),
                    |model: &Address| &model.postal_code,
                    |model, value| model.postal_code = value,
                )
                .field(
                    "country",
                    optional(string()),
                    |model: &Address| &model.country,
                    |model, value| model.country = value,
                )
                .build()
        });
        &SCHEMA
    }
}
