/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::Address;
use payrail_schema::{lazy, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Provides customer data that Payrail uses to deliver an invoice.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceRecipient {
    /// A unique ID for the recipient within the invoice.
    pub uid: Option<String>,
    /// The recipient's given (that is, first) name.
    pub given_name: Option<String>,
    /// The recipient's family (that is, last) name.
    pub family_name: Option<String>,
    /// The recipient's email address.
    pub email_address: Option<String>,
    /// The recipient's physical address.
    pub address: Option<Address>,
    /// The recipient's phone number.
    pub phone_number: Option<String>,
    /// The name of the recipient's company.
    pub company_name: Option<String>,
}

impl WireModel for InvoiceRecipient {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<InvoiceRecipient>> = LazyLock::new(|| {
            ObjectSchema::builder("InvoiceRecipient")
                .field(
                    "uid",
                    optional(string()),
                    |model: &InvoiceRecipient| &model.uid,
                    |model, value| model.uid = value,
                )
                .field(
                    "given_name",
                    optional(string()),
                    |model: &InvoiceRecipient| &model.given_name,
                    |model, value| model.given_name = value,
                )
                .field(
                    "family_name",
                    optional(string()),
                    |model: &InvoiceRecipient| &model.family_name,
                    |model, value| model.family_name = value,
                )
                .field(
                    "email_address",
                    optional(string()),
                    |model: &InvoiceRecipient| &model.email_address,
                    |model, value| model.email_address = value,
                )
                .field(
                    "address",
                    optional(lazy(Address::schema)),
                    |model: &InvoiceRecipient| &model.address,
                    |model, value| model.address = value,
                )
                .field(
                    "phone_number",
                    optional(string()),
                    |model: &InvoiceRecipient| &model.phone_number,
                    |model, value| model.phone_number = value,
                )
                .field(
                    "company_name",
                    optional(string()),
                    |model: &InvoiceRecipient| &model.company_name,
                    |model, value| model.company_name = value,
                )
                .build()
        });
        &SCHEMA
    }
}
