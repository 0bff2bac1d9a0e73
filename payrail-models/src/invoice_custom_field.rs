/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_schema::{optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// An additional seller-defined field to render on the invoice.
///
/// These fields are visible to sellers and buyers on the hosted invoice page
/// and in emailed or PDF copies of invoices.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceCustomField {
    /// The label or title of the custom field. This field is required for a
    /// custom field.
    pub label: Option<String>,
    /// The location of the custom field on the invoice, either above or
    /// below the line items.
    pub placement: Option<String>,
    /// The text of the custom field. If omitted, only the label is rendered.
    pub value: Option<String>,
}

impl WireModel for InvoiceCustomField {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<InvoiceCustomField>> = LazyLock::new(|| {
            ObjectSchema::builder("InvoiceCustomField")
                .field(
                    "label",
                    optional(string()),
                    |model: &InvoiceCustomField| &model.label,
                    |model, value| model.label = value,
                )
                .field(
                    "placement",
                    optional(string()),
                    |model: &InvoiceCustomField| &model.placement,
                    |model, value| model.placement = value,
                )
                .field(
                    "value",
                    optional(string()),
                    |model: &InvoiceCustomField| &model.value,
                    |model, value| model.value = value,
                )
                .build()
        });
        &SCHEMA
    }
}
