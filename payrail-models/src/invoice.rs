/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{
    InvoiceAcceptedPaymentMethods, InvoiceCustomField, InvoicePaymentRequest, InvoiceRecipient,
    Money,
};
use payrail_schema::{array, integer, lazy, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Stores information about an invoice.
///
/// You use the Invoices API to create and manage invoices. An invoice is
/// always backed by an order and carries a payment schedule of one or more
/// payment requests.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Invoice {
    /// The Payrail-assigned ID of the invoice.
    pub id: Option<String>,
    /// The Payrail-assigned version number, which is incremented each time
    /// an update is committed to the invoice.
    pub version: Option<i32>,
    /// The ID of the location that this invoice is associated with. If
    /// specified in a `CreateInvoice` request, the value must match the
    /// `location_id` of the associated order.
    pub location_id: Option<String>,
    /// The ID of the order for which the invoice is created. This field is
    /// required when creating an invoice, and the order must be in the
    /// `OPEN` state.
    pub order_id: Option<String>,
    /// Provides customer data that Payrail uses to deliver an invoice.
    pub primary_recipient: Option<InvoiceRecipient>,
    /// The payment schedule for the invoice, represented by one or more
    /// payment requests that define payment settings, such as amount due and
    /// due date. This field is required when creating an invoice and must
    /// contain at least one payment request.
    pub payment_requests: Option<Vec<InvoicePaymentRequest>>,
    /// Indicates how Payrail delivers the invoice to the customer.
    pub delivery_method: Option<String>,
    /// A user-friendly invoice number. The value is unique within a
    /// location. If not provided when creating an invoice, Payrail assigns
    /// a value.
    pub invoice_number: Option<String>,
    /// The title of the invoice.
    pub title: Option<String>,
    /// The description of the invoice. This is visible to the customer
    /// receiving the invoice.
    pub description: Option<String>,
    /// The timestamp when the invoice is scheduled for processing, in RFC
    /// 3339 format. If the field is not set, the invoice is processed
    /// immediately after it is published.
    pub scheduled_at: Option<String>,
    /// The URL of the hosted invoice page. Populated after the invoice is
    /// published.
    pub public_url: Option<String>,
    /// The current amount due for the invoice. In addition to the
    /// amount due on the next payment request, this includes any overdue
    /// payment amounts.
    pub next_payment_amount_money: Option<Money>,
    /// Indicates the status of an invoice.
    pub status: Option<String>,
    /// The time zone used to interpret calendar dates on the invoice, such
    /// as `due_date`. The value is set when the invoice is created and
    /// cannot be changed.
    pub timezone: Option<String>,
    /// The timestamp when the invoice was created, in RFC 3339 format.
    pub created_at: Option<String>,
    /// The timestamp when the invoice was last updated, in RFC 3339 format.
    pub updated_at: Option<String>,
    /// The payment methods that customers can use to pay an invoice on the
    /// hosted invoice page.
    pub accepted_payment_methods: Option<InvoiceAcceptedPaymentMethods>,
    /// Additional seller-defined fields to render on the invoice. Max: 2
    /// custom fields.
    pub custom_fields: Option<Vec<InvoiceCustomField>>,
    /// The ID of the subscription associated with the invoice. This field is
    /// present only on subscription billing invoices.
    pub subscription_id: Option<String>,
    /// The date of the sale or the date that the service is rendered, in
    /// `YYYY-MM-DD` format. This field can be used to specify a past or
    /// future date which is displayed on the invoice.
    pub sale_or_service_date: Option<String>,
}

impl WireModel for Invoice {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<Invoice>> = LazyLock::new(|| {
            ObjectSchema::builder("Invoice")
                .field(
                    "id",
                    optional(string()),
                    |model: &Invoice| &model.id,
                    |model, value| model.id = value,
                )
                .field(
                    "version",
                    optional(integer()),
                    |model: &Invoice| &model.version,
                    |model, value| model.version = value,
                )
                .field(
                    "location_id",
                    optional(string()),
                    |model: &Invoice| &model.location_id,
                    |model, value| model.location_id = value,
                )
                .field(
                    "order_id",
                    optional(string()),
                    |model: &Invoice| &model.order_id,
                    |model, value| model.order_id = value,
                )
                .field(
                    "primary_recipient",
                    optional(lazy(InvoiceRecipient::schema)),
                    |model: &Invoice| &model.primary_recipient,
                    |model, value| model.primary_recipient = value,
                )
                .field(
                    "payment_requests",
                    optional(array(lazy(InvoicePaymentRequest::schema))),
                    |model: &Invoice| &model.payment_requests,
                    |model, value| model.payment_requests = value,
                )
                .field(
                    "delivery_method",
                    optional(string()),
                    |model: &Invoice| &model.delivery_method,
                    |model, value| model.delivery_method = value,
                )
                .field(
                    "invoice_number",
                    optional(string()),
                    |model: &Invoice| &model.invoice_number,
                    |model, value| model.invoice_number = value,
                )
                .field(
                    "title",
                    optional(string()),
                    |model: &Invoice| &model.title,
                    |model, value| model.title = value,
                )
                .field(
                    "description",
                    optional(string()),
                    |model: &Invoice| &model.description,
                    |model, value| model.description = value,
                )
                .field(
                    "scheduled_at",
                    optional(string()),
                    |model: &Invoice| &model.scheduled_at,
                    |model, value| model.scheduled_at = value,
                )
                .field(
                    "public_url",
                    optional(string()),
                    |model: &Invoice| &model.public_url,
                    |model, value| model.public_url = value,
                )
                .field(
                    "next_payment_amount_money",
                    optional(lazy(Money::schema)),
                    |model: &Invoice| &model.next_payment_amount_money,
                    |model, value| model.next_payment_amount_money = value,
                )
                .field(
                    "status",
                    optional(string()),
                    |model: &Invoice| &model.status,
                    |model, value| model.status = value,
                )
                .field(
                    "timezone",
                    optional(string()),
                    |model: &Invoice| &model.timezone,
                    |model, value| model.timezone = value,
                )
                .field(
                    "created_at",
                    optional(string()),
                    |model: &Invoice| &model.created_at,
                    |model, value| model.created_at = value,
                )
                .field(
                    "updated_at",
                    optional(string()),
                    |model: &Invoice| &model.updated_at,
                    |model, value| model.updated_at = value,
                )
                .field(
                    "accepted_payment_methods",
                    optional(lazy(InvoiceAcceptedPaymentMethods::schema)),
                    |model: &Invoice| &model.accepted_payment_methods,
                    |model, value| model.accepted_payment_methods = value,
                )
                .field(
                    "custom_fields",
                    optional(array(lazy(InvoiceCustomField::schema))),
                    |model: &Invoice| &model.custom_fields,
                    |model, value| model.custom_fields = value,
                )
                .field(
                    "subscription_id",
                    optional(string()),
                    |model: &Invoice| &model.subscription_id,
                    |model, value| model.subscription_id = value,
                )
                .field(
                    "sale_or_service_date",
                    optional(string()),
                    |model: &Invoice| &model.sale_or_service_date,
                    |model, value| model.sale_or_service_date = value,
                )
                .build()
        });
        &SCHEMA
    }
}
