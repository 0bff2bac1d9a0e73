/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::{InvoicePaymentReminder, Money};
use payrail_schema::{array, boolean, lazy, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Represents a payment request for an invoice.
///
/// Invoices can specify a maximum of 13 payment requests, with up to 12
/// `INSTALLMENT` request types. An invoice payment request defines the
/// amount due, the due date, and reminder settings for one expected payment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoicePaymentRequest {
    /// The Payrail-assigned ID of the payment request in an invoice.
    pub uid: Option<String>,
    /// Specifies the action for Payrail to take for processing the invoice.
    pub request_method: Option<String>,
    /// Indicates the type of the payment request.
    pub request_type: Option<String>,
    /// The due date (in the invoice's time zone) for the payment request, in
    /// `YYYY-MM-DD` format.
    pub due_date: Option<String>,
    /// The exact amount due, if the payment request specifies a fixed amount.
    pub fixed_amount_requested_money: Option<Money>,
    /// Specifies the amount for the payment request in percentage, as a
    /// string representation of a decimal number.
    pub percentage_requested: Option<String>,
    /// If set to true, the hosted invoice page offers the customer to pay a
    /// tip.
    pub tipping_enabled: Option<bool>,
    /// The payment method for an automatic payment.
    pub automatic_payment_source: Option<String>,
    /// The ID of the card on file to charge for the payment request.
    pub card_id: Option<String>,
    /// A list of one or more reminders to send for the payment request.
    pub reminders: Option<Vec<InvoicePaymentReminder>>,
    /// The amount of the payment request, computed from the order and the
    /// invoice's payment schedule.
    pub computed_amount_money: Option<Money>,
    /// The amount of money already paid toward the payment request.
    pub total_completed_amount_money: Option<Money>,
    /// If the most recent payment was a cash payment in a currency that is
    /// not the smallest unit, this field shows the rounding adjustment
    /// applied to the payment.
    pub rounding_adjustment_included_money: Option<Money>,
}

impl WireModel for InvoicePaymentRequest {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<InvoicePaymentRequest>> = LazyLock::new(|| {
            ObjectSchema::builder("InvoicePaymentRequest")
                .field(
                    "uid",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.uid,
                    |model, value| model.uid = value,
                )
                .field(
                    "request_method",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.request_method,
                    |model, value| model.request_method = value,
                )
                .field(
                    "request_type",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.request_type,
                    |model, value| model.request_type = value,
                )
                .field(
                    "due_date",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.due_date,
                    |model, value| model.due_date = value,
                )
                .field(
                    "fixed_amount_requested_money",
                    optional(lazy(Money::schema)),
                    |model: &InvoicePaymentRequest| &model.fixed_amount_requested_money,
                    |model, value| model.fixed_amount_requested_money = value,
                )
                .field(
                    "percentage_requested",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.percentage_requested,
                    |model, value| model.percentage_requested = value,
                )
                .field(
                    "tipping_enabled",
                    optional(boolean()),
                    |model: &InvoicePaymentRequest| &model.tipping_enabled,
                    |model, value| model.tipping_enabled = value,
                )
                .field(
                    "automatic_payment_source",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.automatic_payment_source,
                    |model, value| model.automatic_payment_source = value,
                )
                .field(
                    "card_id",
                    optional(string()),
                    |model: &InvoicePaymentRequest| &model.card_id,
                    |model, value| model.card_id = value,
                )
                .field(
                    "reminders",
                    optional(array(lazy(InvoicePaymentReminder::schema))),
                    |model: &InvoicePaymentRequest| &model.reminders,
                    |model, value| model.reminders = value,
                )
                .field(
                    "computed_amount_money",
                    optional(lazy(Money::schema)),
                    |model: &InvoicePaymentRequest| &model.computed_amount_money,
                    |model, value| model.computed_amount_money = value,
                )
                .field(
                    "total_completed_amount_money",
                    optional(lazy(Money::schema)),
                    |model: &InvoicePaymentRequest| &model.total_completed_amount_money,
                    |model, value| model.total_completed_amount_money = value,
                )
                .field(
                    "rounding_adjustment_included_money",
                    optional(lazy(Money::schema)),
                    |model: &InvoicePaymentRequest| &model.rounding_adjustment_included_money,
                    |model, value| model.rounding_adjustment_included_money = value,
                )
                .build()
        });
        &SCHEMA
    }
}
