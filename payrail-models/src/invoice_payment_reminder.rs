/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_schema::{integer, optional, string, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// Describes a payment request reminder (automatic notification) that
/// Payrail sends to the customer. You configure a reminder relative to the
/// payment request `due_date`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoicePaymentReminder {
    /// A Payrail-assigned ID that uniquely identifies the reminder within
    /// the payment request.
    pub uid: Option<String>,
    /// The number of days before (a negative number) or after (a positive
    /// number) the payment request `due_date` when the reminder is sent. For
    /// example, -3 indicates that the reminder should be sent 3 days before
    /// the due date.
    pub relative_scheduled_days: Option<i32>,
    /// The reminder message.
    pub message: Option<String>,
    /// The status of a payment request reminder.
    pub status: Option<String>,
    /// If sent, the timestamp when the reminder was sent, in RFC 3339
    /// format.
    pub sent_at: Option<String>,
}

impl WireModel for InvoicePaymentReminder {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<InvoicePaymentReminder>> = LazyLock::new(|| {
            ObjectSchema::builder("InvoicePaymentReminder")
                .field(
                    "uid",
                    optional(string()),
                    |model: &InvoicePaymentReminder| &model.uid,
                    |model, value| model.uid = value,
                )
                .field(
                    "relative_scheduled_days",
                    optional(integer()),
                    |model: &InvoicePaymentReminder| &model.relative_scheduled_days,
                    |model, value| model.relative_scheduled_days = value,
                )
                .field(
                    "message",
                    optional(string()),
                    |model: &InvoicePaymentReminder| &model.message,
                    |model, value| model.message = value,
                )
                .field(
                    "status",
                    optional(string()),
                    |model: &InvoicePaymentReminder| &model.status,
                    |model, value| model.status = value,
                )
                .field(
                    "sent_at",
                    optional(string()),
                    |model: &InvoicePaymentReminder| &model.sent_at,
                    |model, value| model.sent_at = value,
                )
                .build()
        });
        &SCHEMA
    }
}
