/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use payrail_schema::{boolean, optional, ObjectSchema, WireModel};
use std::sync::LazyLock;

/// The payment methods that customers can use to pay an invoice on the
/// hosted invoice page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InvoiceAcceptedPaymentMethods {
    /// Indicates whether credit card or debit card payments are accepted.
    /// The default value is `false`.
    pub card: Option<bool>,
    /// Indicates whether gift card payments are accepted. The default value
    /// is `false`.
    pub gift_card: Option<bool>,
    /// Indicates whether ACH bank transfer payments are accepted. The
    /// default value is `false`.
    pub bank_account: Option<bool>,
    /// Indicates whether buy now, pay later payments are accepted. The
    /// default value is `false`.
    pub buy_now_pay_later: Option<bool>,
}

impl WireModel for InvoiceAcceptedPaymentMethods {
    fn schema() -> &'static ObjectSchema<Self> {
        static SCHEMA: LazyLock<ObjectSchema<InvoiceAcceptedPaymentMethods>> =
            LazyLock::new(|| {
                ObjectSchema::builder("InvoiceAcceptedPaymentMethods")
                    .field(
                        "card",
                        optional(boolean()),
                        |model: &InvoiceAcceptedPaymentMethods| &model.card,
                        |model, value| model.card = value,
                    )
                    .field(
                        "payrail_gift_card",
                        optional(boolean()),
                        |model: &InvoiceAcceptedPaymentMethods| &model.gift_card,
                        |model, value| model.gift_card = value,
                    )
                    .field(
                        "bank_account",
                        optional(boolean()),
                        |model: &InvoiceAcceptedPaymentMethods| &model.bank_account,
                        |model, value| model.bank_account = value,
                    )
                    .field(
                        "buy_now_pay_later",
                        optional(boolean()),
                        |model: &InvoiceAcceptedPaymentMethods| &model.buy_now_pay_later,
                        |model, value| model.buy_now_pay_later = value,
                    )
                    .build()
            });
        &SCHEMA
    }
}
