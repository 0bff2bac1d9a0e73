/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! API model types for the Payrail SDK.
//!
//! Each model is a plain struct of optional fields paired with a static
//! [`ObjectSchema`](payrail_schema::ObjectSchema) that maps it to and from
//! the snake_case wire representation. The schema is reachable through
//! [`WireModel::schema`](payrail_schema::WireModel::schema), so any model can
//! be converted with `Model::from_document` / `Model::to_document` or run
//! through `payrail-json` directly.

mod address;
mod gift_card;
mod invoice;
mod invoice_accepted_payment_methods;
mod invoice_custom_field;
mod invoice_payment_reminder;
mod invoice_payment_request;
mod invoice_recipient;
mod list_gift_cards_request;
mod money;
mod order_line_item_modifier;

pub use address::Address;
pub use gift_card::GiftCard;
pub use invoice::Invoice;
pub use invoice_accepted_payment_methods::InvoiceAcceptedPaymentMethods;
pub use invoice_custom_field::InvoiceCustomField;
pub use invoice_payment_reminder::InvoicePaymentReminder;
pub use invoice_payment_request::InvoicePaymentRequest;
pub use invoice_recipient::InvoiceRecipient;
pub use list_gift_cards_request::ListGiftCardsRequest;
pub use money::Money;
pub use order_line_item_modifier::OrderLineItemModifier;
