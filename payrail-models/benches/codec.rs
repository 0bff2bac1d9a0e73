/*
 * Copyright Payrail, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use criterion::{criterion_group, criterion_main, Criterion};
use payrail_json::{from_json, to_json};
use payrail_models::{Invoice, InvoiceCustomField, InvoicePaymentRequest, Money};

fn sample_invoice() -> Invoice {
    Invoice {
        id: Some("inv:0".to_string()),
        version: Some(7),
        location_id: Some("L1".to_string()),
        order_id: Some("o1".to_string()),
        invoice_number: Some("0000042".to_string()),
        title: Some("Catering".to_string()),
        status: Some("UNPAID".to_string()),
        payment_requests: Some(
            (0..4)
                .map(|i| InvoicePaymentRequest {
                    uid: Some(format!("pr{i}")),
                    request_type: Some("INSTALLMENT".to_string()),
                    due_date: Some("2030-01-24".to_string()),
                    computed_amount_money: Some(Money {
                        amount: Some(2500),
                        currency: Some("USD".to_string()),
                    }),
                    ..Default::default()
                })
                .collect(),
        ),
        custom_fields: Some(vec![InvoiceCustomField {
            label: Some("Event".to_string()),
            placement: Some("ABOVE_LINE_ITEMS".to_string()),
            value: Some("Ref. #1234".to_string()),
        }]),
        ..Default::default()
    }
}

fn invoice_codec(c: &mut Criterion) {
    let invoice = sample_invoice();
    let encoded = to_json(&invoice);

    c.bench_function("encode invoice", |b| b.iter(|| to_json(&invoice)));
    c.bench_function("decode invoice", |b| {
        b.iter(|| from_json::<Invoice>(&encoded).unwrap())
    });
}

criterion_group!(benches, invoice_codec);
criterion_main!(benches);
