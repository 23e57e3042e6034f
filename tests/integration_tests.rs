//! Integration tests for gst-invoice-core

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use gst_invoice_core::{
    amount_in_words, calculate_line_item, classify_request, classify_supply, states,
    utils::StrictDocumentValidator, AdditionalCharge, Cess, Discount, DocumentKind,
    EngineConfig, GstError, LineItem, PlaceOfSupplyRequest, SupplyContext, SupplyType,
    TaxDocument, TotalsEngine,
};
use std::str::FromStr;

fn dec(s: &str) -> BigDecimal {
    BigDecimal::from_str(s).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn maharashtra_seller() -> SupplyContext {
    SupplyContext::new(states::by_code("27").unwrap())
}

#[test]
fn test_line_item_with_percentage_discount() {
    let item = LineItem::new("Bolts", dec("100"), dec("25"), dec("5"))
        .with_discount(Discount::Percentage(dec("2.5")));

    let totals = calculate_line_item(&item).totals();

    assert_eq!(totals.taxable_amount, dec("2437.50"));
    assert_eq!(totals.gst_amount, dec("121.88"));
}

#[test]
fn test_buyer_gstin_makes_supply_interstate() {
    let context = maharashtra_seller().with_buyer_gstin("20ABCDE1234F1ZE");
    let place = classify_supply(&context);

    assert_eq!(place.place_of_supply_state_code, "20");
    assert_eq!(place.supply_type_display, SupplyType::Interstate);
}

#[test]
fn test_shipping_override_wins_over_gstin() {
    let context = maharashtra_seller()
        .with_buyer_gstin("29AAGCB7383J1Z4")
        .with_shipping_state("Maharashtra");
    let place = classify_supply(&context);

    assert_eq!(place.place_of_supply_state_code, "27");
    assert_eq!(place.supply_type_display, SupplyType::Intrastate);
}

#[test]
fn test_amount_in_words_examples() {
    assert_eq!(amount_in_words(&dec("0")).unwrap(), "Zero Rupees Only");
    assert_eq!(
        amount_in_words(&dec("100000")).unwrap(),
        "One Lakh Rupees Only"
    );
}

#[test]
fn test_complete_intrastate_invoice() {
    let mut invoice = TaxDocument::new(
        DocumentKind::Invoice,
        "INV-2024-0001",
        date(2024, 4, 1),
        maharashtra_seller().with_buyer_gstin("27AAPFU0939F1ZV"),
    );
    invoice.add_item(
        LineItem::new("Bolts", dec("100"), dec("25"), dec("5"))
            .with_discount(Discount::Percentage(dec("2.5")))
            .with_hsn_code("7318"),
    );
    invoice.add_item(
        LineItem::new("Support contract", dec("1"), dec("1180"), dec("18"))
            .tax_inclusive()
            .with_hsn_code("998713"),
    );
    invoice.add_charge(
        AdditionalCharge::new("Freight", dec("250"), dec("18")).with_hsn_code("9965"),
    );
    invoice.global_discount = Some(Discount::Flat(dec("87.5")));

    let engine = TotalsEngine::with_validator(
        EngineConfig::default(),
        Box::new(StrictDocumentValidator),
    );
    let result = engine.compute(&invoice).unwrap();

    assert_eq!(result.place_of_supply.supply_type(), SupplyType::Intrastate);
    assert_eq!(result.items.len(), 2);
    assert_eq!(result.charges.len(), 1);

    // 2437.50 + 1000 + 250
    assert_eq!(result.summary.subtotal, dec("3687.50"));
    assert_eq!(result.summary.discount_amount, dec("87.50"));
    assert_eq!(result.summary.taxable_amount, dec("3600.00"));
    // 121.875 + 180 + 45
    assert_eq!(result.summary.tax_amount, dec("346.88"));
    assert_eq!(result.summary.tax_split.cgst(), dec("173.44"));
    assert_eq!(result.summary.tax_split.sgst(), dec("173.44"));
    assert_eq!(result.summary.round_off, dec("0.12"));
    assert_eq!(result.summary.grand_total, dec("3947"));
    assert_eq!(
        result.summary.amount_in_words,
        "Three Thousand Nine Hundred Forty Seven Rupees Only"
    );

    let support = &result.items[1];
    assert_eq!(support.totals.taxable_amount, dec("1000"));
    assert_eq!(support.tax_split.cgst(), dec("90"));
    assert_eq!(support.tax_split.sgst(), dec("90"));
}

#[test]
fn test_interstate_quotation_with_cess() {
    let mut quotation = TaxDocument::new(
        DocumentKind::Quotation,
        "QT-17",
        date(2024, 6, 15),
        maharashtra_seller().with_shipping_state("Karnataka"),
    );
    quotation.add_item(
        LineItem::new("Aerated drink", dec("48"), dec("40"), dec("28"))
            .with_cess(Cess::Percentage(dec("12"))),
    );

    let result = TotalsEngine::default().compute(&quotation).unwrap();

    assert!(result.place_of_supply.is_interstate());
    assert_eq!(result.summary.taxable_amount, dec("1920"));
    assert_eq!(result.summary.tax_amount, dec("537.60"));
    assert_eq!(result.summary.tax_split.igst(), dec("537.60"));
    assert_eq!(result.summary.cess_amount, dec("230.40"));
    assert_eq!(result.summary.grand_total, dec("2688"));
    assert_eq!(result.summary.round_off, dec("0"));
}

#[test]
fn test_totals_are_recomputed_from_lines() {
    let mut note = TaxDocument::new(
        DocumentKind::SalesDebitNote,
        "DN-3",
        date(2024, 7, 1),
        maharashtra_seller(),
    );
    note.add_item(LineItem::new("Price revision", dec("1"), dec("500"), dec("12")));

    let engine = TotalsEngine::default();
    let first = engine.compute(&note).unwrap();
    assert_eq!(first.summary.grand_total, dec("560"));

    note.items[0].quantity = dec("2");
    let second = engine.compute(&note).unwrap();
    assert_eq!(second.summary.grand_total, dec("1120"));
    assert_eq!(engine.compute(&note).unwrap(), second);
}

#[test]
fn test_document_from_json_payload() {
    let payload = r#"{
        "kind": "deliveryChallan",
        "number": "DC-9",
        "date": "2024-05-10",
        "supply": { "sellerState": "Maharashtra", "buyerGstin": "20ABCDE1234F1ZE" },
        "items": [
            {
                "name": "Cable",
                "quantity": "3",
                "unitPrice": "199.99",
                "gstRate": "18",
                "discount": { "type": "flat", "value": "9.97" }
            }
        ],
        "charges": [
            { "name": "Packing", "amount": "50", "gstRate": "18", "cess": { "type": "fixed", "value": "2" } }
        ]
    }"#;

    let document: TaxDocument = serde_json::from_str(payload).unwrap();
    assert_eq!(document.supply.seller_state.code(), "27");

    let result = TotalsEngine::default().compute(&document).unwrap();
    // 599.97 - 9.97 = 590, + 50 charge
    assert_eq!(result.summary.taxable_amount, dec("640"));
    assert_eq!(result.summary.tax_amount, dec("115.20"));
    assert_eq!(result.summary.cess_amount, dec("2"));
    assert_eq!(result.summary.grand_total, dec("757"));

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["placeOfSupply"]["supplyTypeDisplay"], "interstate");
    assert_eq!(json["summary"]["grandTotal"], "757.00");
    assert_eq!(json["summary"]["taxSplit"]["Interstate"]["igst"], "115.20");
    assert_eq!(json["items"][0]["totals"]["lineTotal"], "696.20");
}

#[test]
fn test_unknown_discount_tag_is_rejected_at_ingress() {
    let payload = r#"{ "name": "X", "quantity": "1", "unitPrice": "1", "gstRate": "5",
                       "discount": { "type": "bogus", "value": "1" } }"#;
    assert!(serde_json::from_str::<LineItem>(payload).is_err());
}

#[test]
fn test_standalone_place_of_supply_request() {
    let request: PlaceOfSupplyRequest = serde_json::from_str(
        r#"{ "sellerStateCode": "27", "buyerGstin": "29AAGCB7383J1Z4", "shippingStateName": "" }"#,
    )
    .unwrap();
    let place = classify_request(request).unwrap();

    assert_eq!(place.place_of_supply_state_code, "29");
    assert_eq!(place.place_of_supply_state_name, "Karnataka");
    assert_eq!(place.supply_type_display, SupplyType::Interstate);
}

#[test]
fn test_validation_failures_surface_as_errors() {
    let mut invoice = TaxDocument::new(
        DocumentKind::Invoice,
        "INV-1",
        date(2024, 4, 1),
        maharashtra_seller(),
    );
    invoice.add_item(
        LineItem::new("Widget", dec("1"), dec("100"), dec("18"))
            .with_discount(Discount::Percentage(dec("120"))),
    );

    let result = TotalsEngine::default().compute(&invoice);
    assert!(matches!(result, Err(GstError::InvalidRate(_))));
}

#[test]
fn test_discount_without_value_counts_as_zero() {
    let payload = r#"{
        "kind": "invoice",
        "number": "INV-77",
        "date": "2024-08-01",
        "supply": { "sellerState": "27" },
        "items": [
            { "name": "Pens", "quantity": "10", "unitPrice": "20", "gstRate": "12",
              "discount": { "type": "percentage" } },
            { "name": "Ink", "quantity": "2", "unitPrice": "50", "gstRate": "18",
              "discount": { "type": "flat", "value": null } }
        ],
        "globalDiscount": { "type": "flat" }
    }"#;

    let document: TaxDocument = serde_json::from_str(payload).unwrap();
    assert_eq!(
        document.items[0].discount,
        Some(Discount::Percentage(dec("0")))
    );

    let result = TotalsEngine::default().compute(&document).unwrap();
    assert_eq!(result.items[0].totals.discount_amount, dec("0"));
    assert_eq!(result.summary.discount_amount, dec("0"));
    assert_eq!(result.summary.taxable_amount, dec("300"));
    // 24 + 18
    assert_eq!(result.summary.tax_amount, dec("42"));
    assert_eq!(result.summary.grand_total, dec("342"));
}

#[test]
fn test_cess_rate_above_hundred_percent() {
    let mut invoice = TaxDocument::new(
        DocumentKind::Invoice,
        "INV-160",
        date(2024, 9, 1),
        maharashtra_seller(),
    );
    invoice.add_item(
        LineItem::new("Chewing tobacco", dec("1"), dec("100"), dec("28"))
            .with_cess(Cess::Percentage(dec("160"))),
    );

    let result = TotalsEngine::default().compute(&invoice).unwrap();
    assert_eq!(result.summary.tax_amount, dec("28"));
    assert_eq!(result.summary.cess_amount, dec("160"));
    assert_eq!(result.summary.grand_total, dec("288"));
}

#[test]
fn test_numeric_seller_state_code_in_payload() {
    let payload = r#"{
        "kind": "quotation",
        "number": "QT-5",
        "date": "2024-08-01",
        "supply": { "sellerState": 27, "shippingState": "29" },
        "items": [ { "name": "Desk", "quantity": "1", "unitPrice": "5000", "gstRate": "18" } ]
    }"#;

    let document: TaxDocument = serde_json::from_str(payload).unwrap();
    assert_eq!(document.supply.seller_state.name(), "Maharashtra");

    let result = TotalsEngine::default().compute(&document).unwrap();
    assert!(result.place_of_supply.is_interstate());
    assert_eq!(result.summary.tax_split.igst(), dec("900"));
}
