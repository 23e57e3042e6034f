//! GST totals examples

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use gst_invoice_core::{
    amount_in_words, calculate_line_item, classify_supply, format_inr, states, AdditionalCharge,
    Cess, Discount, DocumentKind, LineItem, SupplyContext, TaxDocument, TotalsEngine,
};
use std::str::FromStr;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 GST Invoice Core - Totals Examples\n");

    let seller = states::by_code("27").ok_or("state 27 missing from registry")?;

    // 1. Place of supply
    println!("📍 Place of Supply:");
    let contexts = [
        ("No buyer GSTIN", SupplyContext::new(seller)),
        (
            "Buyer in Jharkhand",
            SupplyContext::new(seller).with_buyer_gstin("20ABCDE1234F1ZE"),
        ),
        (
            "Shipped to Maharashtra",
            SupplyContext::new(seller)
                .with_buyer_gstin("29AAGCB7383J1Z4")
                .with_shipping_state("Maharashtra"),
        ),
    ];
    for (label, context) in contexts.iter() {
        let place = classify_supply(context);
        println!(
            "  {:<24} {} {} ({})",
            label,
            place.place_of_supply_state_code,
            place.place_of_supply_state_name,
            place.supply_type_display
        );
    }
    println!();

    // 2. Single line item
    println!("📦 Line Item (100 × ₹25 @ 5%, 2.5% discount):");
    let item = LineItem::new(
        "Bolts",
        BigDecimal::from(100),
        BigDecimal::from(25),
        BigDecimal::from(5),
    )
    .with_discount(Discount::Percentage(BigDecimal::from_str("2.5")?));
    let totals = calculate_line_item(&item).totals();
    println!("  Discount:    ₹{}", totals.discount_amount);
    println!("  Taxable:     ₹{}", totals.taxable_amount);
    println!("  GST:         ₹{}", totals.gst_amount);
    println!("  Line Total:  ₹{}", totals.line_total);
    println!();

    // 3. Full invoice
    println!("🏢 Intra-state Invoice:");
    let mut invoice = TaxDocument::new(
        DocumentKind::Invoice,
        "INV-2024-0001",
        NaiveDate::from_ymd_opt(2024, 4, 1).ok_or("invalid date")?,
        SupplyContext::new(seller),
    );
    invoice.add_item(item);
    invoice.add_item(
        LineItem::new(
            "Aerated drink",
            BigDecimal::from(48),
            BigDecimal::from(40),
            BigDecimal::from(28),
        )
        .with_cess(Cess::Percentage(BigDecimal::from(12))),
    );
    invoice.add_charge(
        AdditionalCharge::new("Freight", BigDecimal::from(1180), BigDecimal::from(18))
            .tax_inclusive(),
    );

    let result = TotalsEngine::default().compute(&invoice)?;
    for line in result.items.iter().chain(result.charges.iter()) {
        println!(
            "  {:<16} taxable {:>12}  CGST {:>10}  SGST {:>10}",
            line.name,
            format_inr(&line.totals.taxable_amount),
            format_inr(&line.tax_split.cgst()),
            format_inr(&line.tax_split.sgst())
        );
    }

    let summary = &result.summary;
    println!("  Taxable:     {}", format_inr(&summary.taxable_amount));
    println!("  CGST:        {}", format_inr(&summary.tax_split.cgst()));
    println!("  SGST:        {}", format_inr(&summary.tax_split.sgst()));
    println!("  Cess:        {}", format_inr(&summary.cess_amount));
    println!("  Round Off:   {}", format_inr(&summary.round_off));
    println!("  Grand Total: {}", format_inr(&summary.grand_total));
    println!("  In Words:    {}", summary.amount_in_words);
    println!();

    // 4. Amount in words
    println!("🔤 Amount in Words:");
    for amount in ["0", "1010", "100000", "12345678.90"] {
        let value = BigDecimal::from_str(amount)?;
        println!("  {:>12} → {}", amount, amount_in_words(&value)?);
    }

    Ok(())
}
