//! GST calculation engine for line items and additional charges
//!
//! Both calculators share one computation: discount, then the GST split
//! (forward for tax-exclusive prices, reverse for tax-inclusive ones), then
//! cess. Results stay unrounded until they are reported.

use bigdecimal::{BigDecimal, Zero};

use crate::types::{AdditionalCharge, Cess, Discount, LineComputation, LineItem};

/// Compute taxable amount, GST and cess for one line item
pub fn calculate_line_item(item: &LineItem) -> LineComputation {
    if item.quantity.is_zero() {
        return LineComputation::zero();
    }

    let gross = &item.quantity * &item.unit_price;
    compute(
        gross,
        item.discount.as_ref(),
        &item.gst_rate,
        item.tax_inclusive,
        item.cess.as_ref(),
        &item.quantity,
    )
}

/// Compute taxable amount, GST and cess for an additional charge.
///
/// The charge amount plays the role of the gross amount and fixed cess is a
/// flat add-on.
pub fn calculate_charge(charge: &AdditionalCharge) -> LineComputation {
    compute(
        charge.amount.clone(),
        charge.discount.as_ref(),
        &charge.gst_rate,
        charge.tax_inclusive,
        charge.cess.as_ref(),
        &BigDecimal::from(1),
    )
}

/// Split a net amount into `(taxable, gst)` at the given rate.
///
/// Tax-inclusive amounts are reverse calculated: taxable = net × 100 / (100 + rate).
pub fn split_tax(
    net: &BigDecimal,
    gst_rate: &BigDecimal,
    tax_inclusive: bool,
) -> (BigDecimal, BigDecimal) {
    if gst_rate.is_zero() {
        return (net.clone(), BigDecimal::zero());
    }

    if tax_inclusive {
        let divisor = BigDecimal::from(100) + gst_rate;
        let taxable = (net * BigDecimal::from(100)) / divisor;
        let gst = net - &taxable;
        (taxable, gst)
    } else {
        let gst = (net * gst_rate) / BigDecimal::from(100);
        (net.clone(), gst)
    }
}

fn compute(
    gross: BigDecimal,
    discount: Option<&Discount>,
    gst_rate: &BigDecimal,
    tax_inclusive: bool,
    cess: Option<&Cess>,
    cess_units: &BigDecimal,
) -> LineComputation {
    let discount_amount = discount
        .map(|d| d.amount_on(&gross))
        .unwrap_or_else(BigDecimal::zero);
    let net = &gross - &discount_amount;

    let (taxable_amount, gst_amount) = split_tax(&net, gst_rate, tax_inclusive);

    let cess_amount = match cess {
        Some(Cess::Percentage(rate)) => (&taxable_amount * rate) / BigDecimal::from(100),
        Some(Cess::Fixed(value)) => value * cess_units,
        None => BigDecimal::zero(),
    };

    LineComputation {
        discount_amount,
        taxable_amount,
        gst_amount,
        cess_amount,
    }
}
