//! Validation utilities

use bigdecimal::{BigDecimal, Zero};

use crate::supply::Gstin;
use crate::traits::*;
use crate::types::*;

/// Validate that an amount is not negative
pub fn validate_non_negative(field: &str, amount: &BigDecimal) -> GstResult<()> {
    if *amount < BigDecimal::zero() {
        Err(GstError::Validation(format!(
            "{} cannot be negative: {}",
            field, amount
        )))
    } else {
        Ok(())
    }
}

/// Validate a percentage rate in the range 0-100
pub fn validate_rate(field: &str, rate: &BigDecimal) -> GstResult<()> {
    if *rate < BigDecimal::zero() || *rate > BigDecimal::from(100) {
        return Err(GstError::InvalidRate(format!(
            "{} must be between 0 and 100, got {}",
            field, rate
        )));
    }
    Ok(())
}

/// Validate a discount descriptor
pub fn validate_discount(field: &str, discount: &Discount) -> GstResult<()> {
    match discount {
        Discount::Percentage(rate) => validate_rate(field, rate),
        Discount::Flat(value) => validate_non_negative(field, value),
    }
}

/// Validate a cess descriptor; percentage cess may exceed 100
pub fn validate_cess(field: &str, cess: &Cess) -> GstResult<()> {
    validate_non_negative(field, cess.value())
}

/// Validate a document number
pub fn validate_document_number(number: &str) -> GstResult<()> {
    if number.trim().is_empty() {
        return Err(GstError::Validation(
            "Document number cannot be empty".to_string(),
        ));
    }

    if number.len() > 16 {
        return Err(GstError::Validation(
            "Document number cannot exceed 16 characters".to_string(),
        ));
    }

    Ok(())
}

/// Validate the numeric fields of a line item
pub fn validate_line_item(index: usize, item: &LineItem) -> GstResult<()> {
    let label = |field: &str| format!("item {} ({}) {}", index + 1, item.name, field);

    validate_non_negative(&label("quantity"), &item.quantity)?;
    validate_non_negative(&label("unit price"), &item.unit_price)?;
    validate_rate(&label("GST rate"), &item.gst_rate)?;

    if let Some(discount) = &item.discount {
        validate_discount(&label("discount"), discount)?;
    }
    if let Some(cess) = &item.cess {
        validate_cess(&label("cess"), cess)?;
    }

    Ok(())
}

/// Validate the numeric fields of an additional charge
pub fn validate_charge(index: usize, charge: &AdditionalCharge) -> GstResult<()> {
    let label = |field: &str| format!("charge {} ({}) {}", index + 1, charge.name, field);

    validate_non_negative(&label("amount"), &charge.amount)?;
    validate_rate(&label("GST rate"), &charge.gst_rate)?;

    if let Some(discount) = &charge.discount {
        validate_discount(&label("discount"), discount)?;
    }
    if let Some(cess) = &charge.cess {
        validate_cess(&label("cess"), cess)?;
    }

    Ok(())
}

/// Validate an HSN (goods) or SAC (services) code: 4, 6 or 8 digits
pub fn validate_hsn_code(code: &str) -> GstResult<()> {
    let code = code.trim();
    if !matches!(code.len(), 4 | 6 | 8) || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(GstError::Validation(format!(
            "HSN/SAC code '{}' must be 4, 6 or 8 digits",
            code
        )));
    }
    Ok(())
}

/// Stricter validator for documents that are about to be issued
pub struct StrictDocumentValidator;

impl DocumentValidator for StrictDocumentValidator {
    fn validate_document(&self, document: &TaxDocument) -> GstResult<()> {
        // Basic validation
        DefaultDocumentValidator.validate_document(document)?;

        if document.items.is_empty() {
            return Err(GstError::Validation(format!(
                "Document {} has no items",
                document.number
            )));
        }

        for item in &document.items {
            if item.quantity.is_zero() {
                return Err(GstError::Validation(format!(
                    "Item '{}' must have a positive quantity",
                    item.name
                )));
            }
        }

        let hsn_codes = document
            .items
            .iter()
            .filter_map(|item| item.hsn_code.as_deref())
            .chain(
                document
                    .charges
                    .iter()
                    .filter_map(|charge| charge.hsn_code.as_deref()),
            );
        for code in hsn_codes {
            validate_hsn_code(code)?;
        }

        if let Some(gstin) = document
            .supply
            .buyer_gstin
            .as_deref()
            .filter(|g| !g.trim().is_empty())
        {
            Gstin::parse(gstin)?;
        }

        if let Some(due_date) = document.due_date {
            if due_date < document.date {
                return Err(GstError::Validation(format!(
                    "Due date {} is before document date {}",
                    due_date, document.date
                )));
            }
        }

        Ok(())
    }
}
