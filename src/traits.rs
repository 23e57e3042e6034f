//! Traits for pluggable document validation

use crate::types::*;
use crate::utils::validation::*;

/// Trait for implementing boundary validation of documents before totals are computed
pub trait DocumentValidator: Send + Sync {
    /// Validate a document; the engine computes nothing when this fails
    fn validate_document(&self, document: &TaxDocument) -> GstResult<()>;
}

/// Default validator: numeric ranges and required fields only
pub struct DefaultDocumentValidator;

impl DocumentValidator for DefaultDocumentValidator {
    fn validate_document(&self, document: &TaxDocument) -> GstResult<()> {
        validate_document_number(&document.number)?;

        for (index, item) in document.items.iter().enumerate() {
            validate_line_item(index, item)?;
        }

        for (index, charge) in document.charges.iter().enumerate() {
            validate_charge(index, charge)?;
        }

        if let Some(discount) = &document.global_discount {
            validate_discount("global discount", discount)?;
        }

        Ok(())
    }
}
