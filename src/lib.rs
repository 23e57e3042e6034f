//! # GST Invoice Core
//!
//! Tax computation and place-of-supply classification for Indian GST
//! documents (invoices, quotations, delivery challans, debit notes).
//!
//! ## Features
//!
//! - **Line calculations**: discounts, tax-inclusive and tax-exclusive pricing, cess
//! - **Place of supply**: shipping override, buyer GSTIN, seller fallback
//! - **Document totals**: global discount, round-off, CGST/SGST or IGST split
//! - **Amount in words**: Indian numbering system (lakh, crore)
//! - **Validation**: pluggable document validators and GSTIN verification
//!
//! ## Quick Start
//!
//! ```rust
//! use gst_invoice_core::{
//!     states, DocumentKind, LineItem, SupplyContext, SupplyType, TaxDocument, TotalsEngine,
//! };
//! use bigdecimal::BigDecimal;
//! use chrono::NaiveDate;
//!
//! let seller = states::by_code("27").unwrap();
//! let supply = SupplyContext::new(seller).with_buyer_gstin("20ABCDE1234F1ZE");
//! let mut invoice = TaxDocument::new(
//!     DocumentKind::Invoice,
//!     "INV-001",
//!     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
//!     supply,
//! );
//! invoice.add_item(LineItem::new(
//!     "Consulting",
//!     BigDecimal::from(1),
//!     BigDecimal::from(10000),
//!     BigDecimal::from(18),
//! ));
//!
//! let totals = TotalsEngine::default().compute(&invoice).unwrap();
//! assert_eq!(totals.place_of_supply.supply_type(), SupplyType::Interstate);
//! assert_eq!(totals.summary.grand_total, BigDecimal::from(11800));
//! ```

pub mod config;
pub mod supply;
pub mod tax;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use crate::config::EngineConfig;
pub use supply::states;
pub use supply::*;
pub use tax::*;
pub use traits::*;
pub use types::*;
pub use utils::format::{format_inr, format_rate};
pub use utils::words::amount_in_words;
