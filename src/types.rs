//! Core types and data structures for GST document computation

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::supply::{PlaceOfSupply, SupplyContext};

/// Round a monetary value to two decimal places for reporting.
///
/// Ties round away from zero, so `121.875` reports as `121.88`.
pub fn round_money(value: &BigDecimal) -> BigDecimal {
    value.with_scale_round(2, RoundingMode::HalfUp)
}

/// A reported zero, carrying the two-decimal scale of every other money field
pub(crate) fn zero_money() -> BigDecimal {
    BigDecimal::zero().with_scale(2)
}

/// Discount descriptor for a line, a charge, or the whole document.
///
/// A missing or `null` value deserializes as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    from = "TaggedDiscount"
)]
pub enum Discount {
    /// Percentage of the base amount (0-100)
    Percentage(BigDecimal),
    /// Flat amount taken off the base
    Flat(BigDecimal),
}

impl Discount {
    /// Discount amount against `base`, never exceeding the base itself
    pub fn amount_on(&self, base: &BigDecimal) -> BigDecimal {
        let amount = match self {
            Discount::Percentage(rate) => base * rate / BigDecimal::from(100),
            Discount::Flat(value) => value.clone(),
        };
        amount.min(base.clone())
    }

    /// The raw descriptor value
    pub fn value(&self) -> &BigDecimal {
        match self {
            Discount::Percentage(value) | Discount::Flat(value) => value,
        }
    }
}

/// Invoice-level discount applied to the combined taxable subtotal
pub type GlobalDiscount = Discount;

/// Cess descriptor; cess is levied on top of GST and reported separately.
///
/// Percentage cess has no upper bound. A missing or `null` value deserializes as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    content = "value",
    rename_all = "camelCase",
    from = "TaggedCess"
)]
pub enum Cess {
    /// Percentage of the taxable amount
    Percentage(BigDecimal),
    /// Fixed amount per unit (flat add-on for charges)
    Fixed(BigDecimal),
}

impl Cess {
    /// The raw descriptor value
    pub fn value(&self) -> &BigDecimal {
        match self {
            Cess::Percentage(value) | Cess::Fixed(value) => value,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum DiscountKind {
    Percentage,
    Flat,
}

/// Wire form of [`Discount`] with an optional value
#[derive(Deserialize)]
struct TaggedDiscount {
    #[serde(rename = "type")]
    kind: DiscountKind,
    #[serde(default)]
    value: Option<BigDecimal>,
}

impl From<TaggedDiscount> for Discount {
    fn from(tagged: TaggedDiscount) -> Self {
        let value = tagged.value.unwrap_or_else(BigDecimal::zero);
        match tagged.kind {
            DiscountKind::Percentage => Discount::Percentage(value),
            DiscountKind::Flat => Discount::Flat(value),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
enum CessKind {
    Percentage,
    Fixed,
}

/// Wire form of [`Cess`] with an optional value
#[derive(Deserialize)]
struct TaggedCess {
    #[serde(rename = "type")]
    kind: CessKind,
    #[serde(default)]
    value: Option<BigDecimal>,
}

impl From<TaggedCess> for Cess {
    fn from(tagged: TaggedCess) -> Self {
        let value = tagged.value.unwrap_or_else(BigDecimal::zero);
        match tagged.kind {
            CessKind::Percentage => Cess::Percentage(value),
            CessKind::Fixed => Cess::Fixed(value),
        }
    }
}

/// A priced line on a tax document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item name or description
    pub name: String,
    /// HSN/SAC classification code
    #[serde(default)]
    pub hsn_code: Option<String>,
    pub quantity: BigDecimal,
    pub unit_price: BigDecimal,
    #[serde(default)]
    pub discount: Option<Discount>,
    /// GST rate percentage (e.g. 18 for 18%)
    pub gst_rate: BigDecimal,
    /// Whether `unit_price` already contains GST
    #[serde(default)]
    pub tax_inclusive: bool,
    #[serde(default)]
    pub cess: Option<Cess>,
}

impl LineItem {
    /// Create a tax-exclusive line with no discount or cess
    pub fn new(
        name: impl Into<String>,
        quantity: BigDecimal,
        unit_price: BigDecimal,
        gst_rate: BigDecimal,
    ) -> Self {
        Self {
            name: name.into(),
            hsn_code: None,
            quantity,
            unit_price,
            discount: None,
            gst_rate,
            tax_inclusive: false,
            cess: None,
        }
    }

    pub fn with_discount(mut self, discount: Discount) -> Self {
        self.discount = Some(discount);
        self
    }

    pub fn with_cess(mut self, cess: Cess) -> Self {
        self.cess = Some(cess);
        self
    }

    pub fn with_hsn_code(mut self, hsn_code: impl Into<String>) -> Self {
        self.hsn_code = Some(hsn_code.into());
        self
    }

    /// Mark the unit price as already containing GST
    pub fn tax_inclusive(mut self) -> Self {
        self.tax_inclusive = true;
        self
    }
}

/// A non-item charge (freight, packing, installation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalCharge {
    pub name: String,
    pub amount: BigDecimal,
    pub gst_rate: BigDecimal,
    #[serde(default)]
    pub tax_inclusive: bool,
    #[serde(default)]
    pub hsn_code: Option<String>,
    #[serde(default)]
    pub discount: Option<Discount>,
    #[serde(default)]
    pub cess: Option<Cess>,
}

impl AdditionalCharge {
    /// Create a tax-exclusive charge
    pub fn new(name: impl Into<String>, amount: BigDecimal, gst_rate: BigDecimal) -> Self {
        Self {
            name: name.into(),
            amount,
            gst_rate,
            tax_inclusive: false,
            hsn_code: None,
            discount: None,
            cess: None,
        }
    }

    pub fn with_cess(mut self, cess: Cess) -> Self {
        self.cess = Some(cess);
        self
    }

    pub fn with_hsn_code(mut self, hsn_code: impl Into<String>) -> Self {
        self.hsn_code = Some(hsn_code.into());
        self
    }

    pub fn tax_inclusive(mut self) -> Self {
        self.tax_inclusive = true;
        self
    }
}

/// Exact (unrounded) amounts computed for one line or charge.
///
/// These feed the aggregator directly; rounding happens only in [`LineComputation::totals`]
/// and in the document summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComputation {
    pub discount_amount: BigDecimal,
    pub taxable_amount: BigDecimal,
    pub gst_amount: BigDecimal,
    pub cess_amount: BigDecimal,
}

impl LineComputation {
    pub fn zero() -> Self {
        Self {
            discount_amount: BigDecimal::zero(),
            taxable_amount: BigDecimal::zero(),
            gst_amount: BigDecimal::zero(),
            cess_amount: BigDecimal::zero(),
        }
    }

    /// Reported figures; the line total is the sum of the reported parts
    pub fn totals(&self) -> LineTotals {
        let taxable_amount = round_money(&self.taxable_amount);
        let gst_amount = round_money(&self.gst_amount);
        let cess_amount = round_money(&self.cess_amount);
        let line_total = &taxable_amount + &gst_amount + &cess_amount;

        LineTotals {
            discount_amount: round_money(&self.discount_amount),
            taxable_amount,
            gst_amount,
            cess_amount,
            line_total,
        }
    }
}

/// Reported per-line figures, rounded to two decimals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineTotals {
    pub discount_amount: BigDecimal,
    pub taxable_amount: BigDecimal,
    pub gst_amount: BigDecimal,
    pub cess_amount: BigDecimal,
    pub line_total: BigDecimal,
}

/// Whether a supply stays within one state or crosses state lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyType {
    /// Place of supply is the seller's own state: CGST + SGST
    Intrastate,
    /// Place of supply is another state: IGST
    Interstate,
}

impl SupplyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyType::Intrastate => "intrastate",
            SupplyType::Interstate => "interstate",
        }
    }
}

impl fmt::Display for SupplyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a tax amount is reported: CGST + SGST halves, or IGST in full.
///
/// When the tax has an odd number of paise the halves differ by 0.01, with
/// CGST carrying the extra paisa (60.94 / 60.93 for 121.87). CGST + SGST always
/// equals the reported tax amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxSplit {
    Intrastate { cgst: BigDecimal, sgst: BigDecimal },
    Interstate { igst: BigDecimal },
}

impl TaxSplit {
    /// Split a reported tax amount according to the supply type.
    ///
    /// CGST takes the rounded half and SGST the remainder, so the two always
    /// add back to `tax_amount` exactly.
    pub fn apply(supply_type: SupplyType, tax_amount: &BigDecimal) -> Self {
        match supply_type {
            SupplyType::Intrastate => {
                let cgst = round_money(&(tax_amount / BigDecimal::from(2)));
                let sgst = tax_amount - &cgst;
                TaxSplit::Intrastate { cgst, sgst }
            }
            SupplyType::Interstate => TaxSplit::Interstate {
                igst: tax_amount.clone(),
            },
        }
    }

    pub fn supply_type(&self) -> SupplyType {
        match self {
            TaxSplit::Intrastate { .. } => SupplyType::Intrastate,
            TaxSplit::Interstate { .. } => SupplyType::Interstate,
        }
    }

    /// Total tax represented by this split
    pub fn total(&self) -> BigDecimal {
        match self {
            TaxSplit::Intrastate { cgst, sgst } => cgst + sgst,
            TaxSplit::Interstate { igst } => igst.clone(),
        }
    }

    pub fn cgst(&self) -> BigDecimal {
        match self {
            TaxSplit::Intrastate { cgst, .. } => cgst.clone(),
            TaxSplit::Interstate { .. } => zero_money(),
        }
    }

    pub fn sgst(&self) -> BigDecimal {
        match self {
            TaxSplit::Intrastate { sgst, .. } => sgst.clone(),
            TaxSplit::Interstate { .. } => zero_money(),
        }
    }

    pub fn igst(&self) -> BigDecimal {
        match self {
            TaxSplit::Intrastate { .. } => zero_money(),
            TaxSplit::Interstate { igst } => igst.clone(),
        }
    }
}

/// Reported figures for one item or charge, with its share of the tax split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTotals {
    pub name: String,
    pub hsn_code: Option<String>,
    pub totals: LineTotals,
    pub tax_split: TaxSplit,
}

/// Document-level totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsSummary {
    /// Taxable amount of all items and charges before the global discount
    pub subtotal: BigDecimal,
    /// Global discount taken off the subtotal
    pub discount_amount: BigDecimal,
    pub taxable_amount: BigDecimal,
    pub tax_amount: BigDecimal,
    pub cess_amount: BigDecimal,
    pub round_off: BigDecimal,
    pub grand_total: BigDecimal,
    pub tax_split: TaxSplit,
    pub amount_in_words: String,
}

/// Everything derived from a document's lines; recomputed on every change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsResult {
    pub place_of_supply: PlaceOfSupply,
    pub items: Vec<ItemTotals>,
    pub charges: Vec<ItemTotals>,
    pub summary: TotalsSummary,
}

/// Kinds of documents whose totals go through the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentKind {
    Invoice,
    Quotation,
    DeliveryChallan,
    SalesDebitNote,
}

/// A validated document payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxDocument {
    pub kind: DocumentKind,
    /// Document number (invoice number, quotation number, ...)
    pub number: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub supply: SupplyContext,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub charges: Vec<AdditionalCharge>,
    #[serde(default)]
    pub global_discount: Option<GlobalDiscount>,
}

impl TaxDocument {
    /// Create an empty document
    pub fn new(
        kind: DocumentKind,
        number: impl Into<String>,
        date: NaiveDate,
        supply: SupplyContext,
    ) -> Self {
        Self {
            kind,
            number: number.into(),
            date,
            due_date: None,
            supply,
            items: Vec::new(),
            charges: Vec::new(),
            global_discount: None,
        }
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn add_charge(&mut self, charge: AdditionalCharge) {
        self.charges.push(charge);
    }
}

/// Errors that can occur in the GST engine
#[derive(Debug, thiserror::Error)]
pub enum GstError {
    #[error("Invalid GST rate: {0}")]
    InvalidRate(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unknown state: {0}")]
    UnknownState(String),
    #[error("Invalid GSTIN: {0}")]
    InvalidGstin(String),
    #[error("Negative amount: {0}")]
    NegativeAmount(String),
    #[error("Calculation error: {0}")]
    Calculation(String),
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for GST engine operations
pub type GstResult<T> = Result<T, GstError>;
