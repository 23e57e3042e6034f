//! Document totals: aggregation, global discount, round-off and tax split

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use tracing::{debug, instrument};

use crate::config::EngineConfig;
use crate::supply::classify_supply;
use crate::tax::gst::{calculate_charge, calculate_line_item};
use crate::traits::{DefaultDocumentValidator, DocumentValidator};
use crate::types::*;
use crate::utils::words::amount_in_words;

/// Aggregate exact line and charge computations into document totals.
///
/// The global discount reduces the taxable base only; GST already computed at
/// line level is not restated. Each summary figure is rounded once, and the
/// grand total is built from the rounded figures so the footer adds up.
///
/// Round-off rounds half up to whole rupees, so `|round_off| <= 0.50`. A
/// pre-round total ending in exactly `.50` reports a round-off of `+0.50`.
pub fn aggregate_totals(
    items: &[LineComputation],
    charges: &[LineComputation],
    global_discount: Option<&GlobalDiscount>,
    supply_type: SupplyType,
    config: &EngineConfig,
) -> GstResult<TotalsSummary> {
    let lines = || items.iter().chain(charges.iter());

    let subtotal: BigDecimal = lines().map(|line| &line.taxable_amount).sum();
    let tax: BigDecimal = lines().map(|line| &line.gst_amount).sum();
    let cess: BigDecimal = lines().map(|line| &line.cess_amount).sum();

    let discount_amount = global_discount
        .map(|discount| discount.amount_on(&subtotal))
        .unwrap_or_else(BigDecimal::zero);
    let adjusted_taxable = &subtotal - &discount_amount;

    let taxable_amount = round_money(&adjusted_taxable);
    let tax_amount = round_money(&tax);
    let cess_amount = round_money(&cess);

    let unrounded_total = &taxable_amount + &tax_amount + &cess_amount;
    let (grand_total, round_off) = if config.round_off {
        let grand_total = unrounded_total
            .with_scale_round(0, RoundingMode::HalfUp)
            .with_scale(2);
        let round_off = &grand_total - &unrounded_total;
        (grand_total, round_off)
    } else {
        (unrounded_total, zero_money())
    };

    let tax_split = TaxSplit::apply(supply_type, &tax_amount);
    let amount_in_words = amount_in_words(&grand_total)?;

    Ok(TotalsSummary {
        subtotal: round_money(&subtotal),
        discount_amount: round_money(&discount_amount),
        taxable_amount,
        tax_amount,
        cess_amount,
        round_off,
        grand_total,
        tax_split,
        amount_in_words,
    })
}

/// Compute the full totals of a document without running a validator
pub fn compute_document_totals(
    document: &TaxDocument,
    config: &EngineConfig,
) -> GstResult<TotalsResult> {
    let place_of_supply = classify_supply(&document.supply);
    let supply_type = place_of_supply.supply_type();

    let item_calculations: Vec<LineComputation> =
        document.items.iter().map(calculate_line_item).collect();
    let charge_calculations: Vec<LineComputation> =
        document.charges.iter().map(calculate_charge).collect();

    let items = document
        .items
        .iter()
        .zip(&item_calculations)
        .map(|(item, calculation)| {
            item_totals(&item.name, item.hsn_code.as_deref(), calculation, supply_type)
        })
        .collect();
    let charges = document
        .charges
        .iter()
        .zip(&charge_calculations)
        .map(|(charge, calculation)| {
            item_totals(&charge.name, charge.hsn_code.as_deref(), calculation, supply_type)
        })
        .collect();

    let summary = aggregate_totals(
        &item_calculations,
        &charge_calculations,
        document.global_discount.as_ref(),
        supply_type,
        config,
    )?;

    debug!(
        supply_type = %supply_type,
        taxable = %summary.taxable_amount,
        tax = %summary.tax_amount,
        grand_total = %summary.grand_total,
        "document totals computed"
    );

    Ok(TotalsResult {
        place_of_supply,
        items,
        charges,
        summary,
    })
}

fn item_totals(
    name: &str,
    hsn_code: Option<&str>,
    calculation: &LineComputation,
    supply_type: SupplyType,
) -> ItemTotals {
    let totals = calculation.totals();
    let tax_split = TaxSplit::apply(supply_type, &totals.gst_amount);

    ItemTotals {
        name: name.to_string(),
        hsn_code: hsn_code.map(str::to_string),
        totals,
        tax_split,
    }
}

/// Entry point used by document create/update handlers
pub struct TotalsEngine {
    config: EngineConfig,
    validator: Box<dyn DocumentValidator>,
}

impl TotalsEngine {
    /// Create an engine with the default validator
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            validator: Box::new(DefaultDocumentValidator),
        }
    }

    /// Create an engine with a custom validator
    pub fn with_validator(config: EngineConfig, validator: Box<dyn DocumentValidator>) -> Self {
        Self { config, validator }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate a document and compute its totals
    #[instrument(skip_all, fields(kind = ?document.kind, number = %document.number))]
    pub fn compute(&self, document: &TaxDocument) -> GstResult<TotalsResult> {
        self.validator.validate_document(document)?;
        compute_document_totals(document, &self.config)
    }
}

impl Default for TotalsEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
