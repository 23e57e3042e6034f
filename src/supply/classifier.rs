//! Place-of-supply classification
//!
//! The place of supply decides whether a document carries CGST + SGST or
//! IGST. Resolution runs through three tiers, highest first:
//!
//! 1. an explicit shipping-state override,
//! 2. the state code prefixing the buyer's GSTIN,
//! 3. the seller's own state.
//!
//! An override that does not resolve falls through to the next tier instead
//! of failing, so classification always lands on a registered state.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::supply::gstin::{self, Gstin};
use crate::supply::states::{self, GstState};
use crate::types::{GstError, GstResult, SupplyType};

/// Inputs that decide where a supply is deemed to occur
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyContext {
    /// The seller's registered state
    pub seller_state: GstState,
    /// Buyer GSTIN as captured; may be absent or malformed
    #[serde(default)]
    pub buyer_gstin: Option<String>,
    /// Explicit shipping state (code or name) chosen by the user
    #[serde(default)]
    pub shipping_state: Option<String>,
}

impl SupplyContext {
    pub fn new(seller_state: GstState) -> Self {
        Self {
            seller_state,
            buyer_gstin: None,
            shipping_state: None,
        }
    }

    /// Build a context whose seller state comes from the seller's GSTIN
    pub fn from_seller_gstin(seller_gstin: &str) -> GstResult<Self> {
        let gstin = Gstin::parse(seller_gstin)?;
        let state = gstin.state().ok_or_else(|| {
            GstError::UnknownState(format!("no state for GSTIN {}", gstin.as_str()))
        })?;
        Ok(Self::new(state))
    }

    pub fn with_buyer_gstin(mut self, gstin: impl Into<String>) -> Self {
        self.buyer_gstin = Some(gstin.into());
        self
    }

    pub fn with_shipping_state(mut self, state: impl Into<String>) -> Self {
        self.shipping_state = Some(state.into());
        self
    }
}

/// Which tier decided the place of supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaceOfSupplySource {
    ShippingOverride,
    BuyerGstin,
    SellerState,
}

/// Resolved place of supply and the resulting supply type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOfSupply {
    pub place_of_supply_state_code: String,
    pub place_of_supply_state_name: String,
    pub supply_type_display: SupplyType,
    pub source: PlaceOfSupplySource,
}

impl PlaceOfSupply {
    fn new(state: GstState, seller_state: GstState, source: PlaceOfSupplySource) -> Self {
        let supply_type_display = if state.code() == seller_state.code() {
            SupplyType::Intrastate
        } else {
            SupplyType::Interstate
        };

        Self {
            place_of_supply_state_code: state.code().to_string(),
            place_of_supply_state_name: state.name().to_string(),
            supply_type_display,
            source,
        }
    }

    pub fn supply_type(&self) -> SupplyType {
        self.supply_type_display
    }

    pub fn is_interstate(&self) -> bool {
        self.supply_type_display == SupplyType::Interstate
    }
}

/// Resolve the place of supply for a document
pub fn classify_supply(context: &SupplyContext) -> PlaceOfSupply {
    let seller = context.seller_state;

    if let Some(raw) = non_empty(context.shipping_state.as_deref()) {
        match states::resolve(raw) {
            Some(state) => {
                debug!(state = state.code(), "place of supply from shipping override");
                return PlaceOfSupply::new(state, seller, PlaceOfSupplySource::ShippingOverride);
            }
            None => warn!(shipping_state = raw, "unrecognized shipping state, falling through"),
        }
    }

    let gstin_state = non_empty(context.buyer_gstin.as_deref()).and_then(gstin::state_from_prefix);
    if let Some(state) = gstin_state {
        debug!(state = state.code(), "place of supply from buyer GSTIN");
        return PlaceOfSupply::new(state, seller, PlaceOfSupplySource::BuyerGstin);
    }

    debug!(state = seller.code(), "place of supply defaults to seller state");
    PlaceOfSupply::new(seller, seller, PlaceOfSupplySource::SellerState)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Request body for standalone place-of-supply classification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaceOfSupplyRequest {
    pub seller_state_name: Option<String>,
    pub seller_state_code: Option<String>,
    pub seller_gstin: Option<String>,
    pub buyer_gstin: Option<String>,
    pub shipping_state_name: Option<String>,
    pub shipping_state_code: Option<String>,
}

impl PlaceOfSupplyRequest {
    /// Resolve the seller state and shipping override into a [`SupplyContext`].
    ///
    /// The seller state is tried by code, then name, then GSTIN prefix and must
    /// resolve. For the override, the first of code/name that resolves wins; if
    /// neither does, the raw value is kept so classification falls through.
    pub fn into_context(self) -> GstResult<SupplyContext> {
        let seller_state = non_empty(self.seller_state_code.as_deref())
            .and_then(states::by_code)
            .or_else(|| non_empty(self.seller_state_name.as_deref()).and_then(states::by_name))
            .or_else(|| non_empty(self.seller_gstin.as_deref()).and_then(gstin::state_from_prefix))
            .ok_or_else(|| {
                GstError::UnknownState(format!(
                    "seller state could not be resolved (code {:?}, name {:?})",
                    self.seller_state_code, self.seller_state_name
                ))
            })?;

        let candidates = [
            non_empty(self.shipping_state_code.as_deref()),
            non_empty(self.shipping_state_name.as_deref()),
        ];
        let shipping_state = candidates
            .iter()
            .flatten()
            .find(|candidate| states::resolve(candidate).is_some())
            .or_else(|| candidates.iter().flatten().next())
            .map(|candidate| candidate.to_string());

        Ok(SupplyContext {
            seller_state,
            buyer_gstin: self.buyer_gstin,
            shipping_state,
        })
    }
}

/// Classify a standalone request
pub fn classify_request(request: PlaceOfSupplyRequest) -> GstResult<PlaceOfSupply> {
    let context = request.into_context()?;
    Ok(classify_supply(&context))
}
