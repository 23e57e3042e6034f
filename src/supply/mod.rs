//! Place-of-supply resolution: state registry, GSTIN handling and classification

pub mod classifier;
pub mod gstin;
pub mod states;

pub use classifier::*;
pub use gstin::Gstin;
pub use states::GstState;
