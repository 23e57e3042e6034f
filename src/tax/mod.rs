//! Tax computation: per-line GST and cess, and document totals

pub mod gst;
pub mod totals;

pub use gst::*;
pub use totals::*;
