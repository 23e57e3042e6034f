//! Utility modules

pub mod format;
pub mod validation;
pub mod words;

pub use format::*;
pub use validation::*;
pub use words::*;
