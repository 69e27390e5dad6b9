//! Per-patient scoring: field parsing, risk classification, data quality.
//!
//! Everything here is pure and total. Malformed input never aborts a run;
//! it degrades to a `None` component (zero risk contribution) and, where
//! the field was actually present, a data-quality flag.

pub mod parse;
pub mod quality;
pub mod risk;

pub use parse::*;
pub use quality::*;
pub use risk::*;
