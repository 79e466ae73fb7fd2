//! Domain models for the sales dataset
//!
//! `SaleRecord` is the typed row, `Dataset` the immutable table loaded at
//! start-up and `FilteredView` the borrowed subsequence every query works on.

pub mod dataset;
pub mod sale;

// Re-export commonly used types
pub use dataset::{Dataset, FilteredView};
pub use sale::SaleRecord;
