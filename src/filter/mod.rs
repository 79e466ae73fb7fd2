//! Filtering capabilities for the sales dataset
//!
//! This module turns request parameters into [`FilterCriteria`] and applies
//! them to a [`Dataset`](crate::models::Dataset) or any view derived from it.

pub mod core;
pub mod criteria;
pub mod date;

pub use self::core::{
    DEFAULT_PARALLEL_THRESHOLD, RecordPredicate, SalePredicate, apply, apply_with_threshold,
    filter_dataset,
};
pub use criteria::{FilterCriteria, FilterParams};
pub use date::{DateFormatConfig, parse_date_string};
