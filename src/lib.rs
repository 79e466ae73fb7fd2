//! A Rust library for answering filtered analytical queries over an
//! immutable, in-memory sales dataset.
//!
//! The dataset is loaded once ([`loader`]), filtered by [`FilterCriteria`]
//! ([`filter`]) and summarized by one of the aggregation variants
//! ([`algorithm::aggregation`]). [`QueryEngine`] ties these together behind
//! route names.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod models;
pub mod query;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::DashboardConfig;
pub use error::{Error, Result};
pub use models::{Dataset, FilteredView, SaleRecord};

// Filtering capabilities
pub use filter::{DateFormatConfig, FilterCriteria, FilterParams, apply};

// Aggregation results
pub use algorithm::aggregation::{
    CountSeries, DailyTrend, LabeledSeries, PivotResult, PivotSeries, SalesSeries, ScatterPoint,
    SummaryMetrics,
};

// Dataset loading and dispatch
pub use loader::{load_dataset, read_dataset};
pub use query::{FilterOptions, QueryEngine, QueryKind, QueryResponse};
