//! Configuration for the sales query engine.

use std::path::PathBuf;

use crate::algorithm::aggregation::categorical::DEFAULT_TOP_CUSTOMERS;
use crate::algorithm::aggregation::scatter::DEFAULT_SAMPLE_SIZE;
use crate::filter::{DEFAULT_PARALLEL_THRESHOLD, DateFormatConfig};

/// Configuration for loading the dataset and answering queries
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Path of the comma-separated source file
    pub data_path: PathBuf,
    /// Maximum number of scatter points
    pub scatter_sample_size: usize,
    /// Length of the top-customers ranking
    pub top_customers_limit: usize,
    /// Seed for the scatter sampler; `None` draws from OS entropy
    pub sample_seed: Option<u64>,
    /// Row count above which filtering runs in parallel
    pub parallel_threshold: usize,
    /// Date format configuration for order dates and filter bounds
    pub date_format_config: DateFormatConfig,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("sales_data_sample.csv"),
            scatter_sample_size: DEFAULT_SAMPLE_SIZE,
            top_customers_limit: DEFAULT_TOP_CUSTOMERS,
            sample_seed: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl DashboardConfig {
    /// Set the dataset path
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_path = path.into();
        self
    }

    /// Fix the scatter sampler seed
    #[must_use]
    pub const fn with_sample_seed(mut self, seed: u64) -> Self {
        self.sample_seed = Some(seed);
        self
    }

    /// Set the maximum number of scatter points
    #[must_use]
    pub const fn with_scatter_sample_size(mut self, size: usize) -> Self {
        self.scatter_sample_size = size;
        self
    }

    /// Set the length of the top-customers ranking
    #[must_use]
    pub const fn with_top_customers_limit(mut self, limit: usize) -> Self {
        self.top_customers_limit = limit;
        self
    }
}
