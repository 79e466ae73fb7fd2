//! Logging helpers for dataset loading
//!
//! Every load reports where it started, how many sales records it produced
//! and how many of those carry no usable order date.

use std::path::Path;
use std::time::Duration;

/// Log the start of a dataset load
pub fn log_load_start(path: &Path) {
    log::info!("Loading sales dataset from {}", path.display());
}

/// Log a finished dataset load
///
/// # Arguments
/// * `path` - Path of the loaded file
/// * `records` - Number of sales records loaded
/// * `undated` - How many of them have no parseable order date
/// * `elapsed` - Time spent reading and coercing the file
pub fn log_load_complete(path: &Path, records: usize, undated: usize, elapsed: Duration) {
    if undated > 0 {
        log::warn!(
            "{}: {undated} of {records} records have no parseable order date \
             and only match queries without a date range",
            path.display()
        );
    }
    log::info!(
        "Successfully loaded {records} records from {} in {elapsed:?}",
        path.display()
    );
}
