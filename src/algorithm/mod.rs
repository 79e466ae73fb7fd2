//! Aggregation algorithms over filtered sales views
//!
//! `aggregation` holds the per-view aggregation variants, `period` the
//! previous-period comparison used by the summary metrics.

pub mod aggregation;
pub mod period;
