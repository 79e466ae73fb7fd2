//! Period comparison for summary trends
//!
//! Given an explicit `[start, end]` range, the previous period is the window
//! of the same length that ends the day before `start`. Summary totals are
//! computed for both windows with identical non-date criteria and turned
//! into percentage trends.

use chrono::{Days, NaiveDate};
use log::debug;

use crate::algorithm::aggregation::summary::{SummaryTotals, summary_totals};
use crate::algorithm::aggregation::SummaryMetrics;
use crate::filter::{FilterCriteria, filter_dataset};
use crate::models::Dataset;

/// Inclusive date window immediately preceding `[start, end]` with the same
/// day span.
///
/// Returns `None` only if the window falls outside chrono's date range.
#[must_use]
pub fn previous_period(start: NaiveDate, end: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let range_days = (end - start).num_days();
    let prev_end = start.checked_sub_days(Days::new(1))?;
    let prev_start = if range_days >= 0 {
        prev_end.checked_sub_days(Days::new(range_days.unsigned_abs()))?
    } else {
        prev_end.checked_add_days(Days::new(range_days.unsigned_abs()))?
    };
    Some((prev_start, prev_end))
}

/// Criteria selecting the previous period, when `criteria` carries both
/// date bounds
#[must_use]
pub fn previous_criteria(criteria: &FilterCriteria) -> Option<FilterCriteria> {
    let (start, end) = criteria.date_range()?;
    let (prev_start, prev_end) = previous_period(start, end)?;
    Some(criteria.with_date_range(prev_start, prev_end))
}

/// Summary metrics for `criteria`, with trends against the previous period.
///
/// Without both date bounds every trend is 0.
///
/// # Arguments
/// * `dataset` - The full dataset; both periods are filtered from it
/// * `criteria` - Current period criteria. Non-date predicates carry over
///   to the previous period unchanged
/// * `parallel_threshold` - Row count above which filtering runs in parallel
///
/// # Returns
/// * `SummaryMetrics` - Rounded totals for the current period plus unrounded trends
#[must_use]
pub fn summary_metrics(
    dataset: &Dataset,
    criteria: &FilterCriteria,
    parallel_threshold: usize,
) -> SummaryMetrics {
    let current = summary_totals(&filter_dataset(dataset, criteria, parallel_threshold));

    let previous: Option<SummaryTotals> = previous_criteria(criteria).map(|prev| {
        debug!(
            "Comparing against previous period {:?}..={:?}",
            prev.start_date, prev.end_date
        );
        summary_totals(&filter_dataset(dataset, &prev, parallel_threshold))
    });

    current.into_metrics(previous.as_ref())
}
