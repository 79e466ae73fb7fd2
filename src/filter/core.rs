//! Core filtering functionality for sales records
//!
//! A [`FilterCriteria`] is compiled once into a [`SalePredicate`] and then
//! evaluated against every row of a view. Views above the configured
//! threshold are filtered on the rayon pool; the output order is the input
//! order in both cases.

use rayon::prelude::*;

use crate::filter::criteria::FilterCriteria;
use crate::models::{Dataset, FilteredView, SaleRecord};

/// Row count above which [`apply`] filters in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 50_000;

/// Defines a criterion for selecting sale records
pub trait RecordPredicate: std::fmt::Debug {
    /// Determine if a record meets the criterion
    fn matches(&self, record: &SaleRecord) -> bool;
}

/// A compiled predicate over sale records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalePredicate {
    /// Order date within inclusive, optional bounds
    DateRange {
        /// Earliest date (inclusive)
        start: Option<chrono::NaiveDate>,
        /// Latest date (inclusive)
        end: Option<chrono::NaiveDate>,
    },
    /// Exact country match
    Country(String),
    /// Exact status match
    Status(String),
    /// Customer name contains the (already lowercased) needle
    CustomerContains(String),
    /// All predicates must hold
    All(Vec<SalePredicate>),
}

impl RecordPredicate for SalePredicate {
    fn matches(&self, record: &SaleRecord) -> bool {
        match self {
            Self::DateRange { start, end } => record.ordered_within(*start, *end),
            Self::Country(country) => record.country == *country,
            Self::Status(status) => record.status == *status,
            Self::CustomerContains(needle) => {
                record.customer_name.to_lowercase().contains(needle.as_str())
            }
            Self::All(predicates) => predicates.iter().all(|p| p.matches(record)),
        }
    }
}

impl From<&FilterCriteria> for SalePredicate {
    fn from(criteria: &FilterCriteria) -> Self {
        let mut predicates = Vec::new();

        if criteria.start_date.is_some() || criteria.end_date.is_some() {
            predicates.push(Self::DateRange {
                start: criteria.start_date,
                end: criteria.end_date,
            });
        }
        if let Some(country) = &criteria.country {
            predicates.push(Self::Country(country.clone()));
        }
        if let Some(status) = &criteria.status {
            predicates.push(Self::Status(status.clone()));
        }
        if let Some(customer) = &criteria.customer {
            predicates.push(Self::CustomerContains(customer.to_lowercase()));
        }

        Self::All(predicates)
    }
}

impl RecordPredicate for FilterCriteria {
    fn matches(&self, record: &SaleRecord) -> bool {
        SalePredicate::from(self).matches(record)
    }
}

/// Apply criteria to a view, returning the matching rows in their original order
#[must_use]
pub fn apply<'a>(view: &FilteredView<'a>, criteria: &FilterCriteria) -> FilteredView<'a> {
    apply_with_threshold(view, criteria, DEFAULT_PARALLEL_THRESHOLD)
}

/// [`apply`] with an explicit parallelism threshold
///
/// # Arguments
/// * `view` - Rows to filter, usually the full dataset view
/// * `criteria` - Predicates combined with logical AND
/// * `parallel_threshold` - Views longer than this are filtered with rayon
///
/// # Returns
/// * `FilteredView` - Matching rows in the order they appear in `view`
#[must_use]
pub fn apply_with_threshold<'a>(
    view: &FilteredView<'a>,
    criteria: &FilterCriteria,
    parallel_threshold: usize,
) -> FilteredView<'a> {
    if criteria.is_unconstrained() {
        return view.clone();
    }

    let predicate = SalePredicate::from(criteria);
    let rows = view.rows();

    let kept: Vec<&'a SaleRecord> = if rows.len() > parallel_threshold {
        rows.par_iter()
            .copied()
            .filter(|record| predicate.matches(record))
            .collect()
    } else {
        rows.iter()
            .copied()
            .filter(|record| predicate.matches(record))
            .collect()
    };

    FilteredView::from_rows(kept)
}

/// Filter the full dataset
#[must_use]
pub fn filter_dataset<'a>(
    dataset: &'a Dataset,
    criteria: &FilterCriteria,
    parallel_threshold: usize,
) -> FilteredView<'a> {
    apply_with_threshold(&dataset.view(), criteria, parallel_threshold)
}
