//! Categorical breakdowns: sums and counts per category, and top customers

use std::collections::BTreeMap;

use crate::algorithm::aggregation::group::{EncounterGroups, round2};
use crate::algorithm::aggregation::{CountSeries, SalesSeries};
use crate::models::{FilteredView, SaleRecord};

/// Default length of the top-customers ranking
pub const DEFAULT_TOP_CUSTOMERS: usize = 10;

fn sum_by<'a, F>(view: &FilteredView<'a>, key: F) -> EncounterGroups<&'a str, f64>
where
    F: Fn(&'a SaleRecord) -> &'a str,
{
    let mut groups = EncounterGroups::new();
    for record in view {
        groups.add(key(record), record.sales);
    }
    groups
}

fn count_by<'a, F>(view: &FilteredView<'a>, key: F) -> CountSeries
where
    F: Fn(&'a SaleRecord) -> &'a str,
{
    let mut groups = EncounterGroups::new();
    for record in view {
        groups.add(key(record), 1_u64);
    }
    groups
        .into_descending()
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect()
}

fn ranked(groups: EncounterGroups<&str, f64>, limit: usize) -> SalesSeries {
    groups
        .into_descending()
        .into_iter()
        .take(limit)
        .map(|(label, total)| (label.to_string(), round2(total)))
        .collect()
}

/// Sum of sales per product line, descending; ties keep first-encounter order
#[must_use]
pub fn sales_by_product_line(view: &FilteredView<'_>) -> SalesSeries {
    ranked(sum_by(view, |r| r.product_line.as_str()), usize::MAX)
}

/// Sum of sales per country, ordered by country name
#[must_use]
pub fn sales_by_country(view: &FilteredView<'_>) -> SalesSeries {
    let mut countries: BTreeMap<&str, f64> = BTreeMap::new();
    for record in view {
        *countries.entry(record.country.as_str()).or_default() += record.sales;
    }

    countries
        .into_iter()
        .map(|(country, total)| (country.to_string(), round2(total)))
        .collect()
}

/// Number of records per order status, descending by count
#[must_use]
pub fn status_distribution(view: &FilteredView<'_>) -> CountSeries {
    count_by(view, |r| r.status.as_str())
}

/// The `limit` customers with the highest sales, descending
#[must_use]
pub fn top_customers(view: &FilteredView<'_>, limit: usize) -> SalesSeries {
    ranked(sum_by(view, |r| r.customer_name.as_str()), limit)
}

/// Number of records per deal size, descending by count
#[must_use]
pub fn deal_size_distribution(view: &FilteredView<'_>) -> CountSeries {
    count_by(view, |r| r.deal_size.as_str())
}
