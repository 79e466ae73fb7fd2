//! Time-based aggregations: monthly sums, daily trend and the monthly pivot

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::algorithm::aggregation::group::{period_label, round2};
use crate::algorithm::aggregation::{DailyTrend, PivotResult, PivotSeries, SalesSeries};
use crate::models::FilteredView;

/// Sum of sales per (year, month), ascending; months without records are omitted
#[must_use]
pub fn sales_by_month(view: &FilteredView<'_>) -> SalesSeries {
    let mut months: BTreeMap<(i32, u32), f64> = BTreeMap::new();
    for record in view {
        *months.entry(record.period()).or_default() += record.sales;
    }

    months
        .into_iter()
        .map(|(period, total)| (period_label(period), round2(total)))
        .collect()
}

/// Sum of sales per calendar day, ascending. Records without a date are skipped.
#[must_use]
pub fn sales_trend(view: &FilteredView<'_>) -> DailyTrend {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for record in view {
        if let Some(date) = record.order_date {
            *days.entry(date).or_default() += record.sales;
        }
    }

    let (dates, values) = days
        .into_iter()
        .map(|(date, total)| (date, round2(total)))
        .unzip();
    DailyTrend { dates, values }
}

/// Pivot of sales by (year, month) and product line.
///
/// Series follow the order in which product lines first appear in the view;
/// a period in which a product line sold nothing holds 0 for that line.
#[must_use]
pub fn monthly_product_sales(view: &FilteredView<'_>) -> PivotResult {
    let mut lines: Vec<&str> = Vec::new();
    let mut line_index: FxHashMap<&str, usize> = FxHashMap::default();
    for record in view {
        let line = record.product_line.as_str();
        if !line_index.contains_key(line) {
            line_index.insert(line, lines.len());
            lines.push(line);
        }
    }

    let mut periods: BTreeMap<(i32, u32), Vec<f64>> = BTreeMap::new();
    for record in view {
        let slot = line_index[record.product_line.as_str()];
        periods
            .entry(record.period())
            .or_insert_with(|| vec![0.0; lines.len()])[slot] += record.sales;
    }

    let categories = periods.keys().copied().map(period_label).collect();
    let series = lines
        .iter()
        .enumerate()
        .map(|(slot, name)| PivotSeries {
            name: (*name).to_string(),
            data: periods.values().map(|row| round2(row[slot])).collect(),
        })
        .collect();

    PivotResult { categories, series }
}
