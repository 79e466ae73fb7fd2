//! Headline totals over a filtered view

use rustc_hash::FxHashSet;

use crate::algorithm::aggregation::SummaryMetrics;
use crate::algorithm::aggregation::group::round2;
use crate::models::FilteredView;

/// Unrounded totals of one period
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryTotals {
    /// Sum of sales
    pub total_sales: f64,
    /// Distinct order numbers
    pub total_orders: u64,
    /// `total_sales / total_orders`, 0 without orders
    pub avg_order_value: f64,
    /// Distinct product lines
    pub product_line_count: u64,
}

/// Compute the totals of a view
#[must_use]
pub fn summary_totals(view: &FilteredView<'_>) -> SummaryTotals {
    let mut total_sales = 0.0;
    let mut orders = FxHashSet::default();
    let mut product_lines = FxHashSet::default();

    for record in view {
        total_sales += record.sales;
        orders.insert(record.order_number);
        product_lines.insert(record.product_line.as_str());
    }

    let total_orders = orders.len() as u64;
    let avg_order_value = if total_orders > 0 {
        total_sales / total_orders as f64
    } else {
        0.0
    };

    SummaryTotals {
        total_sales,
        total_orders,
        avg_order_value,
        product_line_count: product_lines.len() as u64,
    }
}

/// Percentage change from `previous` to `current`; 0 unless `previous > 0`
#[must_use]
pub fn trend_percent(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else {
        0.0
    }
}

impl SummaryTotals {
    /// Build the output metrics, with trends against `previous` when given
    #[must_use]
    pub fn into_metrics(self, previous: Option<&Self>) -> SummaryMetrics {
        let (sales_trend, orders_trend, aov_trend) = previous.map_or((0.0, 0.0, 0.0), |prev| {
            (
                trend_percent(self.total_sales, prev.total_sales),
                trend_percent(self.total_orders as f64, prev.total_orders as f64),
                trend_percent(self.avg_order_value, prev.avg_order_value),
            )
        });

        SummaryMetrics {
            total_sales: round2(self.total_sales),
            total_orders: self.total_orders,
            avg_order_value: round2(self.avg_order_value),
            product_line_count: self.product_line_count,
            sales_trend,
            orders_trend,
            aov_trend,
        }
    }
}
