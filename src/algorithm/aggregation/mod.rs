//! Aggregation library
//!
//! Every function here takes a [`FilteredView`](crate::models::FilteredView)
//! and produces one result structure. None of them fail: an empty view yields
//! empty sequences and zero totals. Monetary values are summed at full
//! precision and rounded to two decimals only when the result is built.

pub mod categorical;
pub mod group;
pub mod scatter;
pub mod summary;
pub mod time_series;

use chrono::NaiveDate;
use serde::Serialize;

pub use categorical::{
    deal_size_distribution, sales_by_country, sales_by_product_line, status_distribution,
    top_customers,
};
pub use scatter::price_quantity_scatter;
pub use summary::{SummaryTotals, summary_totals};
pub use time_series::{monthly_product_sales, sales_by_month, sales_trend};

/// Index-aligned labels and values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LabeledSeries<V> {
    /// Ordered labels
    pub labels: Vec<String>,
    /// One value per label
    pub values: Vec<V>,
}

impl<V> LabeledSeries<V> {
    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl<V> FromIterator<(String, V)> for LabeledSeries<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let (labels, values) = iter.into_iter().unzip();
        Self { labels, values }
    }
}

/// Monetary series (sums of sales)
pub type SalesSeries = LabeledSeries<f64>;

/// Record counts per category
pub type CountSeries = LabeledSeries<u64>;

/// One named series of a pivot, aligned to the pivot's categories
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PivotSeries {
    /// Product line
    pub name: String,
    /// One value per pivot category
    pub data: Vec<f64>,
}

/// Cross-tabulation of periods by product line
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PivotResult {
    /// Period labels, ascending by (year, month)
    pub categories: Vec<String>,
    /// One series per product line in the filtered view
    pub series: Vec<PivotSeries>,
}

/// A sampled point of the price/quantity scatter plot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    /// Quantity ordered
    pub x: f64,
    /// Unit price
    pub y: f64,
    /// Line total, used as bubble size
    pub z: f64,
    /// Display name, `Order <number>`
    pub name: String,
    /// Product line of the source record
    pub product_line: String,
    /// Product code of the source record
    pub product_code: String,
}

/// Sales summed per calendar day
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyTrend {
    /// Ascending calendar days, serialized as `YYYY-MM-DD`
    pub dates: Vec<NaiveDate>,
    /// One sum per day
    pub values: Vec<f64>,
}

/// Headline metrics with period-over-period trends in percent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetrics {
    /// Sum of sales
    pub total_sales: f64,
    /// Distinct order numbers
    pub total_orders: u64,
    /// `total_sales / total_orders`, 0 without orders
    pub avg_order_value: f64,
    /// Distinct product lines
    pub product_line_count: u64,
    /// Sales change against the previous period
    pub sales_trend: f64,
    /// Order count change against the previous period
    pub orders_trend: f64,
    /// Average order value change against the previous period
    pub aov_trend: f64,
}
