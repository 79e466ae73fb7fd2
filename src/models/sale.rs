//! Sale record entity model
//!
//! One `SaleRecord` represents one transaction line. Several lines can share
//! the same order number.

use chrono::NaiveDate;
use serde::Serialize;

/// A single typed transaction line of the sales dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SaleRecord {
    /// Order identifier, shared by all lines of one order
    pub order_number: i64,
    /// Order date, `None` when the source value could not be parsed
    pub order_date: Option<NaiveDate>,
    /// Calendar year used for period grouping
    pub year: i32,
    /// Calendar month (1-12) used for period grouping
    pub month: u32,
    /// Units ordered on this line
    pub quantity_ordered: f64,
    /// Unit price
    pub price_each: f64,
    /// Line total, the source of truth for all monetary aggregation
    pub sales: f64,
    /// Order status (e.g. "Shipped")
    pub status: String,
    /// Product line category
    pub product_line: String,
    /// Product code
    pub product_code: String,
    /// Customer country
    pub country: String,
    /// Customer name
    pub customer_name: String,
    /// Deal size tier (e.g. "Small", "Medium", "Large")
    pub deal_size: String,
}

impl SaleRecord {
    /// Calendar period key `(year, month)` of this line
    #[must_use]
    pub const fn period(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    /// Whether the order date lies in `[start, end]`, each bound optional.
    ///
    /// A record without an order date never satisfies a present bound.
    #[must_use]
    pub fn ordered_within(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
        if start.is_none() && end.is_none() {
            return true;
        }
        let Some(date) = self.order_date else {
            return false;
        };
        start.is_none_or(|s| date >= s) && end.is_none_or(|e| date <= e)
    }
}
