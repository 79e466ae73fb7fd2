//! Filter criteria and request parameter parsing
//!
//! [`FilterParams`] is the raw, untyped request surface (five optional
//! strings). [`FilterCriteria`] is the typed value the filter engine consumes.
//! Converting one into the other never fails: blank values and unparseable
//! dates degrade to "no constraint on this dimension", and every degraded
//! date is logged at warn level.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::filter::date::{DateFormatConfig, parse_date_string};

/// Raw filter parameters as received from a request
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FilterParams {
    /// Start of the date range (inclusive)
    pub start_date: Option<String>,
    /// End of the date range (inclusive)
    pub end_date: Option<String>,
    /// Exact country name
    pub country: Option<String>,
    /// Exact order status
    pub status: Option<String>,
    /// Case-insensitive customer name substring
    pub customer: Option<String>,
}

impl FilterParams {
    /// Build parameters from `key=value` style pairs.
    ///
    /// Unknown keys are ignored; a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "start_date" => &mut params.start_date,
                "end_date" => &mut params.end_date,
                "country" => &mut params.country,
                "status" => &mut params.status,
                "customer" => &mut params.customer,
                _ => continue,
            };
            *slot = Some(value.into());
        }
        params
    }
}

/// A set of independent, optional predicates combined with logical AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Earliest order date (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Latest order date (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Exact, case-sensitive country
    pub country: Option<String>,
    /// Exact, case-sensitive status
    pub status: Option<String>,
    /// Case-insensitive substring of the customer name
    pub customer: Option<String>,
}

impl FilterCriteria {
    /// Criteria without any constraint
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert raw request parameters into typed criteria
    #[must_use]
    pub fn from_params(params: &FilterParams, date_config: &DateFormatConfig) -> Self {
        Self {
            start_date: parse_bound("start_date", params.start_date.as_deref(), date_config),
            end_date: parse_bound("end_date", params.end_date.as_deref(), date_config),
            country: non_blank(params.country.as_deref()),
            status: non_blank(params.status.as_deref()),
            customer: non_blank(params.customer.as_deref()),
        }
    }

    /// Set the start date
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the end date
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set the country
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the status
    #[must_use]
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the customer substring
    #[must_use]
    pub fn customer(mut self, customer: impl Into<String>) -> Self {
        self.customer = Some(customer.into());
        self
    }

    /// Both date bounds, when both are present
    #[must_use]
    pub const fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }

    /// Copy of these criteria with the date range replaced and every other
    /// predicate unchanged
    #[must_use]
    pub fn with_date_range(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start_date: Some(start),
            end_date: Some(end),
            ..self.clone()
        }
    }

    /// Whether no predicate is present
    #[must_use]
    pub const fn is_unconstrained(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.country.is_none()
            && self.status.is_none()
            && self.customer.is_none()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

fn parse_bound(name: &str, value: Option<&str>, config: &DateFormatConfig) -> Option<NaiveDate> {
    let raw = value.filter(|v| !v.trim().is_empty())?;
    let parsed = parse_date_string(raw, config);
    if parsed.is_none() {
        warn!("Ignoring unparseable {name} '{raw}': no constraint applied on this bound");
    }
    parsed
}
