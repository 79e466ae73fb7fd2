//! Query dispatch
//!
//! Maps a route name and raw filter parameters onto one filter pass plus one
//! aggregation, and wraps the result in a serializable response. The engine
//! only borrows the shared dataset, so any number of queries can run at once.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::algorithm::aggregation::{
    self, CountSeries, DailyTrend, PivotResult, SalesSeries, ScatterPoint, SummaryMetrics,
};
use crate::algorithm::period;
use crate::config::DashboardConfig;
use crate::error::{Error, Result};
use crate::filter::{FilterCriteria, FilterParams, filter_dataset};
use crate::models::{Dataset, FilteredView};

/// The query routes the engine answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Sales per (year, month)
    SalesByMonth,
    /// Sales per product line, descending
    SalesByProductLine,
    /// Sales per country
    SalesByCountry,
    /// Record count per status
    StatusDistribution,
    /// Ten best customers by sales
    TopCustomers,
    /// Record count per deal size
    DealSizeDistribution,
    /// Sampled price/quantity scatter
    PriceQuantityAnalysis,
    /// Sales per calendar day
    SalesTrend,
    /// Pivot of months by product line
    MonthlyProductSales,
    /// Headline metrics with trends
    SummaryMetrics,
    /// Distinct countries and statuses for filter controls
    FilterOptions,
}

impl QueryKind {
    /// Every route, in a stable order
    pub const ALL: [Self; 11] = [
        Self::SalesByMonth,
        Self::SalesByProductLine,
        Self::SalesByCountry,
        Self::StatusDistribution,
        Self::TopCustomers,
        Self::DealSizeDistribution,
        Self::PriceQuantityAnalysis,
        Self::SalesTrend,
        Self::MonthlyProductSales,
        Self::SummaryMetrics,
        Self::FilterOptions,
    ];

    /// Route name, as used in `/api/<route>`
    #[must_use]
    pub const fn route(self) -> &'static str {
        match self {
            Self::SalesByMonth => "sales_by_month",
            Self::SalesByProductLine => "sales_by_productline",
            Self::SalesByCountry => "sales_by_country",
            Self::StatusDistribution => "status_distribution",
            Self::TopCustomers => "top_customers",
            Self::DealSizeDistribution => "deal_size_distribution",
            Self::PriceQuantityAnalysis => "price_quantity_analysis",
            Self::SalesTrend => "sales_trend",
            Self::MonthlyProductSales => "monthly_product_sales",
            Self::SummaryMetrics => "summary_metrics",
            Self::FilterOptions => "filter_options",
        }
    }

    /// Whether identical inputs always produce identical output.
    ///
    /// The scatter sample is only reproducible with a configured seed.
    #[must_use]
    pub const fn is_deterministic(self, seeded: bool) -> bool {
        !matches!(self, Self::PriceQuantityAnalysis) || seeded
    }
}

impl FromStr for QueryKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let route = s.trim().trim_start_matches("/api/").trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|kind| kind.route() == route)
            .ok_or_else(|| Error::UnknownQuery(s.to_string()))
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

/// Values offered by the dashboard's filter controls
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Distinct countries, sorted
    pub countries: Vec<String>,
    /// Distinct statuses, sorted
    pub statuses: Vec<String>,
}

/// The result of one query, serialized without an enclosing tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResponse {
    /// Labeled sums of sales
    Sales(SalesSeries),
    /// Labeled record counts
    Counts(CountSeries),
    /// Scatter points
    Scatter(Vec<ScatterPoint>),
    /// Daily sales
    Daily(DailyTrend),
    /// Month by product line pivot
    Pivot(PivotResult),
    /// Summary metrics
    Summary(SummaryMetrics),
    /// Filter control values
    Options(FilterOptions),
}

impl QueryResponse {
    /// Serialize to a JSON value
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Answers queries against one shared, immutable dataset
#[derive(Debug, Clone)]
pub struct QueryEngine {
    dataset: Arc<Dataset>,
    config: DashboardConfig,
}

impl QueryEngine {
    /// Create an engine over a loaded dataset
    #[must_use]
    pub const fn new(dataset: Arc<Dataset>, config: DashboardConfig) -> Self {
        Self { dataset, config }
    }

    /// The shared dataset
    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Parse request parameters with the configured date formats
    #[must_use]
    pub fn criteria(&self, params: &FilterParams) -> FilterCriteria {
        FilterCriteria::from_params(params, &self.config.date_format_config)
    }

    /// Filter the full dataset
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> FilteredView<'_> {
        filter_dataset(&self.dataset, criteria, self.config.parallel_threshold)
    }

    /// Run one query. The scatter sampler is seeded from the configuration
    /// when a seed is set, otherwise from OS entropy.
    #[must_use]
    pub fn execute(&self, kind: QueryKind, criteria: &FilterCriteria) -> QueryResponse {
        let mut rng = match self.config.sample_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.execute_with_rng(kind, criteria, &mut rng)
    }

    /// Run one query with an explicit sampler
    pub fn execute_with_rng<R>(
        &self,
        kind: QueryKind,
        criteria: &FilterCriteria,
        rng: &mut R,
    ) -> QueryResponse
    where
        R: Rng + ?Sized,
    {
        let filtered = || {
            let view = self.filter(criteria);
            debug!(
                "{kind}: {criteria:?} matched {} of {} records",
                view.len(),
                self.dataset.count()
            );
            view
        };

        match kind {
            QueryKind::SalesByMonth => {
                QueryResponse::Sales(aggregation::sales_by_month(&filtered()))
            }
            QueryKind::SalesByProductLine => {
                QueryResponse::Sales(aggregation::sales_by_product_line(&filtered()))
            }
            QueryKind::SalesByCountry => {
                QueryResponse::Sales(aggregation::sales_by_country(&filtered()))
            }
            QueryKind::StatusDistribution => {
                QueryResponse::Counts(aggregation::status_distribution(&filtered()))
            }
            QueryKind::TopCustomers => QueryResponse::Sales(aggregation::top_customers(
                &filtered(),
                self.config.top_customers_limit,
            )),
            QueryKind::DealSizeDistribution => {
                QueryResponse::Counts(aggregation::deal_size_distribution(&filtered()))
            }
            QueryKind::PriceQuantityAnalysis => {
                QueryResponse::Scatter(aggregation::price_quantity_scatter(
                    &filtered(),
                    self.config.scatter_sample_size,
                    rng,
                ))
            }
            QueryKind::SalesTrend => QueryResponse::Daily(aggregation::sales_trend(&filtered())),
            QueryKind::MonthlyProductSales => {
                QueryResponse::Pivot(aggregation::monthly_product_sales(&filtered()))
            }
            QueryKind::SummaryMetrics => {
                debug!("{kind}: {criteria:?}");
                QueryResponse::Summary(period::summary_metrics(
                    &self.dataset,
                    criteria,
                    self.config.parallel_threshold,
                ))
            }
            QueryKind::FilterOptions => QueryResponse::Options(FilterOptions {
                countries: self.dataset.countries(),
                statuses: self.dataset.statuses(),
            }),
        }
    }

    /// Resolve a route, parse its parameters and serialize the answer
    pub fn handle(&self, route: &str, params: &FilterParams) -> Result<serde_json::Value> {
        let kind: QueryKind = route.parse()?;
        let criteria = self.criteria(params);
        self.execute(kind, &criteria).to_json()
    }
}
