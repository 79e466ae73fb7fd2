use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use clap::{Args, Parser};
use log::{info, warn};
use sales_dash::algorithm::aggregation::categorical::DEFAULT_TOP_CUSTOMERS;
use sales_dash::algorithm::aggregation::scatter::DEFAULT_SAMPLE_SIZE;
use sales_dash::{DashboardConfig, FilterParams, QueryEngine, QueryKind, load_dataset};

/// sales-dash - filtered analytical queries over a sales dataset
#[derive(Parser, Debug)]
#[command(name = "sales-dash")]
#[command(author, version, about = "Answer dashboard queries over a sales CSV")]
struct Cli {
    /// Query routes to answer (e.g. sales_by_month); every route when omitted
    routes: Vec<QueryKind>,

    #[command(flatten)]
    filters: FilterArgs,

    /// Path of the sales CSV
    #[arg(long, env = "SALES_DATA_PATH", default_value = "sales_data_sample.csv")]
    data_path: PathBuf,

    /// Seed for the scatter sampler; OS entropy when unset
    #[arg(long, env = "SALES_SAMPLE_SEED")]
    sample_seed: Option<u64>,

    /// Maximum number of scatter points
    #[arg(long, env = "SALES_SAMPLE_SIZE", default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    /// Length of the top-customers ranking
    #[arg(long, env = "SALES_TOP_CUSTOMERS", default_value_t = DEFAULT_TOP_CUSTOMERS)]
    top_customers: usize,
}

/// Filters applied to every requested route
#[derive(Args, Debug)]
struct FilterArgs {
    /// Earliest order date (inclusive)
    #[arg(long)]
    start_date: Option<String>,

    /// Latest order date (inclusive)
    #[arg(long)]
    end_date: Option<String>,

    /// Exact country name
    #[arg(long)]
    country: Option<String>,

    /// Exact order status
    #[arg(long)]
    status: Option<String>,

    /// Case-insensitive customer name substring
    #[arg(long)]
    customer: Option<String>,
}

impl From<FilterArgs> for FilterParams {
    fn from(args: FilterArgs) -> Self {
        Self {
            start_date: args.start_date,
            end_date: args.end_date,
            country: args.country,
            status: args.status,
            customer: args.customer,
        }
    }
}

impl Cli {
    /// The requested routes, or all of them
    fn kinds(&self) -> Vec<QueryKind> {
        if self.routes.is_empty() {
            QueryKind::ALL.to_vec()
        } else {
            self.routes.clone()
        }
    }

    fn config(&self) -> DashboardConfig {
        let config = DashboardConfig::default()
            .with_data_path(&self.data_path)
            .with_scatter_sample_size(self.sample_size)
            .with_top_customers_limit(self.top_customers);
        match self.sample_seed {
            Some(seed) => config.with_sample_seed(seed),
            None => config,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let kinds = cli.kinds();
    let config = cli.config();
    let params = FilterParams::from(cli.filters);

    if config.sample_seed.is_some() {
        info!("Scatter sampling is seeded; repeated queries return the same sample");
    }

    // The dataset is loaded exactly once; a failure here is fatal
    let dataset = load_dataset(&config.data_path, &config.date_format_config)
        .context("Failed to load the sales dataset")?;
    if dataset.is_empty() {
        warn!("Dataset {} contains no records", config.data_path.display());
    }

    let engine = Arc::new(QueryEngine::new(Arc::new(dataset), config));
    let criteria = Arc::new(engine.criteria(&params));

    let start = Instant::now();
    let handles: Vec<_> = kinds
        .into_iter()
        .map(|kind| {
            let engine = Arc::clone(&engine);
            let criteria = Arc::clone(&criteria);
            tokio::task::spawn_blocking(move || (kind, engine.execute(kind, &criteria)))
        })
        .collect();

    let mut answered = 0;
    for handle in handles {
        let (kind, response) = handle.await.context("Query task panicked")?;
        let body = serde_json::json!({
            "route": format!("/api/{}", kind.route()),
            "result": response.to_json()?,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
        answered += 1;
    }

    info!("Answered {answered} queries in {:?}", start.elapsed());
    Ok(())
}
