use std::collections::HashSet;

use crate::utils::{example_dataset, varied_dataset, ymd};
use rand::SeedableRng;
use rand::rngs::StdRng;
use sales_dash::algorithm::aggregation::*;
use sales_dash::algorithm::period::summary_metrics;
use sales_dash::{FilterCriteria, apply};

/// Test the worked example: monthly sales and summary for the USA subset
#[test]
fn test_example_usa_subset() {
    let dataset = example_dataset();
    let view = apply(&dataset.view(), &FilterCriteria::new().country("USA"));

    let months = sales_by_month(&view);
    assert_eq!(months.labels, vec!["1/2003", "2/2003"]);
    assert_eq!(months.values, vec![100.0, 50.0]);

    let totals = summary_totals(&view);
    assert_eq!(totals.total_sales, 150.0);
    assert_eq!(totals.total_orders, 2);
    assert_eq!(totals.avg_order_value, 75.0);
    assert_eq!(totals.product_line_count, 2);
}

/// Test that monthly and daily series are in ascending time order
#[test]
fn test_time_series_are_ascending() {
    let dataset = varied_dataset();
    let view = dataset.view();

    let months = sales_by_month(&view);
    let periods: Vec<(i32, u32)> = months
        .labels
        .iter()
        .map(|label| {
            let (m, y) = label.split_once('/').unwrap();
            (y.parse().unwrap(), m.parse().unwrap())
        })
        .collect();
    assert!(periods.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(months.labels.len(), months.values.len());

    let trend = sales_trend(&view);
    assert!(trend.dates.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(trend.dates.len(), trend.values.len());
}

/// Test that rankings are descending and top customers is capped
#[test]
fn test_rankings_descending() {
    let dataset = varied_dataset();
    let view = dataset.view();

    let lines = sales_by_product_line(&view);
    assert!(lines.values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(lines.len(), 5);

    let customers = top_customers(&view, 10);
    assert!(customers.values.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(customers.len(), 10);

    let few = apply(&view, &FilterCriteria::new().customer("globex"));
    assert_eq!(top_customers(&few, 10).labels, vec!["Globex"]);
}

/// Test that counts add up to the view size
#[test]
fn test_distributions_cover_the_view() {
    let dataset = varied_dataset();
    let view = apply(&dataset.view(), &FilterCriteria::new().country("Norway"));

    let statuses = status_distribution(&view);
    assert_eq!(statuses.values.iter().sum::<u64>(), view.len() as u64);
    assert!(statuses.values.windows(2).all(|w| w[0] >= w[1]));

    let deals = deal_size_distribution(&view);
    assert_eq!(deals.values.iter().sum::<u64>(), view.len() as u64);
}

/// Test that the pivot is rectangular and its columns sum to the monthly totals
#[test]
fn test_pivot_alignment() {
    let dataset = varied_dataset();
    let view = apply(&dataset.view(), &FilterCriteria::new().status("Shipped"));
    let pivot = monthly_product_sales(&view);

    let distinct_lines: HashSet<&str> = view.iter().map(|r| r.product_line.as_str()).collect();
    assert_eq!(pivot.series.len(), distinct_lines.len());

    let months = sales_by_month(&view);
    assert_eq!(pivot.categories, months.labels);
    for series in &pivot.series {
        assert_eq!(series.data.len(), pivot.categories.len());
    }
    for (idx, total) in months.values.iter().enumerate() {
        let column: f64 = pivot.series.iter().map(|s| s.data[idx]).sum();
        assert!((column - total).abs() < 0.05, "{column} vs {total}");
    }
}

/// Test that the scatter sample is capped and traceable to its records
#[test]
fn test_scatter_size_and_provenance() {
    let dataset = varied_dataset();
    let view = dataset.view();
    let mut rng = StdRng::seed_from_u64(2024);

    let points = price_quantity_scatter(&view, 100, &mut rng);
    assert_eq!(points.len(), 100.min(view.len()));
    for point in &points {
        assert!(view.iter().any(|r| {
            point.name == format!("Order {}", r.order_number)
                && point.x == r.quantity_ordered
                && point.y == r.price_each
                && point.z == r.sales
                && point.product_line == r.product_line
                && point.product_code == r.product_code
        }));
    }

    let small = apply(&view, &FilterCriteria::new().customer("tyrell"));
    assert_eq!(price_quantity_scatter(&small, 100, &mut rng).len(), small.len());
}

/// Test the relation between average order value and totals
#[test]
fn test_average_order_value_consistency() {
    let dataset = varied_dataset();
    for country in ["USA", "France", "Norway", "Spain"] {
        let view = apply(&dataset.view(), &FilterCriteria::new().country(country));
        let totals = summary_totals(&view);
        assert!(totals.total_orders > 0);
        let rebuilt = totals.avg_order_value * totals.total_orders as f64;
        assert!((rebuilt - totals.total_sales).abs() < 1e-6);
    }
}

/// Test that every aggregation is well formed on an empty view
#[test]
fn test_empty_filtered_view() {
    let dataset = varied_dataset();
    let view = apply(&dataset.view(), &FilterCriteria::new().country("Atlantis"));
    assert!(view.is_empty());

    assert!(sales_by_month(&view).is_empty());
    assert!(sales_by_product_line(&view).is_empty());
    assert!(sales_by_country(&view).is_empty());
    assert!(status_distribution(&view).is_empty());
    assert!(top_customers(&view, 10).is_empty());
    assert!(deal_size_distribution(&view).is_empty());
    assert!(price_quantity_scatter(&view, 100, &mut StdRng::seed_from_u64(1)).is_empty());
    assert_eq!(sales_trend(&view), DailyTrend::default());
    assert_eq!(monthly_product_sales(&view), PivotResult::default());

    let metrics = summary_metrics(
        &dataset,
        &FilterCriteria::new()
            .country("Atlantis")
            .start_date(ymd(2003, 1, 1))
            .end_date(ymd(2003, 1, 31)),
        usize::MAX,
    );
    assert_eq!(metrics, SummaryMetrics::default());
}
