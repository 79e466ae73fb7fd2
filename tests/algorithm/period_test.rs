use crate::utils::{sale, varied_dataset, ymd};
use sales_dash::Dataset;
use sales_dash::FilterCriteria;
use sales_dash::algorithm::aggregation::summary_totals;
use sales_dash::algorithm::period::{previous_criteria, previous_period, summary_metrics};
use sales_dash::apply;

/// Test the documented January example
#[test]
fn test_previous_period_of_january_2003() {
    assert_eq!(
        previous_period(ymd(2003, 1, 1), ymd(2003, 1, 31)),
        Some((ymd(2002, 12, 1), ymd(2002, 12, 31)))
    );
}

/// Test that the previous window has the same length and touches the current one
#[test]
fn test_previous_period_is_adjacent_and_equal_length() {
    let ranges = [
        (ymd(2003, 3, 1), ymd(2003, 3, 31)),
        (ymd(2004, 2, 10), ymd(2004, 3, 9)),
        (ymd(2003, 12, 31), ymd(2004, 1, 1)),
        (ymd(2003, 6, 15), ymd(2003, 6, 15)),
    ];
    for (start, end) in ranges {
        let (prev_start, prev_end) = previous_period(start, end).unwrap();
        assert_eq!(prev_end.succ_opt().unwrap(), start);
        assert_eq!(prev_end - prev_start, end - start);
    }
}

/// Test that trends are zero without a complete date range
#[test]
fn test_no_date_range_no_trends() {
    let dataset = varied_dataset();
    for criteria in [
        FilterCriteria::new(),
        FilterCriteria::new().start_date(ymd(2003, 1, 1)),
        FilterCriteria::new().end_date(ymd(2003, 12, 31)).country("USA"),
    ] {
        assert_eq!(previous_criteria(&criteria), None);
        let metrics = summary_metrics(&dataset, &criteria, usize::MAX);
        assert_eq!(metrics.sales_trend, 0.0);
        assert_eq!(metrics.orders_trend, 0.0);
        assert_eq!(metrics.aov_trend, 0.0);
    }
}

/// Test trends against a hand-computed previous period that keeps the
/// non-date predicates
#[test]
fn test_trends_keep_non_date_predicates() {
    let dataset = Dataset::new(vec![
        sale(1, Some(ymd(2002, 12, 5)), "USA", "Shipped", "Acme", "Ships", 100.0),
        sale(2, Some(ymd(2002, 12, 6)), "France", "Shipped", "Globex", "Ships", 900.0),
        sale(3, Some(ymd(2003, 1, 5)), "USA", "Shipped", "Acme", "Ships", 150.0),
        sale(3, Some(ymd(2003, 1, 5)), "USA", "Shipped", "Acme", "Planes", 50.0),
        sale(4, Some(ymd(2003, 1, 25)), "USA", "Shipped", "Acme", "Ships", 100.0),
    ]);
    let criteria = FilterCriteria::new()
        .start_date(ymd(2003, 1, 1))
        .end_date(ymd(2003, 1, 31))
        .country("USA");
    let metrics = summary_metrics(&dataset, &criteria, usize::MAX);

    assert_eq!(metrics.total_sales, 300.0);
    assert_eq!(metrics.total_orders, 2);
    assert_eq!(metrics.avg_order_value, 150.0);
    assert_eq!(metrics.product_line_count, 2);
    assert_eq!(metrics.sales_trend, 200.0);
    assert_eq!(metrics.orders_trend, 100.0);
    assert_eq!(metrics.aov_trend, 50.0);
}

/// Test that trends follow the same formula as a manual two-window computation
#[test]
fn test_trends_match_manual_computation() {
    let dataset = varied_dataset();
    let criteria = FilterCriteria::new()
        .start_date(ymd(2003, 7, 1))
        .end_date(ymd(2003, 9, 30))
        .status("Shipped");
    let previous = previous_criteria(&criteria).unwrap();

    let current_totals = summary_totals(&apply(&dataset.view(), &criteria));
    let previous_totals = summary_totals(&apply(&dataset.view(), &previous));
    assert!(previous_totals.total_sales > 0.0);

    let metrics = summary_metrics(&dataset, &criteria, usize::MAX);
    let expected = (current_totals.total_sales - previous_totals.total_sales)
        / previous_totals.total_sales
        * 100.0;
    assert!((metrics.sales_trend - expected).abs() < 1e-9);
}
