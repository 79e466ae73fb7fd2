use chrono::NaiveDate;
use sales_dash::{Dataset, SaleRecord};

/// Build a calendar date
#[must_use]
pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a sale line with the fields the filters and aggregations read
#[must_use]
pub fn sale(
    order_number: i64,
    date: Option<NaiveDate>,
    country: &str,
    status: &str,
    customer: &str,
    product_line: &str,
    sales: f64,
) -> SaleRecord {
    let (year, month) = date.map_or((2003, 1), |d| {
        use chrono::Datelike;
        (d.year(), d.month())
    });
    SaleRecord {
        order_number,
        order_date: date,
        year,
        month,
        quantity_ordered: 10.0,
        price_each: sales / 10.0,
        sales,
        status: status.to_string(),
        product_line: product_line.to_string(),
        product_code: format!("S{order_number}"),
        country: country.to_string(),
        customer_name: customer.to_string(),
        deal_size: if sales >= 150.0 { "Medium" } else { "Small" }.to_string(),
    }
}

/// The three-record dataset used in the worked examples
#[must_use]
pub fn example_dataset() -> Dataset {
    Dataset::new(vec![
        sale(1, Some(ymd(2003, 1, 15)), "USA", "Shipped", "Acme", "Classic Cars", 100.0),
        sale(2, Some(ymd(2003, 2, 20)), "USA", "Cancelled", "Acme", "Motorcycles", 50.0),
        sale(3, Some(ymd(2003, 1, 10)), "France", "Shipped", "Globex", "Classic Cars", 200.0),
    ])
}

/// A larger deterministic dataset spanning 2002-2004 with every categorical
/// dimension populated, plus one undated line
#[must_use]
pub fn varied_dataset() -> Dataset {
    let countries = ["USA", "France", "Norway", "Spain"];
    let statuses = ["Shipped", "Cancelled", "On Hold", "Resolved"];
    let customers = [
        "Acme Corp",
        "Globex",
        "Initech",
        "Umbrella",
        "Stark Industries",
        "Wayne Enterprises",
        "Hooli",
        "Vandelay Imports",
        "Soylent",
        "Tyrell",
        "Cyberdyne",
        "Wonka",
    ];
    let lines = ["Classic Cars", "Motorcycles", "Planes", "Ships", "Trains"];

    let mut records: Vec<SaleRecord> = (0..400_i64)
        .map(|i| {
            let date = ymd(2002, 11, 1) + chrono::Days::new((i * 3 % 700) as u64);
            let order = 10_000 + i / 3;
            sale(
                order,
                Some(date),
                countries[(i % 4) as usize],
                statuses[(i % 7 % 4) as usize],
                customers[(i % 12) as usize],
                lines[(i % 5) as usize],
                25.0 + (i % 17) as f64 * 13.5,
            )
        })
        .collect();
    records.push(sale(99_999, None, "USA", "Shipped", "Acme Corp", "Ships", 75.0));

    Dataset::new(records)
}
