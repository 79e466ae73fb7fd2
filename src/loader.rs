//! Dataset ingestion from a comma-separated source file
//!
//! The source is ISO-8859-1 encoded and carries a header row. Columns are
//! resolved by header name, extra columns are ignored. Loading is all or
//! nothing: a missing column or a malformed numeric value aborts the load,
//! while an unparseable order date only marks that record as undated.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use std::time::Instant;

use csv::ByteRecord;

use crate::error::util::safe_open_file;
use crate::error::{Error, Result};
use crate::filter::date::{DateFormatConfig, parse_date_string};
use crate::models::{Dataset, SaleRecord};
use crate::utils::logging::{log_load_complete, log_load_start};

/// Column indices of the fields a `SaleRecord` is built from
#[derive(Debug, Clone, Copy)]
struct Columns {
    order_number: usize,
    quantity_ordered: usize,
    price_each: usize,
    sales: usize,
    order_date: usize,
    status: usize,
    month: usize,
    year: usize,
    product_line: usize,
    product_code: usize,
    customer_name: usize,
    country: usize,
    deal_size: usize,
}

impl Columns {
    fn resolve(headers: &ByteRecord) -> Result<Self> {
        let header_map: HashMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(idx, name)| (normalize_header_name(&decode_latin1(name)), idx))
            .collect();

        let find = |name: &str| {
            header_map
                .get(name)
                .copied()
                .ok_or_else(|| Error::MissingColumn(name.to_string()))
        };

        Ok(Self {
            order_number: find("ORDERNUMBER")?,
            quantity_ordered: find("QUANTITYORDERED")?,
            price_each: find("PRICEEACH")?,
            sales: find("SALES")?,
            order_date: find("ORDERDATE")?,
            status: find("STATUS")?,
            month: find("MONTH_ID")?,
            year: find("YEAR_ID")?,
            product_line: find("PRODUCTLINE")?,
            product_code: find("PRODUCTCODE")?,
            customer_name: find("CUSTOMERNAME")?,
            country: find("COUNTRY")?,
            deal_size: find("DEALSIZE")?,
        })
    }
}

fn normalize_header_name(name: &str) -> String {
    name.trim().trim_start_matches('\u{feff}').to_ascii_uppercase()
}

/// Decode ISO-8859-1 bytes: every byte is the code point of the same value
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// A single source row with its line number, for error reporting
struct Row<'r> {
    record: &'r ByteRecord,
    line: u64,
}

impl Row<'_> {
    fn text(&self, idx: usize) -> String {
        self.record.get(idx).map(decode_latin1).unwrap_or_default()
    }

    fn invalid(&self, field: &str, message: impl Into<String>) -> Error {
        Error::InvalidRecord {
            line: self.line,
            field: field.to_string(),
            message: message.into(),
        }
    }

    fn number<T: FromStr>(&self, idx: usize, field: &str) -> Result<T> {
        let raw = self.text(idx);
        raw.trim()
            .parse()
            .map_err(|_| self.invalid(field, format!("is not a valid number: '{raw}'")))
    }

    fn amount(&self, idx: usize, field: &str) -> Result<f64> {
        let value: f64 = self.number(idx, field)?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(self.invalid(field, format!("must be finite, got {value}")))
        }
    }
}

fn parse_record(
    row: &Row<'_>,
    cols: &Columns,
    date_config: &DateFormatConfig,
) -> Result<SaleRecord> {
    let month: u32 = row.number(cols.month, "MONTH_ID")?;
    if !(1..=12).contains(&month) {
        return Err(row.invalid("MONTH_ID", format!("must be between 1 and 12, got {month}")));
    }

    Ok(SaleRecord {
        order_number: row.number(cols.order_number, "ORDERNUMBER")?,
        order_date: parse_date_string(&row.text(cols.order_date), date_config),
        year: row.number(cols.year, "YEAR_ID")?,
        month,
        quantity_ordered: row.amount(cols.quantity_ordered, "QUANTITYORDERED")?,
        price_each: row.amount(cols.price_each, "PRICEEACH")?,
        sales: row.amount(cols.sales, "SALES")?,
        status: row.text(cols.status),
        product_line: row.text(cols.product_line),
        product_code: row.text(cols.product_code),
        country: row.text(cols.country),
        customer_name: row.text(cols.customer_name),
        deal_size: row.text(cols.deal_size),
    })
}

/// Read a dataset from any CSV source
///
/// Columns are matched by header name, so their order and any extra columns
/// do not matter.
///
/// # Arguments
/// * `source` - Latin-1 encoded CSV with a header row
/// * `date_config` - Formats tried on each `ORDERDATE` value
///
/// # Returns
/// * `Result<Dataset>` - Every record, or the first missing column or invalid field
pub fn read_dataset<R: Read>(source: R, date_config: &DateFormatConfig) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader.byte_headers()?.clone();
    let cols = Columns::resolve(&headers)?;

    let mut records = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let line = record.position().map_or(records.len() as u64 + 2, |p| p.line());
        let row = Row {
            record: &record,
            line,
        };
        records.push(parse_record(&row, &cols, date_config)?);
    }

    Ok(Dataset::new(records))
}

/// Load the dataset from a file, logging progress.
///
/// Any failure is fatal: no partially loaded dataset is ever returned.
pub fn load_dataset(path: &Path, date_config: &DateFormatConfig) -> Result<Dataset> {
    log_load_start(path);
    let start = Instant::now();

    let file = safe_open_file(path, "sales dataset")?;
    let dataset = read_dataset(file, date_config)
        .map_err(|e| e.context(format!("Failed to load {}", path.display())))?;

    let undated = dataset
        .records()
        .iter()
        .filter(|r| r.order_date.is_none())
        .count();
    log_load_complete(path, dataset.count(), undated, start.elapsed());
    Ok(dataset)
}
