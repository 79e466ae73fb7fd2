//! Immutable in-memory dataset and the read-only views queries operate on

use std::collections::BTreeSet;
use std::ops::Index;

use crate::models::sale::SaleRecord;

/// The full sales dataset, loaded once and never mutated afterwards.
///
/// Share it between concurrent queries behind an `Arc`; every query only
/// borrows records through a [`FilteredView`].
#[derive(Debug, Default)]
pub struct Dataset {
    records: Vec<SaleRecord>,
}

impl Dataset {
    /// Create a dataset from already typed records
    #[must_use]
    pub const fn new(records: Vec<SaleRecord>) -> Self {
        Self { records }
    }

    /// All records in source order
    #[must_use]
    pub fn records(&self) -> &[SaleRecord] {
        &self.records
    }

    /// Count the total number of records
    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// An unfiltered view over every record
    #[must_use]
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView {
            rows: self.records.iter().collect(),
        }
    }

    /// Distinct non-empty countries, sorted ascending
    #[must_use]
    pub fn countries(&self) -> Vec<String> {
        self.distinct(|r| &r.country)
    }

    /// Distinct non-empty order statuses, sorted ascending
    #[must_use]
    pub fn statuses(&self) -> Vec<String> {
        self.distinct(|r| &r.status)
    }

    fn distinct<F>(&self, field: F) -> Vec<String>
    where
        F: Fn(&SaleRecord) -> &String,
    {
        self.records
            .iter()
            .map(field)
            .filter(|value| !value.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .cloned()
            .collect()
    }
}

impl From<Vec<SaleRecord>> for Dataset {
    fn from(records: Vec<SaleRecord>) -> Self {
        Self::new(records)
    }
}

/// An ordered, borrowed subsequence of a [`Dataset`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView<'a> {
    rows: Vec<&'a SaleRecord>,
}

impl<'a> FilteredView<'a> {
    /// Build a view from borrowed rows, keeping their order
    #[must_use]
    pub const fn from_rows(rows: Vec<&'a SaleRecord>) -> Self {
        Self { rows }
    }

    /// Number of rows in the view
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the view is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the rows in order
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &'a SaleRecord> + '_ {
        self.rows.iter().copied()
    }

    /// The underlying row references
    #[must_use]
    pub fn rows(&self) -> &[&'a SaleRecord] {
        &self.rows
    }
}

impl Index<usize> for FilteredView<'_> {
    type Output = SaleRecord;

    fn index(&self, index: usize) -> &Self::Output {
        self.rows[index]
    }
}

impl<'v, 'a> IntoIterator for &'v FilteredView<'a> {
    type Item = &'a SaleRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a SaleRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter().copied()
    }
}
