//! Grouping helpers shared by the aggregation variants

use std::hash::Hash;
use std::ops::AddAssign;

use itertools::Itertools;
use rustc_hash::FxHashMap;

/// Accumulates one value per key, remembering the order keys were first seen
#[derive(Debug, Clone)]
pub struct EncounterGroups<K, V> {
    index: FxHashMap<K, usize>,
    groups: Vec<(K, V)>,
}

impl<K, V> Default for EncounterGroups<K, V> {
    fn default() -> Self {
        Self {
            index: FxHashMap::default(),
            groups: Vec::new(),
        }
    }
}

impl<K, V> EncounterGroups<K, V>
where
    K: Hash + Eq + Clone,
    V: AddAssign + Default,
{
    /// Create an empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to the group of `key`, opening the group if needed
    pub fn add(&mut self, key: K, value: V) {
        if let Some(&slot) = self.index.get(&key) {
            self.groups[slot].1 += value;
        } else {
            self.index.insert(key.clone(), self.groups.len());
            self.groups.push((key, value));
        }
    }

    /// Number of distinct keys seen
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether no key was seen
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Groups in first-encounter order
    #[must_use]
    pub fn into_groups(self) -> Vec<(K, V)> {
        self.groups
    }
}

impl<K, V> EncounterGroups<K, V>
where
    K: Hash + Eq + Clone,
    V: AddAssign + Default + PartialOrd,
{
    /// Groups sorted by descending value; equal values keep encounter order
    #[must_use]
    pub fn into_descending(self) -> Vec<(K, V)> {
        self.groups
            .into_iter()
            .sorted_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal))
            .collect()
    }
}

/// Round a monetary value to two decimals, half to even.
///
/// Applied at the output boundary only; sums are accumulated unrounded.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Label of a calendar period, e.g. `1/2003`
#[must_use]
pub fn period_label((year, month): (i32, u32)) -> String {
    format!("{month}/{year}")
}
