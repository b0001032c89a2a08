//! Label counting and ranking.
//!
//! A [`Tally`] accumulates `label -> count` pairs while files are analyzed.
//! Once the walk is complete it is turned into [`RankedCounts`], which is
//! ordered by descending count and serializes as a JSON object that keeps
//! that order.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Running `label -> count` totals for a single category.
///
/// Only labels with at least one observed match are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    counts: BTreeMap<String, usize>,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `n` occurrences of `label`. Adding zero is a no-op.
    pub fn add(&mut self, label: &str, n: usize) {
        if n == 0 {
            return;
        }
        *self.counts.entry(label.to_string()).or_insert(0) += n;
    }

    /// Record a single occurrence of `label`.
    pub fn increment(&mut self, label: &str) {
        self.add(label, 1);
    }

    /// Merge another tally into this one.
    pub fn merge(&mut self, other: &Tally) {
        for (label, count) in &other.counts {
            self.add(label, *count);
        }
    }

    /// Current count for `label` (0 if never seen).
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Rank labels by descending count.
    ///
    /// Labels come out of the map in ascending order and the sort is stable,
    /// so equal counts stay ordered by label.
    pub fn rank(&self) -> RankedCounts {
        let mut entries: Vec<(String, usize)> = self
            .counts
            .iter()
            .map(|(label, count)| (label.clone(), *count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        RankedCounts { entries }
    }
}

/// Final, read-only counts for a category ordered by descending usage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedCounts {
    entries: Vec<(String, usize)>,
}

impl RankedCounts {
    /// Build ranked counts from arbitrary pairs, dropping zero counts.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let mut entries: Vec<(String, usize)> = pairs
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| (label.into(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// Keep the given order, only dropping zero counts.
    ///
    /// Used for counters with a fixed, meaningful order such as color families.
    pub fn in_order<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(label, count)| (label.into(), count))
            .collect();
        Self { entries }
    }

    /// Re-sort by descending count. Stable, so an already ranked list is unchanged.
    pub fn rerank(&mut self) {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(label, count)| (label.as_str(), *count))
    }

    /// The first `n` entries.
    pub fn top(&self, n: usize) -> &[(String, usize)] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Number of distinct labels.
    pub fn unique(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for RankedCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}
