//! Immutable search model
//!
//! The user-facing façade: build once, query with [`Model::search`], and
//! derive new models with [`Model::insert`] / [`Model::remove`]. Mutation
//! always rebuilds the index over a derived record list; the receiving
//! model is never touched.

use crate::index::{IndexStats, SuffixIndex};
use crate::record::Record;
use ahash::AHashSet;
use anyhow::{bail, Result};

/// An immutable substring-search model over a list of records.
#[derive(Debug)]
pub struct Model {
    records: Vec<Record>,
    index: SuffixIndex,
}

impl Model {
    /// Build a model over `records`, constructing the index eagerly.
    ///
    /// Fails without building anything if any record lacks a string
    /// `"string"` attribute. An empty record list is valid; every query
    /// then returns nothing.
    pub fn build(records: Vec<Record>) -> Result<Self> {
        for (i, record) in records.iter().enumerate() {
            if record.text().is_none() {
                bail!("record {i} has no string \"string\" attribute");
            }
        }
        let texts: Vec<&str> = records
            .iter()
            .map(|r| r.text().unwrap_or_default())
            .collect();
        let index = SuffixIndex::build(&texts);
        Ok(Self { records, index })
    }

    /// Records whose text contains `query`, case-insensitively.
    ///
    /// Each matching record appears exactly once, in a deterministic
    /// order. The empty query matches every record, in stored order.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        if query.is_empty() {
            return self.records.iter().collect();
        }
        self.index
            .matching_records(query)
            .into_iter()
            .map(|id| &self.records[id as usize])
            .collect()
    }

    /// Like [`search`](Self::search), but per occurrence rather than per
    /// record: up to `limit` matches in suffix order, each carrying the
    /// code-point offset of the occurrence within the record's text.
    pub fn search_with_positions(&self, query: &str, limit: usize) -> Vec<(&Record, usize)> {
        self.index
            .hits(query, limit)
            .into_iter()
            .map(|hit| (&self.records[hit.record as usize], hit.offset))
            .collect()
    }

    /// Whether any record's text contains `query`
    pub fn contains(&self, query: &str) -> bool {
        self.index.contains(query)
    }

    /// Total number of occurrences of `query` across all records
    pub fn occurrences(&self, query: &str) -> usize {
        self.index.count_matches(query)
    }

    /// Derive a new model with `added` records appended after the current
    /// ones. A lone record is passed as a one-element array:
    /// `model.insert([record])`.
    pub fn insert<I>(&self, added: I) -> Result<Model>
    where
        I: IntoIterator<Item = Record>,
    {
        let mut records = self.records.clone();
        records.extend(added);
        Model::build(records)
    }

    /// Derive a new model without the records matched by `criteria`.
    ///
    /// A record survives iff every filter returns `true` for it, its text
    /// is not listed in the string criteria, and it is not canonically
    /// equal to any record criterion. Empty criteria reproduce the model
    /// unchanged.
    pub fn remove(&self, criteria: &RemoveCriteria) -> Result<Model> {
        let strings: AHashSet<&str> = criteria.strings.iter().map(String::as_str).collect();
        let records: Vec<Record> = self
            .records
            .iter()
            .filter(|&record| {
                criteria.filters.iter().all(|keep| keep(record))
                    && record.text().map_or(true, |text| !strings.contains(text))
                    && !criteria
                        .records
                        .iter()
                        .any(|probe| record.canonical_eq(probe))
            })
            .cloned()
            .collect();
        Model::build(records)
    }

    /// All records, in stored order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records in the model
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the model holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Statistics about the underlying index
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}

/// Criteria for [`Model::remove`]: any combination of keep-filters, exact
/// text matches, and canonical record matches.
#[derive(Default)]
pub struct RemoveCriteria {
    filters: Vec<Box<dyn Fn(&Record) -> bool>>,
    strings: Vec<String>,
    records: Vec<Record>,
}

impl RemoveCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep records for which `keep` returns `true`; drop the rest.
    ///
    /// Filters compose like [`Iterator::filter`]: with several filters a
    /// record must pass all of them to survive.
    pub fn filter(mut self, keep: impl Fn(&Record) -> bool + 'static) -> Self {
        self.filters.push(Box::new(keep));
        self
    }

    /// Drop records whose text equals `text`
    pub fn string(mut self, text: impl Into<String>) -> Self {
        self.strings.push(text.into());
        self
    }

    /// Drop records whose text equals any of `texts`
    pub fn strings<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strings.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Drop records canonically equal to `record`
    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Drop records canonically equal to any of `records`
    pub fn records<I>(mut self, records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        self.records.extend(records);
        self
    }
}
