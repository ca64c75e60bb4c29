use crate::core::forcefield::key::TypeKey;
use crate::core::forcefield::subterm::SubTerm;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::io::Write;

/// A sub-term query that no resolution tier could satisfy, keyed by the canonical
/// literal types it was first asked with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MissingRecord {
    pub sub_term: SubTerm,
    pub key: TypeKey,
}

impl MissingRecord {
    pub fn new(sub_term: SubTerm, key: TypeKey) -> Self {
        Self { sub_term, key }
    }
}

impl fmt::Display for MissingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to find {} data for {}",
            self.sub_term.label(),
            self.key.types().join(" ")
        )
    }
}

/// Run-scoped, append-only, duplicate-free accumulator of [`MissingRecord`]s in
/// first-recorded order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingSet {
    records: Vec<MissingRecord>,
    seen: HashSet<MissingRecord>,
}

impl MissingSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a miss; returns `false` if the same `(sub_term, key)` was already present.
    pub fn record(&mut self, sub_term: SubTerm, key: TypeKey) -> bool {
        let record = MissingRecord::new(sub_term, key);
        if self.seen.contains(&record) {
            return false;
        }
        self.seen.insert(record.clone());
        self.records.push(record);
        true
    }

    /// Appends the records of `other` that are not yet present, keeping their order.
    pub fn merge(&mut self, other: MissingSet) {
        self.extend(other.records);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, sub_term: SubTerm, key: &TypeKey) -> bool {
        self.seen.contains(&MissingRecord::new(sub_term, key.clone()))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MissingRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<MissingRecord> {
        self.records
    }
}

impl Extend<MissingRecord> for MissingSet {
    fn extend<T: IntoIterator<Item = MissingRecord>>(&mut self, iter: T) {
        for record in iter {
            self.record(record.sub_term, record.key);
        }
    }
}

impl<'a> IntoIterator for &'a MissingSet {
    type Item = &'a MissingRecord;
    type IntoIter = std::slice::Iter<'a, MissingRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Writes `records` as CSV with a `sub_term,section,key` header.
pub fn write_missing_csv<W: Write>(records: &[MissingRecord], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["sub_term", "section", "key"])?;
    for record in records {
        let key = record.key.to_string();
        csv_writer.write_record([record.sub_term.code(), record.sub_term.label(), key.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}
