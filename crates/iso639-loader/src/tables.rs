//! Lookup table construction.
//!
//! Turns the flat record list into the three keyed tables:
//!
//! - ISO 639-3: every record under its `part3` code.
//! - ISO 639-2: records with a bibliographic code under `part2b`, and again
//!   under `part2t` when that differs.
//! - ISO 639-1: records with a two-letter code under `part1`.
//!
//! Records are stored once; tables map keys to record indices, so the two
//! ISO 639-2 keys of a record always resolve to the same record.

use std::collections::BTreeMap;

use iso639_types::LanguageRecord;
use tracing::{debug, info};

use crate::parser::RawRow;
use crate::types::{CodeTableError, CodeTableResult, TableKind, TableStats};

/// The three lookup tables over one record set.
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    /// Records in source order.
    records: Vec<LanguageRecord>,
    /// ISO 639-3 code -> record index.
    part3: BTreeMap<String, usize>,
    /// ISO 639-2 code (B or T) -> record index.
    part2: BTreeMap<String, usize>,
    /// ISO 639-1 code -> record index.
    part1: BTreeMap<String, usize>,
}

impl LookupTables {
    /// Creates empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the tables from parsed rows.
    ///
    /// # Errors
    /// Fails on the first row that doesn't convert into a record and on the
    /// first key collision between two records.
    pub fn build(rows: &[RawRow]) -> CodeTableResult<Self> {
        let records = rows
            .iter()
            .map(LanguageRecord::try_from)
            .collect::<CodeTableResult<Vec<_>>>()?;

        Self::from_records(records)
    }

    /// Builds the tables from already converted records.
    pub fn from_records(
        records: impl IntoIterator<Item = LanguageRecord>,
    ) -> CodeTableResult<Self> {
        let mut tables = Self::new();
        for record in records {
            tables.insert(record)?;
        }

        info!(
            records = tables.records.len(),
            part3 = tables.part3.len(),
            part2 = tables.part2.len(),
            part1 = tables.part1.len(),
            "built lookup tables"
        );
        Ok(tables)
    }

    /// Adds one record to every table it has a key for.
    ///
    /// All keys are checked before anything is inserted, so a rejected
    /// record leaves the tables unchanged.
    pub fn insert(&mut self, record: LanguageRecord) -> CodeTableResult<()> {
        self.check_free(TableKind::Part3, &record.part3, &record)?;
        for key in record.part2_keys() {
            self.check_free(TableKind::Part2, key, &record)?;
        }
        if record.has_part1() {
            self.check_free(TableKind::Part1, &record.part1, &record)?;
        }

        let index = self.records.len();
        self.part3.insert(record.part3.clone(), index);
        for key in record.part2_keys() {
            self.part2.insert(key.to_string(), index);
        }
        if record.has_part1() {
            self.part1.insert(record.part1.clone(), index);
        }

        debug!(part3 = %record.part3, index, "inserted record");
        self.records.push(record);
        Ok(())
    }

    fn check_free(
        &self,
        kind: TableKind,
        key: &str,
        incoming: &LanguageRecord,
    ) -> CodeTableResult<()> {
        match self.table(kind).get(key) {
            Some(&index) => Err(CodeTableError::DuplicateKey {
                table: kind,
                key: key.to_string(),
                existing: self.records[index].part3.clone(),
                incoming: incoming.part3.clone(),
            }),
            None => Ok(()),
        }
    }

    fn table(&self, kind: TableKind) -> &BTreeMap<String, usize> {
        match kind {
            TableKind::Part3 => &self.part3,
            TableKind::Part2 => &self.part2,
            TableKind::Part1 => &self.part1,
        }
    }

    /// Looks up a key in one table.
    pub fn get(&self, kind: TableKind, key: &str) -> Option<&LanguageRecord> {
        self.table(kind).get(key).map(|&index| &self.records[index])
    }

    /// Looks up an ISO 639-3 code.
    pub fn part3(&self, code: &str) -> Option<&LanguageRecord> {
        self.get(TableKind::Part3, code)
    }

    /// Looks up an ISO 639-2 code (bibliographic or terminology).
    pub fn part2(&self, code: &str) -> Option<&LanguageRecord> {
        self.get(TableKind::Part2, code)
    }

    /// Looks up an ISO 639-1 code.
    pub fn part1(&self, code: &str) -> Option<&LanguageRecord> {
        self.get(TableKind::Part1, code)
    }

    /// Returns the number of keys in a table.
    pub fn len(&self, kind: TableKind) -> usize {
        self.table(kind).len()
    }

    /// Returns true if no record has been inserted.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records in source order.
    pub fn records(&self) -> &[LanguageRecord] {
        &self.records
    }

    /// Iterates over a table's entries sorted by key.
    pub fn entries(
        &self,
        kind: TableKind,
    ) -> impl Iterator<Item = (&str, &LanguageRecord)> + '_ {
        self.table(kind)
            .iter()
            .map(|(key, &index)| (key.as_str(), &self.records[index]))
    }

    /// Returns table sizes.
    pub fn stats(&self) -> TableStats {
        TableStats {
            records: self.records.len(),
            part3_entries: self.part3.len(),
            part2_entries: self.part2.len(),
            part1_entries: self.part1.len(),
        }
    }
}
