//! Row/table aliases, the classifier reference table, and the validated
//! column layout the merge engine works against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One note: ordered string cells addressed by zero-based index.
pub type Row = Vec<String>;

/// Rows in file order. The first row's width is the nominal column count.
pub type Table = Vec<Row>;

/// Measure-word data attached to one Chinese word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRecord {
    pub measure_word: String,
    pub measure_word_pinyin: String,
    pub measure_word_english_category: String,
}

/// Lookup from a Chinese word to its measure-word record.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceTable {
    entries: HashMap<String, ReferenceRecord>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table from `[key, measure_word, pinyin, english_category]` rows.
    ///
    /// Short rows are padded with empty fields and extra fields are ignored.
    /// A later row with the same key replaces an earlier one. A row with no
    /// fields at all has no key and is rejected; `line` in the error is 1-based.
    pub fn from_rows<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (idx, row) in rows.into_iter().enumerate() {
            let mut fields = row.into_iter().take(4).map(Into::<String>::into);
            let key = fields
                .next()
                .ok_or(Error::MalformedReferenceRow { line: idx + 1 })?;
            let mut next = || fields.next().unwrap_or_default();
            let record = ReferenceRecord {
                measure_word: next(),
                measure_word_pinyin: next(),
                measure_word_english_category: next(),
            };
            table.insert(key, record);
        }
        Ok(table)
    }

    /// Insert or overwrite the record for `key`.
    pub fn insert(&mut self, key: impl Into<String>, record: ReferenceRecord) {
        self.entries.insert(key.into(), record);
    }

    pub fn get(&self, key: &str) -> Option<&ReferenceRecord> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Column layout after validation.
///
/// Obtain one through `mwfill_merge::validate_columns`, which guarantees the
/// join column exists in the input. Write columns may lie past the end of a
/// row; the merge pads such rows with empty cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub chinese_column: usize,
    pub measure_word_column: usize,
    pub measure_word_pinyin_column: Option<usize>,
    pub measure_word_english_column: Option<usize>,
}

impl ColumnSpec {
    /// Highest column index the merge may write to.
    pub fn max_write_column(&self) -> usize {
        [
            Some(self.measure_word_column),
            self.measure_word_pinyin_column,
            self.measure_word_english_column,
        ]
        .into_iter()
        .flatten()
        .max()
        .unwrap_or(self.measure_word_column)
    }
}

/// A note whose join key had no reference entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Miss {
    /// Zero-based row index in the input table.
    pub row: usize,
    /// The unmatched key; empty when the row was too short to hold one.
    pub key: String,
}

/// Summary written alongside the output when a report path is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub tool_version: String,
    pub input_rows: usize,
    pub num_edited: usize,
    pub misses: Vec<Miss>,
}

impl RunReport {
    pub fn new(input_rows: usize, num_edited: usize, misses: Vec<Miss>) -> Self {
        Self {
            tool_version: crate::VERSION.to_string(),
            input_rows,
            num_edited,
            misses,
        }
    }
}
