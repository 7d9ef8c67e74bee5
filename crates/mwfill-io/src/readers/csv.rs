//! Delimited text reader.
//!
//! No header handling: every line is a note. Rows may have different widths
//! and fields follow the usual double-quote rules, which is what Anki emits.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use ::csv::ReaderBuilder;
use mwfill_core::types::{Row, Table};

use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy)]
pub struct CsvTableReader {
    delimiter: u8,
}

impl CsvTableReader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn tsv() -> Self {
        Self::new(b'\t')
    }

    pub fn read_path(&self, path: &Path) -> Result<Table> {
        let f = File::open(path).map_err(|e| Error::from(e).at(path))?;
        self.read_from(f).map_err(|e| e.at(path))
    }

    pub fn read_str(&self, text: &str) -> Result<Table> {
        self.read_from(text.as_bytes())
    }

    pub fn read_from<R: Read>(&self, reader: R) -> Result<Table> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_reader(reader);

        let mut rows: Table = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let row: Row = record.iter().map(str::to_string).collect();
            rows.push(row);
        }

        // Spreadsheet exports sometimes lead with a byte-order mark.
        if let Some(first) = rows.first_mut().and_then(|r| r.first_mut()) {
            if first.starts_with(BOM) {
                *first = first.trim_start_matches(BOM).to_string();
            }
        }

        Ok(rows)
    }
}
