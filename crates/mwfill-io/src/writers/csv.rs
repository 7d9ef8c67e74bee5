//! Delimited text writer.
//!
//! The whole table is serialized into memory first and only then written to
//! the destination, so a failure mid-serialization never leaves a truncated
//! output file behind.

use std::fs;
use std::path::Path;

use ::csv::WriterBuilder;
use mwfill_core::types::Row;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct CsvTableWriter {
    delimiter: u8,
}

impl CsvTableWriter {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Serialize `rows` to bytes. Rows may differ in width.
    pub fn to_bytes(&self, rows: &[Row]) -> Result<Vec<u8>> {
        let mut wtr = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_writer(Vec::new());
        for row in rows {
            wtr.write_record(row)?;
        }
        wtr.into_inner()
            .map_err(|e| Error::Io(e.into_error()))
    }

    pub fn to_path(&self, rows: &[Row], path: &Path) -> Result<()> {
        let bytes = self.to_bytes(rows)?;
        fs::write(path, bytes).map_err(|e| Error::from(e).at(path))
    }
}
