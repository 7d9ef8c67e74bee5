//! Classifier reference table loading.
//!
//! The table ships inside the binary. Each line is
//! `word<TAB>measure word<TAB>pinyin<TAB>english category`; the file is
//! tab-separated no matter which delimiter the notes use.

use std::path::Path;

use mwfill_core::types::ReferenceTable;

use crate::error::Result;
use crate::readers::csv::CsvTableReader;

/// Classifier table compiled into the binary.
pub const BUNDLED_REFERENCE: &str = include_str!("../../../data/classifiersAll.tsv");

/// Parse reference TSV text into a lookup table.
pub fn parse_reference(text: &str) -> Result<ReferenceTable> {
    let rows = CsvTableReader::tsv().read_str(text)?;
    Ok(ReferenceTable::from_rows(&rows)?)
}

/// Load the reference table from `path`, or the bundled table when `None`.
pub fn load_reference(path: Option<&Path>) -> Result<ReferenceTable> {
    let table = match path {
        Some(p) => {
            let rows = CsvTableReader::tsv().read_path(p)?;
            ReferenceTable::from_rows(&rows).map_err(|e| crate::Error::from(e).at(p))?
        }
        None => parse_reference(BUNDLED_REFERENCE)?,
    };
    tracing::debug!(
        entries = table.len(),
        source = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "bundled".into()),
        "loaded reference table"
    );
    Ok(table)
}
