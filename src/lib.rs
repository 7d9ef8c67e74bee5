#![forbid(unsafe_code)]
//! mwfill: add measure words (classifiers) to Chinese flashcard exports.
//!
//! `fill_measure_words` is the validate-then-merge entry point over the
//! workspace crates; readers and writers live in `mwfill-io`.

use mwfill_core::config::ColumnArgs;
use mwfill_core::types::{ReferenceTable, Row};
use mwfill_merge::{merge_measure_words, validate_columns};

pub use mwfill_merge::MergeOutcome;

/// Validate `columns` against the first row of `rows`, then merge.
///
/// Returns `Ok(None)` for an empty table: there is nothing to validate
/// against and nothing to write.
pub fn fill_measure_words(
    reference: &ReferenceTable,
    rows: &[Row],
    columns: &ColumnArgs,
) -> mwfill_core::Result<Option<MergeOutcome>> {
    let Some(first) = rows.first() else {
        return Ok(None);
    };
    let spec = validate_columns(first.len(), columns)?;
    Ok(Some(merge_measure_words(reference, rows, &spec)))
}
