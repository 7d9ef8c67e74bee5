#![forbid(unsafe_code)]
//! mwfill-merge: validate the requested column layout and merge reference
//! data into notes.
//!
//! Design intent:
//! - The merge is a pure function of (reference table, rows, column spec).
//!   It never mutates its input rows and never logs on its own.
//! - Unmatched notes are data (`Miss`), handed to a `Reporter` chosen by the
//!   caller. The binary uses `TracingReporter`.

pub mod merge;
pub mod report;
pub mod validate;

pub use merge::{merge_measure_words, set_cells, MeasureWordMerge, MergeOutcome};
pub use report::{CollectingReporter, Reporter, TracingReporter};
pub use validate::{parse_column, parse_optional_column, validate_columns, MAX_COLUMN};
