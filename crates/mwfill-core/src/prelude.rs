//! Convenient re-exports for downstream crates.

pub use crate::config::{parse_delimiter, ColumnArgs, RunConfig, DELIMITER_ENV};
pub use crate::error::{Error, Result};
pub use crate::types::{ColumnSpec, Miss, ReferenceRecord, ReferenceTable, Row, RunReport, Table};
