#![forbid(unsafe_code)]
//! mwfill-io: everything that touches bytes on disk.
//!
//! - `readers`: delimited text into a `Table`
//! - `writers`: `Table` back to delimited text, plus the JSON run report
//! - `reference`: the bundled classifier table and user-supplied overrides

pub mod error;
pub mod readers;
pub mod reference;
pub mod writers;

pub use error::{Error, Result};
pub use readers::csv::CsvTableReader;
pub use reference::{load_reference, parse_reference, BUNDLED_REFERENCE};
pub use writers::csv::CsvTableWriter;
pub use writers::json::write_report;
