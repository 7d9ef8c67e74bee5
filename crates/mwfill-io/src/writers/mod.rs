//! Writers for the merged table and the run report.

pub mod csv;
pub mod json;
