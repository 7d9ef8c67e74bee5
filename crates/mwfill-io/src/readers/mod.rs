//! Readers that load a whole delimited file into memory.

pub mod csv;
