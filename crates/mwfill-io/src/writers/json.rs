//! Run report writer (pretty-printed JSON).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mwfill_core::types::RunReport;

use crate::error::{Error, Result};

pub fn write_report(path: &Path, report: &RunReport) -> Result<()> {
    let f = File::create(path).map_err(|e| Error::from(e).at(path))?;
    let mut writer = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
