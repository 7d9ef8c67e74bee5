//! Run configuration that the CLI assembles from defaults, environment, and flags.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Column indices as the caller supplied them, before validation.
///
/// Signed so that negative input survives long enough to be rejected with a
/// proper error instead of a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnArgs {
    pub chinese_column: i64,
    pub measure_word_column: i64,
    pub measure_word_pinyin_column: Option<i64>,
    pub measure_word_english_column: Option<i64>,
}

impl Default for ColumnArgs {
    fn default() -> Self {
        Self {
            chinese_column: 0,
            measure_word_column: 1,
            measure_word_pinyin_column: None,
            measure_word_english_column: None,
        }
    }
}

pub const DELIMITER_ENV: &str = "MWFILL_DELIMITER";
pub const REFERENCE_FILE_ENV: &str = "MWFILL_REFERENCE_FILE";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Field delimiter of the input file.
    pub delimiter: u8,

    /// Field delimiter of the output file. Falls back to `delimiter`.
    pub output_delimiter: Option<u8>,

    pub input_path: PathBuf,
    pub output_path: PathBuf,

    /// Reference TSV to use instead of the bundled classifier table.
    pub reference_path: Option<PathBuf>,

    /// Optional JSON summary of the run.
    pub report_path: Option<PathBuf>,

    pub columns: ColumnArgs,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delimiter: b'\t', // Anki exports are tab-separated
            output_delimiter: None,
            input_path: PathBuf::new(),
            output_path: PathBuf::new(),
            reference_path: None,
            report_path: None,
            columns: ColumnArgs::default(),
        }
    }
}

impl RunConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `MWFILL_DELIMITER`: input delimiter (single character)
    /// - `MWFILL_REFERENCE_FILE`: path to a reference TSV
    ///
    /// An invalid `MWFILL_DELIMITER` is an error rather than silently ignored,
    /// since it changes how every row is split.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`RunConfig::from_env`], reading variables through `var`.
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(s) = var(DELIMITER_ENV) {
            cfg.delimiter = parse_delimiter(&s)?;
        }

        if let Some(s) = var(REFERENCE_FILE_ENV) {
            if !s.is_empty() {
                cfg.reference_path = Some(PathBuf::from(s));
            }
        }

        Ok(cfg)
    }

    pub fn effective_output_delimiter(&self) -> u8 {
        self.output_delimiter.unwrap_or(self.delimiter)
    }
}

/// Parse a delimiter argument. It must be exactly one character, and since
/// the CSV layer splits on bytes that character must be ASCII.
pub fn parse_delimiter(raw: &str) -> Result<u8> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        (Some(c), None) => Err(Error::Argument(format!(
            "delimiter must be a single-byte (ASCII) character, got {c:?}"
        ))),
        _ => Err(Error::Argument(format!(
            "delimiter must be of length 1, got one of length {}. Value: {raw:?}",
            raw.chars().count()
        ))),
    }
}
