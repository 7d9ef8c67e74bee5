//! Column argument checks. These run once, before any row is touched.

use mwfill_core::config::ColumnArgs;
use mwfill_core::error::{Error, Result};
use mwfill_core::types::ColumnSpec;

/// Largest write column accepted. Rows are widened up to this index, so it
/// bounds the memory a single note can take.
pub const MAX_COLUMN: usize = 1024;

/// Parse a column index given on the command line.
///
/// Integer literals are accepted, as are float literals with no fractional
/// part (`2.0`). Anything else is an `InvalidColumn` error naming `field`.
pub fn parse_column(field: &str, raw: &str) -> Result<i64> {
    let s = raw.trim();
    if let Ok(v) = s.parse::<i64>() {
        return Ok(v);
    }
    match s.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => Ok(f as i64),
        _ => Err(Error::InvalidColumn(format!(
            "{field} must be an integer; got {raw:?}"
        ))),
    }
}

/// Like [`parse_column`], but an absent or blank value means "not set".
pub fn parse_optional_column(field: &str, raw: Option<&str>) -> Result<Option<i64>> {
    match raw {
        Some(s) if !s.trim().is_empty() => parse_column(field, s).map(Some),
        _ => Ok(None),
    }
}

/// Check `args` against an input whose first row has `num_columns` cells.
///
/// The join column must be an existing column. Write columns only need to be
/// non-negative; indices past the end widen the row during the merge.
pub fn validate_columns(num_columns: usize, args: &ColumnArgs) -> Result<ColumnSpec> {
    let chinese_column = usize::try_from(args.chinese_column)
        .ok()
        .filter(|c| *c < num_columns)
        .ok_or_else(|| {
            Error::InvalidColumn(format!(
                "chineseColumn must be one of the existing columns in the input (from 0 to {}); but got {}",
                num_columns as i64 - 1,
                args.chinese_column
            ))
        })?;

    Ok(ColumnSpec {
        chinese_column,
        measure_word_column: write_column("measureWordColumn", args.measure_word_column)?,
        measure_word_pinyin_column: args
            .measure_word_pinyin_column
            .map(|c| write_column("measureWordPinyinColumn", c))
            .transpose()?,
        measure_word_english_column: args
            .measure_word_english_column
            .map(|c| write_column("measureWordEnglishColumn", c))
            .transpose()?,
    })
}

fn write_column(field: &str, value: i64) -> Result<usize> {
    let column = usize::try_from(value).map_err(|_| {
        Error::InvalidColumn(format!("{field} must be non-negative, but received {value}"))
    })?;
    if column > MAX_COLUMN {
        return Err(Error::InvalidColumn(format!(
            "{field} must be at most {MAX_COLUMN}, but received {value}"
        )));
    }
    Ok(column)
}
