//! Measure-word merge.
//!
//! For every note, the join key is looked up in the reference table and the
//! record's fields are written into the configured columns. Notes without a
//! match get empty strings in those columns and are listed in the outcome.

use mwfill_core::types::{ColumnSpec, Miss, ReferenceRecord, ReferenceTable, Row, Table};
use serde::{Deserialize, Serialize};

use crate::report::Reporter;

/// Result of one merge pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// Same length and order as the input.
    pub rows: Table,
    /// Number of notes whose key was found.
    pub num_edited: usize,
    /// Notes whose key was not found, in row order.
    pub misses: Vec<Miss>,
}

impl MergeOutcome {
    /// Hand every miss to `reporter`, in row order.
    pub fn report_to(&self, reporter: &mut dyn Reporter) {
        for miss in &self.misses {
            reporter.unmatched(miss);
        }
    }
}

/// Reference table plus validated column layout, applied to whole tables.
pub struct MeasureWordMerge<'a> {
    reference: &'a ReferenceTable,
    spec: ColumnSpec,
}

impl<'a> MeasureWordMerge<'a> {
    pub fn new(reference: &'a ReferenceTable, spec: ColumnSpec) -> Self {
        Self { reference, spec }
    }

    /// Merge one note. Returns the new row and whether the key matched.
    pub fn apply_row(&self, row: &[String]) -> (Row, bool) {
        let key = row
            .get(self.spec.chinese_column)
            .map(String::as_str)
            .unwrap_or("");
        match self.reference.get(key) {
            Some(record) => (set_cells(row, &self.writes(Some(record))), true),
            None => (set_cells(row, &self.writes(None)), false),
        }
    }

    /// Merge every note of `rows`.
    pub fn apply(&self, rows: &[Row]) -> MergeOutcome {
        let mut out = Vec::with_capacity(rows.len());
        let mut misses = Vec::new();
        let mut num_edited = 0;

        for (idx, row) in rows.iter().enumerate() {
            let (merged, matched) = self.apply_row(row);
            if matched {
                num_edited += 1;
            } else {
                misses.push(Miss {
                    row: idx,
                    key: row
                        .get(self.spec.chinese_column)
                        .cloned()
                        .unwrap_or_default(),
                });
            }
            out.push(merged);
        }

        MergeOutcome {
            rows: out,
            num_edited,
            misses,
        }
    }

    /// (column, value) pairs for the configured columns; blanks on a miss.
    fn writes<'r>(&self, record: Option<&'r ReferenceRecord>) -> Vec<(usize, &'r str)> {
        let (measure_word, pinyin, english) = match record {
            Some(r) => (
                r.measure_word.as_str(),
                r.measure_word_pinyin.as_str(),
                r.measure_word_english_category.as_str(),
            ),
            None => ("", "", ""),
        };
        [
            Some((self.spec.measure_word_column, measure_word)),
            self.spec.measure_word_pinyin_column.map(|c| (c, pinyin)),
            self.spec.measure_word_english_column.map(|c| (c, english)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Merge `rows` against `reference` using the layout in `spec`.
pub fn merge_measure_words(
    reference: &ReferenceTable,
    rows: &[Row],
    spec: &ColumnSpec,
) -> MergeOutcome {
    MeasureWordMerge::new(reference, *spec).apply(rows)
}

/// Copy `row` and set each `(column, value)` in order.
///
/// Columns past the end pad the copy with empty cells first. A later pair
/// writing the same column wins.
pub fn set_cells(row: &[String], writes: &[(usize, &str)]) -> Row {
    let width = writes
        .iter()
        .map(|(c, _)| c + 1)
        .max()
        .unwrap_or(0)
        .max(row.len());
    let mut out = Vec::with_capacity(width);
    out.extend_from_slice(row);
    out.resize(width, String::new());
    for (col, value) in writes {
        out[*col] = (*value).to_string();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::CollectingReporter;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|s| s.to_string()).collect()
    }

    fn reference() -> ReferenceTable {
        let mut t = ReferenceTable::new();
        t.insert(
            "只",
            ReferenceRecord {
                measure_word: "个".into(),
                measure_word_pinyin: "gè".into(),
                measure_word_english_category: "general".into(),
            },
        );
        t
    }

    fn full_spec() -> ColumnSpec {
        ColumnSpec {
            chinese_column: 0,
            measure_word_column: 1,
            measure_word_pinyin_column: Some(2),
            measure_word_english_column: Some(3),
        }
    }

    #[test]
    fn fills_all_configured_columns_on_match() {
        let rows = vec![row(&["只", "", "", ""])];
        let out = merge_measure_words(&reference(), &rows, &full_spec());
        assert_eq!(out.rows, vec![row(&["只", "个", "gè", "general"])]);
        assert_eq!(out.num_edited, 1);
        assert!(out.misses.is_empty());
    }

    #[test]
    fn blanks_columns_and_records_miss() {
        let rows = vec![row(&["猫", "old", "old", "old"])];
        let out = merge_measure_words(&reference(), &rows, &full_spec());
        assert_eq!(out.rows, vec![row(&["猫", "", "", ""])]);
        assert_eq!(out.num_edited, 0);
        assert_eq!(
            out.misses,
            vec![Miss {
                row: 0,
                key: "猫".into()
            }]
        );
    }

    #[test]
    fn unset_optional_columns_are_untouched() {
        let spec = ColumnSpec {
            measure_word_pinyin_column: None,
            measure_word_english_column: None,
            ..full_spec()
        };
        let rows = vec![row(&["只", "", "keep", "keep"]), row(&["猫", "x", "keep", "keep"])];
        let out = merge_measure_words(&reference(), &rows, &spec);
        assert_eq!(out.rows[0], row(&["只", "个", "keep", "keep"]));
        assert_eq!(out.rows[1], row(&["猫", "", "keep", "keep"]));
    }

    #[test]
    fn widens_short_rows() {
        let spec = ColumnSpec {
            chinese_column: 0,
            measure_word_column: 10,
            measure_word_pinyin_column: None,
            measure_word_english_column: None,
        };
        let rows = vec![row(&["只", "a", "b"])];
        let out = merge_measure_words(&reference(), &rows, &spec);
        let merged = &out.rows[0];
        assert_eq!(merged.len(), 11);
        assert!(merged[3..10].iter().all(|c| c.is_empty()));
        assert_eq!(merged[10], "个");
        assert_eq!(&merged[..3], &rows[0][..]);
    }

    #[test]
    fn widens_on_miss_too() {
        let spec = ColumnSpec {
            chinese_column: 0,
            measure_word_column: 4,
            measure_word_pinyin_column: None,
            measure_word_english_column: None,
        };
        let out = merge_measure_words(&reference(), &[row(&["猫"])], &spec);
        assert_eq!(out.rows[0], row(&["猫", "", "", "", ""]));
    }

    #[test]
    fn input_rows_are_not_mutated() {
        let rows = vec![row(&["只", "", "", ""])];
        let before = rows.clone();
        let _ = merge_measure_words(&reference(), &rows, &full_spec());
        assert_eq!(rows, before);
    }

    #[test]
    fn short_row_without_key_is_a_miss() {
        let spec = ColumnSpec {
            chinese_column: 2,
            ..full_spec()
        };
        let rows = vec![row(&["只", "", "只"]), row(&["x"])];
        let out = merge_measure_words(&reference(), &rows, &spec);
        assert_eq!(out.num_edited, 1);
        assert_eq!(
            out.misses,
            vec![Miss {
                row: 1,
                key: String::new()
            }]
        );
        assert_eq!(out.rows[1], row(&["x", "", "", ""]));
    }

    #[test]
    fn counts_and_order_over_mixed_input() {
        let rows = vec![
            row(&["只", ""]),
            row(&["猫", ""]),
            row(&["只", ""]),
            row(&["狗", ""]),
        ];
        let spec = ColumnSpec {
            measure_word_pinyin_column: None,
            measure_word_english_column: None,
            ..full_spec()
        };
        let out = merge_measure_words(&reference(), &rows, &spec);
        assert_eq!(out.rows.len(), rows.len());
        assert_eq!(out.num_edited, 2);
        let missed: Vec<usize> = out.misses.iter().map(|m| m.row).collect();
        assert_eq!(missed, vec![1, 3]);
        for (i, r) in out.rows.iter().enumerate() {
            assert_eq!(r[0], rows[i][0]);
        }
    }

    #[test]
    fn merging_twice_is_idempotent() {
        let rows = vec![row(&["只", "", ""]), row(&["猫", "z", "z"]), row(&["只"])];
        let spec = ColumnSpec {
            measure_word_english_column: Some(5),
            ..full_spec()
        };
        let once = merge_measure_words(&reference(), &rows, &spec);
        let twice = merge_measure_words(&reference(), &once.rows, &spec);
        assert_eq!(once.rows, twice.rows);
        assert_eq!(once.num_edited, twice.num_edited);
    }

    #[test]
    fn report_to_forwards_misses_in_order() {
        let rows = vec![row(&["猫", ""]), row(&["只", ""]), row(&["狗", ""])];
        let out = merge_measure_words(&reference(), &rows, &full_spec());
        let mut reporter = CollectingReporter::default();
        out.report_to(&mut reporter);
        let keys: Vec<&str> = reporter.misses.iter().map(|m| m.key.as_str()).collect();
        assert_eq!(keys, vec!["猫", "狗"]);
    }

    #[test]
    fn set_cells_later_write_wins() {
        let out = set_cells(&row(&["a"]), &[(1, "x"), (1, "y")]);
        assert_eq!(out, row(&["a", "y"]));
    }

    #[test]
    fn set_cells_without_writes_copies() {
        let r = row(&["a", "b"]);
        assert_eq!(set_cells(&r, &[]), r);
    }
}
