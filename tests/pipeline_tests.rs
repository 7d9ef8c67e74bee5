//! File-to-file runs through the reader, merge, and writer.


use mwfill::fill_measure_words;
use mwfill_core::config::ColumnArgs;
use mwfill_io::{load_reference, CsvTableReader, CsvTableWriter};
use std::fs;
use test_data_gen::{generate_notes, small_reference};

#[test]
fn test_tsv_in_tsv_out_with_bundled_reference() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("notes.tsv");
    let output = dir.path().join("out.tsv");
    fs::write(&input, "猫\tcat\n书\tbook\n你好\thello\n").unwrap();

    let reference = load_reference(None).unwrap();
    let rows = CsvTableReader::tsv().read_path(&input).unwrap();
    let args = ColumnArgs {
        chinese_column: 0,
        measure_word_column: 2,
        measure_word_pinyin_column: Some(3),
        measure_word_english_column: None,
    };
    let out = fill_measure_words(&reference, &rows, &args).unwrap().unwrap();
    CsvTableWriter::new(b'\t').to_path(&out.rows, &output).unwrap();

    let back = CsvTableReader::tsv().read_path(&output).unwrap();
    assert_eq!(back.len(), 3);
    assert_eq!(back[0], vec!["猫", "cat", "只", "zhī"]);
    assert_eq!(back[1], vec!["书", "book", "本", "běn"]);
    assert_eq!(back[2], vec!["你好", "hello", "", ""]);
    assert_eq!(out.num_edited, 2);
}

#[test]
fn test_comma_delimited_input_keeps_quoted_fields() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("notes.csv");
    fs::write(&input, "车,\"a car, the vehicle\",\n").unwrap();

    let rows = CsvTableReader::new(b',').read_path(&input).unwrap();
    let args = ColumnArgs {
        chinese_column: 0,
        measure_word_column: 2,
        measure_word_pinyin_column: None,
        measure_word_english_column: None,
    };
    let out = fill_measure_words(&small_reference(), &rows, &args)
        .unwrap()
        .unwrap();
    let bytes = CsvTableWriter::new(b',').to_bytes(&out.rows).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert_eq!(text.trim_end(), "车,\"a car, the vehicle\",辆");
}

#[test]
fn test_large_generated_table_round_trips() {
    let rows = generate_notes(500);
    let bytes = CsvTableWriter::new(b'\t').to_bytes(&rows).unwrap();
    let back = CsvTableReader::tsv()
        .read_str(&String::from_utf8(bytes).unwrap())
        .unwrap();
    assert_eq!(back, rows);
}
