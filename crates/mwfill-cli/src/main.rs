//! mwfill CLI: add measure words to a flashcard export.

use clap::Parser;
use mwfill_core::prelude::{parse_delimiter, ColumnArgs, RunConfig, RunReport, DELIMITER_ENV};
use mwfill_io::{load_reference, write_report, CsvTableReader, CsvTableWriter};
use mwfill_merge::{
    merge_measure_words, parse_column, parse_optional_column, validate_columns, Reporter,
    TracingReporter,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "mwfill")]
#[command(
    about = "Fill measure-word columns of a Chinese flashcard export from a classifier table",
    long_about = None
)]
struct Cli {
    /// Delimiter in the input file; must be a single character. Defaults to
    /// tab, since that's what Anki exports.
    #[arg(short = 'd', long = "delimiter")]
    delimiter: Option<String>,

    /// Column simplified Chinese is in. Must be one of the existing columns
    /// in the input. Defaults to 0.
    #[arg(
        short = 'c',
        long = "chineseColumn",
        alias = "chinese-column",
        allow_negative_numbers = true
    )]
    chinese_column: Option<String>,

    /// Column to put measure words in. Must be non-negative. If past the end,
    /// adds empty columns; else replaces the value at the column.
    #[arg(
        short = 'm',
        long = "measureWordColumn",
        alias = "measure-word-column",
        allow_negative_numbers = true
    )]
    measure_word_column: String,

    /// Column to put the measure word's pinyin in. Same rules as
    /// --measureWordColumn.
    #[arg(
        short = 'p',
        long = "measureWordPinyinColumn",
        alias = "measure-word-pinyin-column",
        allow_negative_numbers = true
    )]
    measure_word_pinyin_column: Option<String>,

    /// Column to put the measure word's English description in. Same rules
    /// as --measureWordColumn.
    #[arg(
        short = 'e',
        long = "measureWordEnglishColumn",
        alias = "measure-word-english-column",
        allow_negative_numbers = true
    )]
    measure_word_english_column: Option<String>,

    /// Input file
    #[arg(short = 'i', long = "inputFile", alias = "input-file")]
    input_file: PathBuf,

    /// Output file
    #[arg(short = 'o', long = "outputFile", alias = "output-file")]
    output_file: PathBuf,

    /// Delimiter for the output file (defaults to --delimiter)
    #[arg(long = "outputDelimiter", alias = "output-delimiter")]
    output_delimiter: Option<String>,

    /// Tab-separated reference table to use instead of the bundled one
    #[arg(short = 'r', long = "referenceFile", alias = "reference-file")]
    reference_file: Option<PathBuf>,

    /// Write a JSON summary of the run (counts and unmatched notes) here
    #[arg(long = "reportFile", alias = "report-file")]
    report_file: Option<PathBuf>,
}

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunStatus {
    /// Output written.
    Written { rows: usize, num_edited: usize },
    /// Input had no notes; nothing written.
    EmptyInput,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = build_config(cli)
        .map_err(|e| -> Box<dyn std::error::Error> { Box::new(e) })
        .and_then(|config| run(&config, &mut TracingReporter));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        eprintln!("Aborting.");
        std::process::exit(1);
    }
}

fn init_tracing() {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(env)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer CLI flags over environment over defaults.
fn build_config(cli: Cli) -> mwfill_core::Result<RunConfig> {
    build_config_from(cli, |name| std::env::var(name).ok())
}

fn build_config_from<F>(cli: Cli, var: F) -> mwfill_core::Result<RunConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // A `-d` flag replaces the environment delimiter, so a bad one there is moot.
    let delimiter_flag = cli.delimiter.is_some();
    let mut config = RunConfig::from_lookup(|name| {
        if delimiter_flag && name == DELIMITER_ENV {
            None
        } else {
            var(name)
        }
    })?;
    apply_cli(&mut config, cli)?;
    Ok(config)
}

fn apply_cli(config: &mut RunConfig, cli: Cli) -> mwfill_core::Result<()> {
    if let Some(d) = &cli.delimiter {
        config.delimiter = parse_delimiter(d)?;
    }
    if let Some(d) = &cli.output_delimiter {
        config.output_delimiter = Some(parse_delimiter(d)?);
    }
    if let Some(path) = cli.reference_file {
        config.reference_path = Some(path);
    }
    config.report_path = cli.report_file;
    config.input_path = cli.input_file;
    config.output_path = cli.output_file;

    config.columns = ColumnArgs {
        chinese_column: match cli.chinese_column.as_deref() {
            Some(raw) => parse_column("chineseColumn", raw)?,
            None => 0,
        },
        measure_word_column: parse_column("measureWordColumn", &cli.measure_word_column)?,
        measure_word_pinyin_column: parse_optional_column(
            "measureWordPinyinColumn",
            cli.measure_word_pinyin_column.as_deref(),
        )?,
        measure_word_english_column: parse_optional_column(
            "measureWordEnglishColumn",
            cli.measure_word_english_column.as_deref(),
        )?,
    };
    Ok(())
}

/// Load, validate, merge, write. Nothing is written unless every earlier
/// step succeeded, and a failed run leaves neither output nor report behind.
fn run(
    config: &RunConfig,
    reporter: &mut dyn Reporter,
) -> Result<RunStatus, Box<dyn std::error::Error>> {
    let reference = load_reference(config.reference_path.as_deref())?;
    debug!(entries = reference.len(), "reference table ready");

    info!("Reading notes from {} ...", config.input_path.display());
    let notes = CsvTableReader::new(config.delimiter).read_path(&config.input_path)?;
    info!("Read notes successfully.");

    let Some(first) = notes.first() else {
        warn!("No notes in the input file; aborting.");
        return Ok(RunStatus::EmptyInput);
    };

    let spec = validate_columns(first.len(), &config.columns)?;
    if spec.max_write_column() >= first.len() {
        debug!(
            from = first.len(),
            to = spec.max_write_column() + 1,
            "widening notes to fit measure word columns"
        );
    }

    info!("Processing output of {} notes...", notes.len());
    let outcome = merge_measure_words(&reference, &notes, &spec);
    outcome.report_to(reporter);
    info!(
        "Processed notes successfully; edited {} notes.",
        outcome.num_edited
    );

    // The report goes first: if it cannot be written, no output exists yet.
    if let Some(report_path) = &config.report_path {
        let report = RunReport::new(notes.len(), outcome.num_edited, outcome.misses.clone());
        write_report(report_path, &report)?;
        info!("Wrote run report to {}", report_path.display());
    }

    info!("Writing results to {} ...", config.output_path.display());
    let written = CsvTableWriter::new(config.effective_output_delimiter())
        .to_path(&outcome.rows, &config.output_path);
    if let Err(e) = written {
        if let Some(report_path) = &config.report_path {
            let _ = std::fs::remove_file(report_path);
        }
        return Err(e.into());
    }

    info!("Outputted results successfully. Script complete!");
    Ok(RunStatus::Written {
        rows: notes.len(),
        num_edited: outcome.num_edited,
    })
}
