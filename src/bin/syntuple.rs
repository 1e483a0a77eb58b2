//! `syntuple`: report how much of one document is a synonym-aware copy of another.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use synonym_tuples::{DetectorConfig, RecordPolicy, Thesaurus, TupleMatcher};

#[derive(Parser)]
#[command(
    name = "syntuple",
    version,
    about = "Synonym-aware n-gram similarity between two text files",
    long_about = "Prints the share of FILE2's word tuples that FILE1 reproduces, \
                  counting synonyms from SYNONYMS_FILE as equal words."
)]
struct Cli {
    /// Synonym list: one group of interchangeable words per line
    #[arg(value_name = "SYNONYMS_FILE")]
    synonyms: PathBuf,

    /// Candidate document, probed against FILE2
    #[arg(value_name = "FILE1")]
    candidate: PathBuf,

    /// Reference document, indexed; its tuple count is the denominator
    #[arg(value_name = "FILE2")]
    reference: PathBuf,

    /// Words per tuple [default: 3, or the config file value]
    #[arg(value_name = "TUPLE_SIZE")]
    tuple_size: Option<usize>,

    /// TOML file with `tuple_size` and `record_policy`
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Skip blank lines in the synonym file instead of failing
    #[arg(long)]
    skip_invalid: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => DetectorConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DetectorConfig::default(),
    };
    if let Some(tuple_size) = cli.tuple_size {
        config.tuple_size = tuple_size;
    }
    if cli.skip_invalid {
        config.record_policy = RecordPolicy::Skip;
    }
    log::debug!("Using {:?}", config);

    let mut thesaurus = Thesaurus::from_path(&cli.synonyms, config.record_policy)
        .with_context(|| format!("Failed to load synonyms {}", cli.synonyms.display()))?;

    let candidate = File::open(&cli.candidate)
        .with_context(|| format!("Failed to open {}", cli.candidate.display()))?;
    let reference = File::open(&cli.reference)
        .with_context(|| format!("Failed to open {}", cli.reference.display()))?;

    let report = TupleMatcher::new()
        .compare_readers(
            &mut thesaurus,
            BufReader::new(reference),
            BufReader::new(candidate),
            config.tuple_size,
        )
        .context("Similarity computation failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.percentage());
    }
    Ok(())
}
