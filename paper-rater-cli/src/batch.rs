//! Batch command implementation for the paper-rater CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use paper_rater_core::{PaperRecord, PaperScorer, ScoredPaper};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    ARG_MIN_RATING, ARG_PAPERS, ARG_TABLES, CliError, ENV_BATCH_PAPERS, load_rater, write_json,
};

/// CLI arguments for the `batch` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rate every paper in a JSON array of crawled records. Each \
                 record needs title, abstract and subjects, and may carry a \
                 comment, \"paper id\" and \"abstract url\". Rated records \
                 are printed as a JSON array.",
    about = "Rate a JSON file of papers"
)]
#[ortho_config(prefix = "PAPER_RATER")]
pub(crate) struct BatchArgs {
    /// Path to a JSON file holding an array of paper records.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) papers_path: Option<Utf8PathBuf>,
    /// Path to a JSON rating-table file; the built-in tables are used otherwise.
    #[arg(long = ARG_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) tables: Option<Utf8PathBuf>,
    /// Drop papers rated below this value.
    #[arg(long = ARG_MIN_RATING, value_name = "rating", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) min_rating: Option<f64>,
    /// Order the output from the highest rating to the lowest.
    #[arg(long)]
    #[serde(default)]
    pub(crate) sort: bool,
}

impl BatchArgs {
    pub(crate) fn into_config(self) -> Result<BatchConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        BatchConfig::try_from(merged)
    }
}

/// Resolved `batch` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BatchConfig {
    /// Path to the JSON papers file.
    pub(crate) papers_path: Utf8PathBuf,
    /// Optional rating-table file.
    pub(crate) tables: Option<Utf8PathBuf>,
    /// Lowest rating kept in the output.
    pub(crate) min_rating: Option<f64>,
    /// Whether to order the output by descending rating.
    pub(crate) sort: bool,
}

impl TryFrom<BatchArgs> for BatchConfig {
    type Error = CliError;

    fn try_from(args: BatchArgs) -> Result<Self, Self::Error> {
        let papers_path = args.papers_path.ok_or(CliError::MissingArgument {
            field: ARG_PAPERS,
            env: ENV_BATCH_PAPERS,
        })?;
        Ok(Self {
            papers_path,
            tables: args.tables,
            min_rating: args.min_rating,
            sort: args.sort,
        })
    }
}

pub(crate) fn run_batch(args: BatchArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_batch_with(&config, writer)
}

pub(crate) fn run_batch_with(config: &BatchConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let records = load_papers(&config.papers_path)?;
    let rater = load_rater(config.tables.as_deref())?;
    let scored = rate_records(&rater, records, config);
    write_json(writer, &scored)
}

/// Rate `records`, then apply the rating floor and ordering from `config`.
pub(crate) fn rate_records(
    scorer: &impl PaperScorer,
    records: Vec<PaperRecord>,
    config: &BatchConfig,
) -> Vec<ScoredPaper> {
    let total = records.len();
    let mut scored: Vec<ScoredPaper> = records
        .into_iter()
        .map(|record| {
            let result = scorer.rate_paper(&record.query);
            record.into_scored(result)
        })
        .filter(|paper| config.min_rating.is_none_or(|floor| paper.rating >= floor))
        .collect();
    if config.sort {
        scored.sort_by(|left, right| right.rating.total_cmp(&left.rating));
    }
    debug!("rated {total} papers, kept {}", scored.len());
    scored
}

/// Load and validate a JSON array of paper records.
pub(crate) fn load_papers(path: &Utf8Path) -> Result<Vec<PaperRecord>, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::ReadPapers {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let value: Value = serde_json::from_reader(BufReader::new(file)).map_err(|source| {
        CliError::ParsePapers {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let Value::Array(items) = value else {
        return Err(CliError::PapersNotArray {
            path: path.to_path_buf(),
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            PaperRecord::from_json_value(item)
                .map_err(|source| CliError::InvalidPaper { index, source })
        })
        .collect()
}
