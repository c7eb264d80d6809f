//! Rate command implementation for the paper-rater CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use paper_rater_core::{PaperQuery, PaperScorer};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_ABSTRACT, ARG_COMMENT, ARG_SUBJECTS, ARG_TABLES, ARG_TITLE, CliError, ENV_RATE_ABSTRACT,
    ENV_RATE_SUBJECTS, ENV_RATE_TITLE, load_rater, write_json,
};

/// CLI arguments for the `rate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rate one paper from its title, abstract, subject list and \
                 optional comment. The rating and the matched keywords are \
                 printed as JSON.",
    about = "Rate a single paper"
)]
#[ortho_config(prefix = "PAPER_RATER")]
pub(crate) struct RateArgs {
    /// Paper title.
    #[arg(long = ARG_TITLE, value_name = "text")]
    #[serde(default)]
    pub(crate) title: Option<String>,
    /// Paper abstract.
    #[arg(long = ARG_ABSTRACT, value_name = "text")]
    #[serde(default)]
    pub(crate) abstract_text: Option<String>,
    /// Subject codes, e.g. "cs.CV; eess.IV".
    #[arg(long = ARG_SUBJECTS, value_name = "codes")]
    #[serde(default)]
    pub(crate) subjects: Option<String>,
    /// Venue or reviewer comment.
    #[arg(long = ARG_COMMENT, value_name = "text")]
    #[serde(default)]
    pub(crate) comment: Option<String>,
    /// Path to a JSON rating-table file; the built-in tables are used otherwise.
    #[arg(long = ARG_TABLES, value_name = "path")]
    #[serde(default)]
    pub(crate) tables: Option<Utf8PathBuf>,
}

impl RateArgs {
    pub(crate) fn into_config(self) -> Result<RateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RateConfig::try_from(merged)
    }
}

/// Resolved `rate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RateConfig {
    /// The paper to rate.
    pub(crate) paper: PaperQuery,
    /// Optional rating-table file.
    pub(crate) tables: Option<Utf8PathBuf>,
}

impl TryFrom<RateArgs> for RateConfig {
    type Error = CliError;

    fn try_from(args: RateArgs) -> Result<Self, Self::Error> {
        let title = args.title.ok_or(CliError::MissingArgument {
            field: ARG_TITLE,
            env: ENV_RATE_TITLE,
        })?;
        let abstract_text = args.abstract_text.ok_or(CliError::MissingArgument {
            field: ARG_ABSTRACT,
            env: ENV_RATE_ABSTRACT,
        })?;
        let subjects = args.subjects.ok_or(CliError::MissingArgument {
            field: ARG_SUBJECTS,
            env: ENV_RATE_SUBJECTS,
        })?;
        Ok(Self {
            paper: PaperQuery::new(title, subjects, abstract_text, args.comment),
            tables: args.tables,
        })
    }
}

pub(crate) fn run_rate(args: RateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    run_rate_with(&config, writer)
}

pub(crate) fn run_rate_with(config: &RateConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let rater = load_rater(config.tables.as_deref())?;
    let result = rater.rate_paper(&config.paper);
    debug!(
        "rated {:?} at {} with {} keyword groups",
        config.paper.title,
        result.rating,
        result.keywords.len()
    );
    write_json(writer, &result)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RateConfig, CliError> {
    let merged = RateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RateConfig::try_from(merged)
}
