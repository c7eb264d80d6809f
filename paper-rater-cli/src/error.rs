//! Error types emitted by the paper-rater CLI.
//!
//! Keep this error type reasonably small, as every command returns
//! `Result<_, CliError>` and the workspace enables `clippy::result_large_err`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use paper_rater_core::PaperQueryError;
use paper_rater_scorer::{ConfigError, RaterError};
use thiserror::Error;

/// Errors emitted by the paper-rater CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name of the missing option.
        field: &'static str,
        /// Environment variable that can supply it.
        env: &'static str,
    },
    /// Loading or compiling the rating tables failed.
    #[error("failed to build rater: {0}")]
    BuildRater(#[from] RaterError),
    /// Loading or rendering the rating tables failed.
    #[error(transparent)]
    Tables(#[from] ConfigError),
    /// Opening the papers file failed.
    #[error("failed to read papers from {path:?}: {source}")]
    ReadPapers {
        /// Requested papers file.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The papers file was not valid JSON.
    #[error("failed to parse papers JSON at {path:?}: {source}")]
    ParsePapers {
        /// Papers file that failed to parse.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The papers file held JSON other than an array.
    #[error("papers file {path:?} must contain a JSON array")]
    PapersNotArray {
        /// Offending papers file.
        path: Utf8PathBuf,
    },
    /// One paper in a batch failed validation.
    #[error("paper at index {index} is invalid: {source}")]
    InvalidPaper {
        /// Position of the paper in the input array.
        index: usize,
        /// Validation failure.
        #[source]
        source: PaperQueryError,
    },
    /// Serialising command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
