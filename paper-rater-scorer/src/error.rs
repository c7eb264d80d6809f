//! Error types raised while building rating tables and raters.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised when a rating table is malformed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    /// A bucket weight was NaN or infinite.
    #[error("rating weight {weight} is not a finite number")]
    NonFiniteWeight {
        /// The offending weight.
        weight: f64,
    },
    /// A bucket weight exceeded [`MAX_WEIGHT`](crate::MAX_WEIGHT) in
    /// magnitude.
    #[error("rating weight {weight} exceeds the limit of {limit}")]
    WeightOutOfRange {
        /// The offending weight.
        weight: f64,
        /// Largest accepted magnitude.
        limit: f64,
    },
    /// A keyword was empty or whitespace, which would match every paper.
    #[error("bucket with weight {weight} contains an empty keyword")]
    EmptyKeyword {
        /// Weight of the bucket holding the keyword.
        weight: f64,
    },
    /// A keyword group had no alternatives, so it could never match.
    #[error("bucket with weight {weight} contains an empty keyword group")]
    EmptyGroup {
        /// Weight of the bucket holding the group.
        weight: f64,
    },
}

/// Errors raised while loading rating tables from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read rating tables from {path}")]
    Read {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file was not valid rating-table JSON.
    #[error("failed to parse rating tables from {path}")]
    ParseFile {
        /// Configuration path that failed to parse.
        path: Utf8PathBuf,
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// In-memory JSON was not valid rating-table JSON.
    #[error("failed to parse rating tables")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Rendering the tables as JSON failed.
    #[error("failed to serialise rating tables")]
    Serialise {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when constructing a [`Rater`](crate::Rater).
#[derive(Debug, Error)]
pub enum RaterError {
    /// Loading the rating tables failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A phrase could not be compiled into a whole-word matcher.
    #[error("failed to compile phrase matcher for {phrase:?}")]
    CompilePhrase {
        /// The phrase as configured.
        phrase: String,
        /// Source error from `regex`.
        #[source]
        source: regex::Error,
    },
}
