//! Facade crate for the paper-rater relevance engine.
//!
//! This crate re-exports the core domain types and exposes the rule-based
//! rater and the exported record shape behind feature flags.

#![forbid(unsafe_code)]

pub use paper_rater_core::{
    AgentError, AgentVerdict, KeywordGroup, Keywords, NO_SIGNAL_RATING, PaperQuery,
    PaperQueryError, PaperScorer, RelevanceAgent, ScoreResult, extract_relevance_score,
    score_with_agent,
};

#[cfg(feature = "serde")]
pub use paper_rater_core::{PaperRecord, ScoredPaper};

#[cfg(feature = "scorer")]
pub use paper_rater_scorer::{
    ConfigError, FlatTable, GroupedTable, MatchResult, PhraseMatcher, Rater, RaterError,
    MAX_WEIGHT, RatingTables, SharedRater, TableError,
};
