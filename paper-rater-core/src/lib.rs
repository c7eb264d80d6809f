//! Core domain types for paper relevance rating.
//!
//! The crate defines what a rating engine consumes and produces without
//! committing to any particular rule set:
//! - [`PaperQuery`] carries the caller-supplied fields of a paper.
//! - [`ScoreResult`] pairs the numeric rating with the keyword groups that
//!   justified it.
//! - [`PaperScorer`] is the seam rating engines implement.
//! - [`RelevanceAgent`] describes the external language-model collaborator,
//!   whose free-text answers are reduced to a number by
//!   [`extract_relevance_score`].
//!
//! Constructors that face untrusted data return `Result` so invalid input is
//! rejected at the boundary rather than deep inside matching.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod agent;
pub mod paper;
#[cfg(feature = "serde")]
pub mod record;
pub mod score;
pub mod scorer;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use agent::{
    AgentError, AgentVerdict, RelevanceAgent, extract_relevance_score, score_with_agent,
};
pub use paper::{PaperQuery, PaperQueryError};
#[cfg(feature = "serde")]
pub use record::{PaperRecord, ScoredPaper};
pub use score::{KeywordGroup, Keywords, NO_SIGNAL_RATING, ScoreResult};
pub use scorer::PaperScorer;
