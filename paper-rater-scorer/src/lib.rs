//! Rule-based relevance rating for academic papers.
//!
//! A paper is rated along three dimensions, each driven by a weighted
//! keyword table:
//! - **Phrases** are matched as whole words, ignoring case, in the title and
//!   abstract. Every matched group adds its weight.
//! - **Subjects** are matched literally in the subject list. Only the
//!   heaviest match counts.
//! - **Conferences** are matched literally in the comment, when there is one.
//!   Only the heaviest match counts.
//!
//! The three partial ratings are summed. A paper that matches nothing at all
//! receives [`NO_SIGNAL_RATING`](paper_rater_core::NO_SIGNAL_RATING) instead.
//!
//! Tables live in [`RatingTables`] and can be loaded from JSON, either once
//! through [`Rater::from_path`] or repeatedly through [`SharedRater`].
//!
//! # Examples
//!
//! ```
//! use paper_rater_core::{PaperQuery, PaperScorer};
//! use paper_rater_scorer::Rater;
//!
//! # fn main() -> Result<(), paper_rater_scorer::RaterError> {
//! let rater = Rater::with_defaults()?;
//! let paper = PaperQuery::new(
//!     "Deep Learning for Speech",
//!     "cs.LG",
//!     "We study biology applications",
//!     Some("NeurIPS".to_owned()),
//! );
//! let result = rater.rate_paper(&paper);
//! assert_eq!(result.rating, -3.5);
//! assert_eq!(result.keywords.len(), 5);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod error;
mod matcher;
mod rater;
mod shared;
mod table;

pub use config::RatingTables;
pub use error::{ConfigError, RaterError, TableError};
pub use matcher::{MatchResult, PhraseMatcher, match_all, match_once};
pub use rater::Rater;
pub use shared::SharedRater;
pub use table::{Bucket, FlatTable, GroupedTable, MAX_WEIGHT, RatingTable, TableEntry};
