//! The outcome of rating a paper.

/// Keywords matched by a single rule, in the order they were discovered.
pub type KeywordGroup = Vec<String>;

/// Ordered sequence of matched keyword groups.
pub type Keywords = Vec<KeywordGroup>;

/// Rating reported when no dimension matched anything at all.
///
/// The sentinel marks a paper as carrying no relevance signal, which is
/// distinct from a paper whose matches happen to sum to a low value.
pub const NO_SIGNAL_RATING: f64 = -10.0;

/// A rating plus the keyword groups that produced it.
///
/// # Examples
/// ```
/// use paper_rater_core::{NO_SIGNAL_RATING, ScoreResult};
///
/// let result = ScoreResult::no_signal();
/// assert_eq!(result.rating, NO_SIGNAL_RATING);
/// assert!(result.is_unmatched());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreResult {
    /// Combined rating; higher is more relevant.
    pub rating: f64,
    /// Keyword groups in phrase, subject, conference order.
    pub keywords: Keywords,
}

impl ScoreResult {
    /// Construct a result from its parts.
    #[must_use]
    pub const fn new(rating: f64, keywords: Keywords) -> Self {
        Self { rating, keywords }
    }

    /// The sentinel result for a paper that matched nothing.
    #[must_use]
    pub const fn no_signal() -> Self {
        Self::new(NO_SIGNAL_RATING, Vec::new())
    }

    /// Report whether no keyword matched in any dimension.
    #[must_use]
    pub fn is_unmatched(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Iterate over every matched keyword, flattening the groups.
    pub fn matched_keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().flatten().map(String::as_str)
    }
}
