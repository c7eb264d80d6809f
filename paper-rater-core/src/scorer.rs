//! Rate papers against a fixed rule set.
//!
//! The `PaperScorer` trait assigns a [`ScoreResult`](crate::ScoreResult) to a
//! [`PaperQuery`](crate::PaperQuery).

use crate::{PaperQuery, ScoreResult};

/// Calculate a relevance rating for a paper.
///
/// Higher ratings indicate a better match between the paper and the
/// configured interests. Implementations must be thread-safe (`Send` +
/// `Sync`) so a single scorer can be shared by concurrent callers.
/// The method is infallible; implementations must degrade malformed or empty
/// text to "no match" rather than failing.
///
/// Implementations must:
/// - Produce the same result for the same paper on every call.
/// - Return the keyword groups that justified the rating.
///
/// # Examples
///
/// ```rust
/// use paper_rater_core::{PaperQuery, PaperScorer, ScoreResult};
///
/// struct FlatScorer;
///
/// impl PaperScorer for FlatScorer {
///     fn rate_paper(&self, _paper: &PaperQuery) -> ScoreResult {
///         ScoreResult::new(1.0, vec![vec!["anything".to_owned()]])
///     }
/// }
///
/// let paper = PaperQuery::new("Title", "cs.LG", "Abstract", None);
/// assert_eq!(FlatScorer.rate_paper(&paper).rating, 1.0);
/// ```
pub trait PaperScorer: Send + Sync {
    /// Return a rating for `paper`.
    fn rate_paper(&self, paper: &PaperQuery) -> ScoreResult;

    /// Rate every paper in `papers`, preserving order.
    fn rate_all<'a, I>(&self, papers: I) -> Vec<ScoreResult>
    where
        I: IntoIterator<Item = &'a PaperQuery>,
        Self: Sized,
    {
        papers
            .into_iter()
            .map(|paper| self.rate_paper(paper))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct TitleLengthScorer;

    impl PaperScorer for TitleLengthScorer {
        #[expect(
            clippy::cast_precision_loss,
            reason = "titles in tests are short enough to convert exactly"
        )]
        fn rate_paper(&self, paper: &PaperQuery) -> ScoreResult {
            ScoreResult::new(paper.title.len() as f64, Vec::new())
        }
    }

    #[rstest]
    fn rate_all_preserves_input_order() {
        let papers = [
            PaperQuery::new("abc", "", "", None),
            PaperQuery::new("a", "", "", None),
        ];
        let ratings: Vec<f64> = TitleLengthScorer
            .rate_all(&papers)
            .into_iter()
            .map(|result| result.rating)
            .collect();
        assert_eq!(ratings, [3.0, 1.0]);
    }
}
