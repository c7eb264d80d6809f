//! Combine phrase, subject and conference matches into one rating.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use log::debug;
use paper_rater_core::{PaperQuery, PaperScorer, ScoreResult};

use crate::matcher::{MatchResult, PhraseMatcher, match_once};
use crate::{RaterError, RatingTables};

/// Rule-based rater over a fixed set of [`RatingTables`].
///
/// The tables are fixed at construction; rating never mutates the rater, so
/// one instance can serve any number of threads.
///
/// # Examples
/// ```
/// use paper_rater_scorer::Rater;
///
/// # fn main() -> Result<(), paper_rater_scorer::RaterError> {
/// let rater = Rater::with_defaults()?;
/// let result = rater.rate(
///     "Green Learning for Image Compression",
///     "eess.IV",
///     "A lightweight codec.",
///     Some("Accepted by APSIPA"),
/// );
/// assert_eq!(result.rating, 3.0);
///
/// let nothing = rater.rate("Robotics path planning", "cs.RO", "novel algorithm", None);
/// assert_eq!(nothing.rating, -10.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Rater {
    tables: RatingTables,
    phrases: PhraseMatcher,
}

impl Rater {
    /// Build a rater over `tables`, compiling the phrase matchers once.
    ///
    /// # Errors
    /// Returns [`RaterError::CompilePhrase`] when a phrase cannot be
    /// compiled.
    pub fn new(tables: RatingTables) -> Result<Self, RaterError> {
        let phrases = PhraseMatcher::compile(&tables.phrases)?;
        Ok(Self { tables, phrases })
    }

    /// Build a rater over the stock tables.
    ///
    /// # Errors
    /// Propagates [`Rater::new`] failures.
    pub fn with_defaults() -> Result<Self, RaterError> {
        Self::new(RatingTables::default())
    }

    /// Build a rater from a JSON table file.
    ///
    /// # Errors
    /// Returns [`RaterError::Config`] when the file cannot be read or parsed,
    /// and propagates [`Rater::new`] failures.
    pub fn from_path(path: &Utf8Path) -> Result<Self, RaterError> {
        Self::new(RatingTables::load(path)?)
    }

    /// The tables this rater was built from.
    #[must_use]
    pub const fn tables(&self) -> &RatingTables {
        &self.tables
    }

    /// Rate a paper from its individual fields.
    ///
    /// Phrases are matched against `title + " " + abstract`, subjects against
    /// `subjects`, and conferences against `comment` when present. Keywords
    /// are reported in that order. When nothing matched in any dimension the
    /// rating is [`NO_SIGNAL_RATING`](paper_rater_core::NO_SIGNAL_RATING).
    #[expect(
        clippy::float_arithmetic,
        reason = "dimension ratings are summed into the final rating"
    )]
    #[must_use]
    pub fn rate(
        &self,
        title: &str,
        subjects: &str,
        abstract_text: &str,
        comment: Option<&str>,
    ) -> ScoreResult {
        let content = self.phrases.match_all(&format!("{title} {abstract_text}"));
        let subject = match_once(&self.tables.subjects, subjects);
        let conference = comment.map_or_else(MatchResult::empty, |text| {
            match_once(&self.tables.conferences, text)
        });

        debug!(
            "rated {title:?}: phrases {} ({} groups), subjects {}, conferences {}",
            content.weight,
            content.keywords.len(),
            subject.weight,
            conference.weight
        );

        let rating = content.weight + subject.weight + conference.weight;
        let keywords: Vec<_> = [content.keywords, subject.keywords, conference.keywords]
            .into_iter()
            .flatten()
            .collect();
        if keywords.is_empty() {
            return ScoreResult::no_signal();
        }
        ScoreResult::new(rating, keywords)
    }
}

impl PaperScorer for Rater {
    fn rate_paper(&self, paper: &PaperQuery) -> ScoreResult {
        self.rate(
            &paper.title,
            &paper.subjects,
            &paper.abstract_text,
            paper.comment.as_deref(),
        )
    }
}
