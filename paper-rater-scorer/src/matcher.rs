//! The two matching strategies shared by the rating dimensions.
//!
//! - [`match_once`] is best-of: literal, case-sensitive substring tests where
//!   only the highest matched weight counts.
//! - [`PhraseMatcher::match_all`] accumulates: whole-word, case-insensitive
//!   tests where every matched group adds its weight.
//!
//! The two strategies differ in case sensitivity, word boundaries and
//! aggregation, and callers rely on each as it stands. A keyword group is a
//! set of alternatives: it matches when ANY member matches.
#![forbid(unsafe_code)]

use paper_rater_core::Keywords;
use regex::{Regex, RegexBuilder};

use crate::table::{FlatTable, GroupedTable};
use crate::RaterError;

/// Weight and keyword groups produced by one matching pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MatchResult {
    /// Best (flat) or summed (grouped) weight of the matches.
    pub weight: f64,
    /// Matched keywords, in traversal order.
    pub keywords: Keywords,
}

impl MatchResult {
    /// The result of a pass that matched nothing.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            weight: 0.0,
            keywords: Vec::new(),
        }
    }
}

/// Find every keyword of `table` that occurs literally in `content`.
///
/// Buckets are visited in ascending weight order. The weight starts at `0`
/// and only rises when a matched bucket is heavier, so a negative bucket can
/// report keywords without lowering the weight. All matched keywords are
/// returned as a single group; nothing matched yields no groups.
///
/// # Examples
/// ```
/// use paper_rater_scorer::{FlatTable, match_once};
///
/// # fn main() -> Result<(), paper_rater_scorer::TableError> {
/// let table = FlatTable::from_buckets([
///     (0.5, vec!["A".to_owned()]),
///     (1.0, vec!["B".to_owned()]),
/// ])?;
/// let result = match_once(&table, "A and B");
/// assert_eq!(result.weight, 1.0);
/// assert_eq!(result.keywords, vec![vec!["A".to_owned(), "B".to_owned()]]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn match_once(table: &FlatTable, content: &str) -> MatchResult {
    let mut best = 0.0_f64;
    let mut matched = Vec::new();
    for bucket in table.ascending() {
        for keyword in &bucket.keywords {
            if content.contains(keyword.as_str()) {
                matched.push(keyword.clone());
                if bucket.weight > best {
                    best = bucket.weight;
                }
            }
        }
    }
    let keywords = if matched.is_empty() {
        Vec::new()
    } else {
        vec![matched]
    };
    MatchResult {
        weight: best,
        keywords,
    }
}

/// Compile `table` and run [`PhraseMatcher::match_all`] once.
///
/// Prefer building a [`PhraseMatcher`] when matching repeatedly.
///
/// # Errors
/// Returns [`RaterError::CompilePhrase`] if a phrase cannot be compiled.
pub fn match_all(table: &GroupedTable, content: &str) -> Result<MatchResult, RaterError> {
    Ok(PhraseMatcher::compile(table)?.match_all(content))
}

/// A grouped table with every phrase compiled into a whole-word matcher.
///
/// Buckets are stored from the highest weight to the lowest.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    buckets: Vec<CompiledBucket>,
}

#[derive(Debug, Clone)]
struct CompiledBucket {
    weight: f64,
    groups: Vec<Vec<Regex>>,
}

impl PhraseMatcher {
    /// Compile each phrase as a case-insensitive, word-bounded literal.
    ///
    /// # Errors
    /// Returns [`RaterError::CompilePhrase`] if a phrase exceeds the regex
    /// engine's size limits.
    pub fn compile(table: &GroupedTable) -> Result<Self, RaterError> {
        let buckets = table
            .descending()
            .map(|bucket| {
                let groups = bucket
                    .keywords
                    .iter()
                    .map(|group| {
                        group
                            .iter()
                            .map(|phrase| word_pattern(phrase))
                            .collect::<Result<Vec<Regex>, RaterError>>()
                    })
                    .collect::<Result<Vec<_>, RaterError>>()?;
                Ok(CompiledBucket {
                    weight: bucket.weight,
                    groups,
                })
            })
            .collect::<Result<Vec<_>, RaterError>>()?;
        Ok(Self { buckets })
    }

    /// Sum the weights of every group with at least one matching phrase.
    ///
    /// Each matched group contributes the text it matched, as it appears in
    /// `content`, in descending-weight then declaration order.
    #[expect(
        clippy::float_arithmetic,
        reason = "phrase weights accumulate across matched groups"
    )]
    #[must_use]
    pub fn match_all(&self, content: &str) -> MatchResult {
        let mut total = 0.0_f64;
        let mut keywords = Vec::new();
        for bucket in &self.buckets {
            for group in &bucket.groups {
                let matches: Vec<String> = group
                    .iter()
                    .filter_map(|pattern| pattern.find(content))
                    .map(|found| found.as_str().to_owned())
                    .collect();
                if !matches.is_empty() {
                    total += bucket.weight;
                    keywords.push(matches);
                }
            }
        }
        MatchResult {
            weight: total,
            keywords,
        }
    }
}

fn word_pattern(phrase: &str) -> Result<Regex, RaterError> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(phrase)))
        .case_insensitive(true)
        .build()
        .map_err(|source| RaterError::CompilePhrase {
            phrase: phrase.to_owned(),
            source,
        })
}
