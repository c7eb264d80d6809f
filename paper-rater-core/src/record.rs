//! Paper records as exchanged with crawlers and browsing front ends.
//!
//! A crawler hands over loosely typed JSON objects; [`PaperRecord`] validates
//! them at the boundary. After rating, [`ScoredPaper`] renders the record in
//! the key layout the browsing front end reads (`"paper id"`,
//! `"abstract url"`, a stringly `rating`, and optional LLM fields).

use serde::{Serialize, Serializer};

use crate::paper::optional_string;
use crate::{AgentVerdict, Keywords, PaperQuery, PaperQueryError, ScoreResult};

/// A paper plus the identifying metadata a crawler attaches to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaperRecord {
    /// Source identifier, e.g. an arXiv id.
    pub paper_id: Option<String>,
    /// Link to the abstract page.
    pub abstract_url: Option<String>,
    /// The fields used for rating.
    pub query: PaperQuery,
}

impl PaperRecord {
    /// Validate a JSON object and build a record from it.
    ///
    /// # Errors
    /// Returns [`PaperQueryError::InvalidInput`] when any rating field is
    /// malformed, or when `paper id` / `abstract url` are present but not
    /// strings.
    pub fn from_json_value(value: &serde_json::Value) -> Result<Self, PaperQueryError> {
        let query = PaperQuery::from_json_value(value)?;
        let (paper_id, abstract_url) = match value.as_object() {
            Some(object) => (
                optional_string(object, "paper id")?,
                optional_string(object, "abstract url")?,
            ),
            None => (None, None),
        };
        Ok(Self {
            paper_id,
            abstract_url,
            query,
        })
    }

    /// Attach a rating, producing the exported record shape.
    #[must_use]
    pub fn into_scored(self, score: ScoreResult) -> ScoredPaper {
        let Self {
            paper_id,
            abstract_url,
            query,
        } = self;
        ScoredPaper {
            paper_id,
            abstract_url,
            title: query.title,
            rating: score.rating,
            keywords: score.keywords,
            abstract_text: query.abstract_text,
            subjects: query.subjects,
            comment: query.comment,
            llm_score: None,
            llm_comment: None,
        }
    }
}

/// A rated paper in the exported record layout.
///
/// # Examples
/// ```
/// use paper_rater_core::{PaperQuery, PaperRecord, ScoreResult};
///
/// let record = PaperRecord {
///     paper_id: Some("2401.00001".to_owned()),
///     abstract_url: None,
///     query: PaperQuery::new("Title", "cs.CV", "Abstract", None),
/// };
/// let scored = record.into_scored(ScoreResult::new(1.0, vec![vec!["cs.CV".to_owned()]]));
/// let json = serde_json::to_value(&scored).expect("serialise record");
/// assert_eq!(json["paper id"], "2401.00001");
/// assert_eq!(json["rating"], "1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredPaper {
    /// Source identifier.
    #[serde(rename = "paper id")]
    pub paper_id: Option<String>,
    /// Link to the abstract page.
    #[serde(rename = "abstract url")]
    pub abstract_url: Option<String>,
    /// Paper title.
    pub title: String,
    /// Combined rating, rendered without a trailing `.0`.
    #[serde(serialize_with = "serialize_rating")]
    pub rating: f64,
    /// Matched keyword groups.
    pub keywords: Keywords,
    /// Paper abstract.
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// Subject codes as supplied.
    pub subjects: String,
    /// Venue or reviewer comment.
    pub comment: Option<String>,
    /// Score parsed from the language-model agent, if one was consulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_score: Option<u32>,
    /// Raw language-model response, if one was consulted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_comment: Option<String>,
}

impl ScoredPaper {
    /// Attach an agent verdict alongside the rule-based rating.
    #[must_use]
    pub fn with_verdict(mut self, verdict: AgentVerdict) -> Self {
        self.llm_score = Some(verdict.score);
        self.llm_comment = Some(verdict.raw_response);
        self
    }

    /// Render the rating the way the record layout expects.
    #[must_use]
    pub fn rating_label(&self) -> String {
        self.rating.to_string()
    }
}

fn serialize_rating<S: Serializer>(rating: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(rating)
}
