//! The language-model collaborator that produces free-text relevance scores.
//!
//! Inference, prompting and fine-tuning live outside this workspace. The
//! engine only needs something that accepts a paper and the reader's topics
//! and answers with text that embeds a JSON-ish `"relevant score": N/10`
//! fragment. [`extract_relevance_score`] pulls that number out.

use std::sync::LazyLock;

use log::warn;
use regex::Regex;
use thiserror::Error;

use crate::PaperQuery;

#[expect(
    clippy::expect_used,
    reason = "the pattern is a literal and is covered by unit tests"
)]
static RELEVANT_SCORE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""relevant[_ ]score":\s*(\d+)(?:/\d+)?"#).expect("relevance score pattern")
});

/// Errors surfaced by a [`RelevanceAgent`].
#[derive(Debug, Error)]
pub enum AgentError {
    /// The backend could not produce a response.
    #[error("relevance agent failed to respond: {message}")]
    Respond {
        /// Backend-provided description of the failure.
        message: String,
    },
}

/// An external model that judges how relevant a paper is to some topics.
///
/// Implementations must be `Send + Sync` so a single agent can serve
/// concurrent requests.
pub trait RelevanceAgent: Send + Sync {
    /// Produce a raw text response for `paper` given the reader's `topics`.
    ///
    /// # Errors
    /// Returns [`AgentError`] when the backend cannot answer.
    fn respond(&self, paper: &PaperQuery, topics: &[String]) -> Result<String, AgentError>;
}

/// A score parsed from an agent response, together with the response itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentVerdict {
    /// Parsed score, or `0` when the response held no recognisable score.
    pub score: u32,
    /// The unmodified agent response.
    pub raw_response: String,
}

/// Extract the first `"relevant score": N` (or `"relevant_score"`) value.
///
/// A trailing `/10` style denominator is accepted and ignored.
///
/// # Examples
/// ```
/// use paper_rater_core::extract_relevance_score;
///
/// let raw = "```json\n{\n  \"relevant score\": 7/10\n}\n```";
/// assert_eq!(extract_relevance_score(raw), Some(7));
/// assert_eq!(extract_relevance_score("no score here"), None);
/// ```
#[must_use]
pub fn extract_relevance_score(raw: &str) -> Option<u32> {
    RELEVANT_SCORE
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Ask `agent` about `paper` and reduce its answer to a numeric verdict.
///
/// # Errors
/// Propagates the agent's [`AgentError`]. A response without a parsable
/// score is not an error; it yields a score of `0`.
pub fn score_with_agent<A>(
    agent: &A,
    paper: &PaperQuery,
    topics: &[String],
) -> Result<AgentVerdict, AgentError>
where
    A: RelevanceAgent + ?Sized,
{
    let raw_response = agent.respond(paper, topics)?;
    let score = extract_relevance_score(&raw_response).unwrap_or_else(|| {
        warn!(
            "no relevance score in agent response for {:?}: {raw_response:?}",
            paper.title
        );
        0
    });
    Ok(AgentVerdict {
        score,
        raw_response,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingAgent, StaticAgent};
    use rstest::rstest;

    #[rstest]
    #[case(r#""relevant score": 5/10"#, Some(5))]
    #[case(r#""relevant_score": 3"#, Some(3))]
    #[case(r#""relevant score":8"#, Some(8))]
    #[case("{\n  \"relevant score\":\n  10/10\n}", Some(10))]
    #[case(r#""relevant score": 2/10 and "relevant score": 9/10"#, Some(2))]
    #[case(r#""relevance score": 5/10"#, None)]
    #[case(r#""relevant score": five"#, None)]
    #[case(r#""relevant score": 99999999999"#, None)]
    #[case("", None)]
    fn extracts_scores(#[case] raw: &str, #[case] expected: Option<u32>) {
        assert_eq!(extract_relevance_score(raw), expected);
    }

    #[rstest]
    fn verdict_keeps_raw_response() {
        let agent = StaticAgent::new("```json\n\"relevant score\": 6/10\n```");
        let paper = PaperQuery::new("t", "cs.LG", "a", None);
        let verdict = score_with_agent(&agent, &paper, &["vision".to_owned()])
            .expect("static agent responds");
        assert_eq!(verdict.score, 6);
        assert!(verdict.raw_response.contains("6/10"));
    }

    #[rstest]
    fn unparsable_response_scores_zero() {
        let agent = StaticAgent::new("I cannot decide.");
        let paper = PaperQuery::new("t", "cs.LG", "a", None);
        let verdict = score_with_agent(&agent, &paper, &[]).expect("static agent responds");
        assert_eq!(verdict.score, 0);
        assert_eq!(verdict.raw_response, "I cannot decide.");
    }

    #[rstest]
    fn agent_errors_propagate() {
        let paper = PaperQuery::new("t", "cs.LG", "a", None);
        let err = score_with_agent(&FailingAgent, &paper, &[]).expect_err("agent fails");
        assert!(err.to_string().contains("failed to respond"));
    }
}
