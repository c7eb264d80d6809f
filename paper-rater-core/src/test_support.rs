//! Test-only `RelevanceAgent` implementations used by unit and behaviour
//! tests.

use std::sync::Mutex;

use crate::{AgentError, PaperQuery, RelevanceAgent};

/// Agent that answers every request with the same canned text.
///
/// Each request is recorded so tests can assert on what the agent saw.
#[derive(Debug, Default)]
pub struct StaticAgent {
    response: String,
    seen: Mutex<Vec<(String, Vec<String>)>>,
}

impl StaticAgent {
    /// Create an agent that always replies with `response`.
    #[must_use]
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Titles and topics of every request answered so far.
    #[must_use]
    pub fn requests(&self) -> Vec<(String, Vec<String>)> {
        self.seen
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

impl RelevanceAgent for StaticAgent {
    fn respond(&self, paper: &PaperQuery, topics: &[String]) -> Result<String, AgentError> {
        if let Ok(mut guard) = self.seen.lock() {
            guard.push((paper.title.clone(), topics.to_vec()));
        }
        Ok(self.response.clone())
    }
}

/// Agent whose backend is always unavailable.
#[derive(Debug, Default, Copy, Clone)]
pub struct FailingAgent;

impl RelevanceAgent for FailingAgent {
    fn respond(&self, _paper: &PaperQuery, _topics: &[String]) -> Result<String, AgentError> {
        Err(AgentError::Respond {
            message: "model offline".to_owned(),
        })
    }
}
