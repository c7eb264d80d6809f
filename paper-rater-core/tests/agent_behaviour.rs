#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for reducing agent responses to scores.

use std::cell::RefCell;

use paper_rater_core::{
    AgentError, AgentVerdict, PaperQuery, RelevanceAgent, score_with_agent,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Agent double whose behaviour is chosen by the scenario.
#[derive(Debug, Default)]
pub struct ScriptedAgent {
    reply: Option<String>,
}

impl RelevanceAgent for ScriptedAgent {
    fn respond(&self, _paper: &PaperQuery, _topics: &[String]) -> Result<String, AgentError> {
        self.reply.clone().ok_or_else(|| AgentError::Respond {
            message: "backend offline".to_owned(),
        })
    }
}

/// Aggregate state shared by the steps of a scenario.
#[derive(Debug, Default)]
pub struct AgentWorld {
    agent: RefCell<ScriptedAgent>,
    outcome: RefCell<Option<Result<AgentVerdict, AgentError>>>,
}

#[fixture]
/// Build a fresh `AgentWorld` for each scenario run.
pub fn world() -> AgentWorld {
    AgentWorld::default()
}

#[given("an agent that answers with a fenced relevant score of 7 out of 10")]
fn agent_with_score(world: &AgentWorld) {
    world.agent.borrow_mut().reply =
        Some("```json\n{\n  \"relevant score\": 7/10\n}\n```".to_owned());
}

#[given("an agent that answers without any score")]
fn agent_without_score(world: &AgentWorld) {
    world.agent.borrow_mut().reply = Some("This paper is about robots.".to_owned());
}

#[given("an agent whose backend is offline")]
fn agent_offline(world: &AgentWorld) {
    world.agent.borrow_mut().reply = None;
}

#[when("I ask the agent about a vision paper")]
fn ask_agent(world: &AgentWorld) {
    let paper = PaperQuery::new(
        "Efficient Image Segmentation",
        "cs.CV",
        "We segment images quickly.",
        None,
    );
    let topics = ["computer vision".to_owned()];
    let outcome = score_with_agent(&*world.agent.borrow(), &paper, &topics);
    *world.outcome.borrow_mut() = Some(outcome);
}

#[then("the verdict score is {score}")]
fn verdict_score(world: &AgentWorld, score: u32) {
    let outcome = world.outcome.borrow();
    let verdict = outcome
        .as_ref()
        .expect("agent was asked")
        .as_ref()
        .expect("agent answered");
    assert_eq!(verdict.score, score);
}

#[then("the request fails")]
fn request_fails(world: &AgentWorld) {
    let outcome = world.outcome.borrow();
    assert!(matches!(
        outcome.as_ref().expect("agent was asked"),
        Err(AgentError::Respond { .. })
    ));
}

#[scenario(path = "tests/features/agent.feature", index = 0)]
fn fenced_answer_yields_score(world: AgentWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/agent.feature", index = 1)]
fn missing_score_falls_back_to_zero(world: AgentWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/agent.feature", index = 2)]
fn offline_agent_fails(world: AgentWorld) {
    let _ = world;
}
