//! Priority suggestions behind a pluggable text-generation provider.
//!
//! The core never talks to a network itself: a [`SuggestionProvider`] takes
//! a free-text prompt built from the current task list and returns raw text.
//! On success the scorer expects a flat JSON object mapping task names to
//! scores in [1, 10]. On any provider or parse failure the deterministic
//! local heuristic takes over — `score = duration / (dependency ? 2 : 1)`,
//! sorted descending. The fallback is a contract, not a convenience: it is
//! always reachable regardless of which provider is wired in.

mod advice;

pub use advice::recommendations;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::Write as _;

use thiserror::Error;
use tracing::warn;

use crate::models::Task;

/// Failure reported by a suggestion provider.
///
/// Carries a message only; transport detail stays inside the provider.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct ProviderError(pub String);

/// An external text-generation collaborator.
///
/// Implementations own their transport, credentials, and timeouts; callers
/// see a synchronous prompt-in, text-out contract. A real model client and a
/// canned test double plug in interchangeably.
pub trait SuggestionProvider: Send + Sync {
    /// Provider name, for logs.
    fn name(&self) -> &'static str;

    /// Generates raw text for a prompt.
    fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Where a task's score came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreSource {
    /// Parsed from a provider response.
    Provider,
    /// Computed by the local fallback heuristic.
    Heuristic,
}

/// A task's priority score.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskScore {
    /// Task name.
    pub name: String,
    /// Priority score; higher = schedule attention first.
    pub score: f64,
    /// Provenance of the score.
    pub source: ScoreSource,
}

/// Builds the priority-scoring prompt: a summary line set per task and an
/// instruction to answer with a bare name→score JSON object.
pub fn priority_prompt(tasks: &[Task]) -> String {
    let mut prompt = String::from("I have the following project tasks:\n");
    for task in tasks {
        let _ = writeln!(
            prompt,
            "- Task: {} | Duration: {} days | Team: {} | Humans: {} | Bots: {} | Dependency: {}",
            task.name,
            task.duration_days,
            task.team.label(),
            task.human_count,
            task.bot_count,
            task.dependency.as_deref().unwrap_or("None"),
        );
    }
    prompt.push_str(
        "\nAssign each task a priority score from 1 to 10 (10 = highest), \
         considering the critical path and resource constraints. Return ONLY \
         a JSON object with task names as keys and scores as values, e.g. \
         { \"Task1\": 8.5, \"Task2\": 6.2 }. No other text.",
    );
    prompt
}

/// Scores every task, preferring the provider and falling back locally.
///
/// Provider output is parsed leniently: the first `{ ... }` block in the
/// response is taken as the score object, and tasks the provider omitted
/// default to 5.0. Any provider or parse failure switches the whole result
/// to [`heuristic_scores`]. Output is always sorted by score descending,
/// ties keeping input order.
pub fn priority_scores(provider: &dyn SuggestionProvider, tasks: &[Task]) -> Vec<TaskScore> {
    let prompt = priority_prompt(tasks);

    match provider.complete(&prompt) {
        Ok(text) => match parse_scores(&text) {
            Some(map) => {
                let mut scores: Vec<TaskScore> = tasks
                    .iter()
                    .map(|t| TaskScore {
                        name: t.name.clone(),
                        score: map.get(&t.name).copied().unwrap_or(5.0),
                        source: ScoreSource::Provider,
                    })
                    .collect();
                sort_descending(&mut scores);
                scores
            }
            None => {
                warn!(provider = provider.name(), "unparseable score response, using heuristic");
                heuristic_scores(tasks)
            }
        },
        Err(err) => {
            warn!(provider = provider.name(), %err, "provider failed, using heuristic");
            heuristic_scores(tasks)
        }
    }
}

/// Local fallback: `score = duration / (dependency ? 2 : 1)`, descending.
pub fn heuristic_scores(tasks: &[Task]) -> Vec<TaskScore> {
    let mut scores: Vec<TaskScore> = tasks
        .iter()
        .map(|t| TaskScore {
            name: t.name.clone(),
            score: f64::from(t.duration_days) / if t.has_dependency() { 2.0 } else { 1.0 },
            source: ScoreSource::Heuristic,
        })
        .collect();
    sort_descending(&mut scores);
    scores
}

fn sort_descending(scores: &mut [TaskScore]) {
    // Stable sort: equal scores keep input (insertion) order.
    scores.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

/// Extracts the first `{ ... }` block and parses it as name→score.
fn parse_scores(text: &str) -> Option<HashMap<String, f64>> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
