//! Next-question decision shared by `decide_next` and `should_stop_now`.
//!
//! Both answers come out of the single [`assess`] pass so the question
//! picker and the stop signal cannot disagree.

use serde::Serialize;
use std::cmp::Ordering;

use tracing::debug;

use crate::domain::analysis::PowerCalculator;
use crate::domain::catalog::{Item, QuestionSet, QuestionSpec};
use crate::domain::selection::{QuestionHistory, SelectionState};

/// What the wizard should do next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "key", rename_all = "snake_case")]
pub enum NextStep {
    /// Ask the highest-scoring unanswered question.
    Ask(String),
    /// Offer the optional multi-select question (only ever once).
    OfferOptional(String),
    /// Nothing left to ask.
    Exhausted,
}

impl NextStep {
    pub fn question_key(&self) -> Option<&str> {
        match self {
            NextStep::Ask(key) | NextStep::OfferOptional(key) => Some(key.as_str()),
            NextStep::Exhausted => None,
        }
    }
}

/// Result of one decision pass over the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// How many items currently match.
    pub matching: usize,
    /// Every non-optional question has an answer (`Any` included).
    pub all_required_answered: bool,
    pub next: NextStep,
}

impl Assessment {
    /// The question to present, if any.
    pub fn next_question(&self) -> Option<&str> {
        self.next.question_key()
    }

    /// Whether results should be shown now.
    ///
    /// True on a singleton or empty result, once every required question is
    /// answered, or when nothing at all remains to be asked. The optional
    /// question may still be offered while this is true.
    pub fn should_stop(&self) -> bool {
        self.matching <= 1 || self.all_required_answered || self.next == NextStep::Exhausted
    }
}

/// Runs the decision over `items`, the currently matching subset.
pub fn assess(
    questions: &QuestionSet,
    selections: &SelectionState,
    history: &QuestionHistory,
    items: &[&Item],
) -> Assessment {
    let unanswered: Vec<&QuestionSpec> = questions
        .required()
        .filter(|q| !selections.is_answered(&q.key))
        .collect();
    let all_required_answered = unanswered.is_empty();

    let next = if items.len() <= 1 || all_required_answered {
        optional_or_exhausted(questions, history)
    } else {
        match best_question(&unanswered, items) {
            Some(key) => NextStep::Ask(key),
            None => optional_or_exhausted(questions, history),
        }
    };

    debug!(
        matching = items.len(),
        unanswered = unanswered.len(),
        next = ?next,
        "assessed wizard state"
    );

    Assessment {
        matching: items.len(),
        all_required_answered,
        next,
    }
}

/// Key of the next question to show, or `None` when nothing remains.
pub fn decide_next(
    questions: &QuestionSet,
    selections: &SelectionState,
    history: &QuestionHistory,
    items: &[&Item],
) -> Option<String> {
    assess(questions, selections, history, items)
        .next_question()
        .map(str::to_string)
}

/// Whether results should be shown now. See [`Assessment::should_stop`].
pub fn should_stop_now(
    questions: &QuestionSet,
    selections: &SelectionState,
    history: &QuestionHistory,
    items: &[&Item],
) -> bool {
    assess(questions, selections, history, items).should_stop()
}

/// Highest positive score wins; ties go to the earliest declared question.
fn best_question(unanswered: &[&QuestionSpec], items: &[&Item]) -> Option<String> {
    let mut scored: Vec<(&QuestionSpec, f64)> = unanswered
        .iter()
        .map(|q| (*q, PowerCalculator::power(q, items)))
        .filter(|(_, score)| *score > 0.0)
        .collect();

    // sort_by is stable, so declaration order survives among equal scores
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored.first().map(|(q, _)| q.key.clone())
}

fn optional_or_exhausted(questions: &QuestionSet, history: &QuestionHistory) -> NextStep {
    match questions.optional() {
        Some(optional) if !history.contains(&optional.key) => {
            NextStep::OfferOptional(optional.key.clone())
        }
        _ => NextStep::Exhausted,
    }
}
