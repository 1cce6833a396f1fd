//! FilterEngine - narrows a catalog to the items matching a selection state.

use tracing::trace;

use crate::domain::catalog::{Catalog, Item, PredicateKind, QuestionSet};
use crate::domain::selection::{Answer, SelectionState};

/// Pure catalog filtering functions.
pub struct FilterEngine;

impl FilterEngine {
    /// Returns the items matching every recorded answer.
    ///
    /// Each configured question contributes one predicate, AND-ed together.
    /// Answers for keys that are not configured are ignored. Catalog order
    /// is preserved.
    ///
    /// # Edge Cases
    /// - Empty catalog: returns empty Vec
    /// - No answers, or only `Any` answers: returns every item
    pub fn filter<'a>(
        questions: &QuestionSet,
        items: &'a [Item],
        selections: &SelectionState,
    ) -> Vec<&'a Item> {
        let matched: Vec<&Item> = items
            .iter()
            .filter(|item| Self::matches(questions, item, selections))
            .collect();

        trace!(
            total = items.len(),
            matched = matched.len(),
            "filtered catalog"
        );
        matched
    }

    /// Convenience wrapper over [`FilterEngine::filter`] for a whole catalog.
    pub fn filter_catalog<'a>(catalog: &'a Catalog, selections: &SelectionState) -> Vec<&'a Item> {
        Self::filter(catalog.questions(), catalog.items(), selections)
    }

    /// Checks one item against every recorded answer.
    pub fn matches(questions: &QuestionSet, item: &Item, selections: &SelectionState) -> bool {
        questions.iter().all(|question| match selections.get(&question.key) {
            Some(answer) => question
                .predicate
                .matches(item.attribute(&question.attribute), answer),
            None => true,
        })
    }

    /// Read-only probe: would anything still match if `candidate` were
    /// chosen for `key`?
    ///
    /// Scalar questions replace their current answer; the multi-select
    /// question adds the candidate to what is already chosen. The real
    /// selection state is never touched.
    pub fn would_match_anything(
        questions: &QuestionSet,
        items: &[Item],
        selections: &SelectionState,
        key: &str,
        candidate: &Answer,
    ) -> bool {
        let probe = Self::with_candidate(questions, selections, key, candidate);
        items.iter().any(|item| Self::matches(questions, item, &probe))
    }

    /// Copy of `selections` with `candidate` applied to `key`.
    pub fn with_candidate(
        questions: &QuestionSet,
        selections: &SelectionState,
        key: &str,
        candidate: &Answer,
    ) -> SelectionState {
        let mut probe = selections.clone();
        let is_contains_all = questions
            .get(key)
            .map(|q| q.predicate == PredicateKind::ContainsAll)
            .unwrap_or(false);

        let merged = match (is_contains_all, selections.get(key)) {
            (true, Some(existing)) => {
                let mut values = existing.as_value_set();
                values.extend(candidate.as_value_set());
                Answer::Values(values)
            }
            _ => candidate.clone(),
        };
        probe.set(key, merged);
        probe
    }
}
