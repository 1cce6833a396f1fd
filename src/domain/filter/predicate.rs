//! Predicate evaluation for a single question against a single item.

use crate::domain::catalog::{AttributeValue, PredicateKind};
use crate::domain::selection::Answer;

impl PredicateKind {
    /// Evaluates this predicate for one item value.
    ///
    /// Unfiltered answers (`Any`, empty multi-select) always pass. Past that,
    /// a missing attribute or an answer of the wrong shape fails closed.
    pub fn matches(&self, value: Option<&AttributeValue>, answer: &Answer) -> bool {
        if answer.is_unfiltered() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };

        match (self, answer) {
            (PredicateKind::Boolean, Answer::Value(raw)) => {
                matches!(raw.as_str(), "true" | "false") && value.contains(raw)
            }
            (PredicateKind::CategoryOrCatchAll { catch_all }, Answer::Value(raw))
            | (PredicateKind::ContainsOrCatchAll { catch_all }, Answer::Value(raw)) => {
                value.contains(raw) || value.contains(catch_all)
            }
            (PredicateKind::Contains, Answer::Value(raw)) => value.contains(raw),
            (PredicateKind::ContainsAll, wanted) => {
                value.is_list() && wanted.as_value_set().iter().all(|v| value.contains(v))
            }
            _ => false,
        }
    }
}
