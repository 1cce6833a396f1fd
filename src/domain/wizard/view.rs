//! Read models handed to the presentation layer.

use serde::Serialize;

use crate::domain::catalog::{Catalog, PredicateKind, QuestionSpec};
use crate::domain::filter::FilterEngine;
use crate::domain::foundation::{ItemId, SessionId};
use crate::domain::selection::{Answer, SelectionState, ANY_SENTINEL};

use super::WizardStatus;

/// One selectable option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionView {
    pub value: String,
    /// False when choosing it would leave no matching items.
    pub available: bool,
    pub selected: bool,
}

/// A question ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub key: String,
    pub attribute: String,
    pub ordinal_position: u32,
    pub optional: bool,
    pub multi_select: bool,
    pub options: Vec<OptionView>,
}

impl QuestionView {
    /// Builds the view for `key`, or `None` if the key is not configured.
    ///
    /// Options are the distinct values seen across the whole catalog, in
    /// first-seen order, minus catch-all markers. Boolean questions always
    /// offer `true` and `false`; single-select questions add `any`.
    pub fn build(catalog: &Catalog, selections: &SelectionState, key: &str) -> Option<Self> {
        let question = catalog.questions().get(key)?;
        let multi_select = question.predicate == PredicateKind::ContainsAll;
        let current = selections.get(key);

        let mut values = Self::option_values(catalog, question);
        if !multi_select {
            values.push(ANY_SENTINEL.to_string());
        }

        let options = values
            .into_iter()
            .map(|value| {
                let candidate = if multi_select {
                    Answer::values([value.clone()])
                } else {
                    Answer::parse(&value)
                };
                OptionView {
                    available: FilterEngine::would_match_anything(
                        catalog.questions(),
                        catalog.items(),
                        selections,
                        key,
                        &candidate,
                    ),
                    selected: Self::is_selected(current, &candidate),
                    value,
                }
            })
            .collect();

        Some(Self {
            key: question.key.clone(),
            attribute: question.attribute.clone(),
            ordinal_position: question.ordinal_position,
            optional: question.optional,
            multi_select,
            options,
        })
    }

    fn option_values(catalog: &Catalog, question: &QuestionSpec) -> Vec<String> {
        if question.predicate == PredicateKind::Boolean {
            return vec!["true".to_string(), "false".to_string()];
        }

        let catch_all = question.predicate.catch_all();
        let mut values: Vec<String> = Vec::new();
        for item in catalog.items() {
            let Some(value) = item.attribute(&question.attribute) else {
                continue;
            };
            for observed in value.observed_values() {
                if Some(&*observed) == catch_all || values.iter().any(|v| v == &observed) {
                    continue;
                }
                values.push(observed.into_owned());
            }
        }
        values
    }

    fn is_selected(current: Option<&Answer>, candidate: &Answer) -> bool {
        match (current, candidate) {
            (Some(Answer::Values(chosen)), Answer::Values(wanted)) => wanted.is_subset(chosen),
            (Some(current), candidate) => current == candidate,
            (None, _) => false,
        }
    }
}

/// Everything a front-end needs after a transition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WizardSnapshot {
    pub session_id: SessionId,
    pub status: WizardStatus,
    pub active_question: Option<QuestionView>,
    pub matching_item_ids: Vec<ItemId>,
    pub history: Vec<String>,
    pub selections: SelectionState,
    pub should_stop: bool,
}
