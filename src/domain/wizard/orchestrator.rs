//! Orchestrator - question flow for one wizard session.
//!
//! Owns the selection state and the question history for a single session
//! and holds a shared reference to the catalog. Pure domain logic; the
//! presentation delay for auto-advance is scheduled by the caller.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::catalog::{Catalog, Item, PredicateKind, QuestionSpec};
use crate::domain::filter::FilterEngine;
use crate::domain::foundation::{SessionId, StateMachine};
use crate::domain::selection::{Answer, QuestionHistory, SelectionState};

use super::{
    decision::{assess, Assessment},
    errors::WizardError,
    values::{AdvanceMode, AnswerOutcome},
    view::{QuestionView, WizardSnapshot},
    WizardStatus,
};

/// Manages question flow within a session
#[derive(Debug, Clone)]
pub struct Orchestrator {
    session_id: SessionId,
    catalog: Arc<Catalog>,
    mode: AdvanceMode,
    selections: SelectionState,
    history: QuestionHistory,
    status: WizardStatus,
    active: Option<String>,
}

impl Orchestrator {
    /// Create a fresh session over `catalog`
    pub fn new(catalog: Arc<Catalog>, mode: AdvanceMode) -> Self {
        let session_id = SessionId::new();
        info!(
            %session_id,
            items = catalog.items().len(),
            questions = catalog.questions().len(),
            "wizard session created"
        );

        Self {
            session_id,
            catalog,
            mode,
            selections: SelectionState::new(),
            history: QuestionHistory::new(),
            status: WizardStatus::Idle,
            active: None,
        }
    }

    /// Items matching the current selections, in catalog order.
    pub fn matching_items(&self) -> Vec<&Item> {
        FilterEngine::filter_catalog(&self.catalog, &self.selections)
    }

    /// Runs the shared decision pass over the current state.
    pub fn assess(&self) -> Assessment {
        let items = self.matching_items();
        assess(
            self.catalog.questions(),
            &self.selections,
            &self.history,
            &items,
        )
    }

    /// Key of the question `select_next` would present.
    pub fn decide_next(&self) -> Option<String> {
        self.assess().next_question().map(str::to_string)
    }

    /// Whether results should be shown now.
    pub fn should_stop_now(&self) -> bool {
        self.assess().should_stop()
    }

    /// Pick the next question, or move to `Exhausted`.
    ///
    /// Returns the newly active question key. Appends it to the history
    /// unless it is already the last entry.
    pub fn select_next(&mut self) -> Result<Option<&str>, WizardError> {
        let assessment = self.assess();

        match assessment.next_question() {
            Some(key) => {
                let key = key.to_string();
                self.move_to(WizardStatus::QuestionActive)?;
                if self.history.last() != Some(key.as_str()) {
                    self.history.push(key.clone());
                }
                debug!(
                    session_id = %self.session_id,
                    question = %key,
                    matching = assessment.matching,
                    "question selected"
                );
                self.active = Some(key);
            }
            None => {
                self.move_to(WizardStatus::Exhausted)?;
                self.active = None;
                info!(
                    session_id = %self.session_id,
                    matching = assessment.matching,
                    "questions exhausted"
                );
            }
        }

        Ok(self.active.as_deref())
    }

    /// Record an answer for the active question.
    ///
    /// The multi-select question always stores the full chosen set and
    /// waits for an explicit "next"; other questions follow the session's
    /// advance mode.
    pub fn answer(&mut self, answer: Answer) -> Result<AnswerOutcome, WizardError> {
        let question = self.active_question().ok_or(WizardError::NoActiveQuestion)?;
        let key = question.key.clone();
        let multi_select = question.predicate == PredicateKind::ContainsAll;

        let recorded = if multi_select {
            Answer::Values(answer.as_value_set())
        } else {
            answer
        };
        debug!(session_id = %self.session_id, question = %key, answer = ?recorded, "answer recorded");
        self.selections.set(key, recorded);

        Ok(match (multi_select, self.mode) {
            (false, AdvanceMode::Auto) => AnswerOutcome::ScheduleAdvance,
            _ => AnswerOutcome::AwaitNext,
        })
    }

    /// Flip one value of the active multi-select question.
    ///
    /// On a single-select question this is a plain answer.
    pub fn toggle(&mut self, value: &str) -> Result<AnswerOutcome, WizardError> {
        let question = self.active_question().ok_or(WizardError::NoActiveQuestion)?;

        if question.predicate != PredicateKind::ContainsAll {
            return self.answer(Answer::parse(value));
        }

        let mut chosen = self
            .selections
            .get(&question.key)
            .map(Answer::as_value_set)
            .unwrap_or_default();
        if !chosen.remove(value) {
            chosen.insert(value.to_string());
        }
        self.answer(Answer::Values(chosen))
    }

    /// Step back one question.
    ///
    /// Answers are kept; only the position moves. From `Exhausted` the last
    /// question shown becomes active again. Otherwise the active question
    /// is popped and the previous one reactivated; if nothing remains the
    /// next question is selected afresh.
    pub fn back(&mut self) -> Result<Option<&str>, WizardError> {
        if self.status.is_exhausted() {
            if let Some(last) = self.history.last().map(str::to_string) {
                self.move_to(WizardStatus::QuestionActive)?;
                self.active = Some(last);
                return Ok(self.active.as_deref());
            }
        } else {
            self.history.pop();
        }

        match self.history.last().map(str::to_string) {
            Some(previous) => {
                self.move_to(WizardStatus::QuestionActive)?;
                debug!(session_id = %self.session_id, question = %previous, "navigated back");
                self.active = Some(previous);
                Ok(self.active.as_deref())
            }
            None => {
                self.move_to(WizardStatus::Idle)?;
                self.active = None;
                self.select_next()
            }
        }
    }

    /// Forget every answer and all history.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        self.move_to(WizardStatus::Idle)?;
        self.selections.reset();
        self.history.clear();
        self.active = None;
        info!(session_id = %self.session_id, "wizard restarted");
        Ok(())
    }

    /// Apply externally supplied answers (e.g. from a shared link).
    ///
    /// Unknown keys and blank values are skipped. The multi-select question
    /// takes a comma-separated list, and `any`/`all` there means no filter.
    /// Returns the keys that were applied.
    pub fn apply_prefill<I, K, V>(&mut self, params: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut applied = Vec::new();

        for (key, raw) in params {
            let (key, raw) = (key.as_ref(), raw.as_ref());
            let Some(question) = self.catalog.questions().get(key) else {
                warn!(session_id = %self.session_id, key, "ignoring prefill for unknown question");
                continue;
            };

            if raw.trim().is_empty() {
                warn!(session_id = %self.session_id, key, "ignoring blank prefill value");
                continue;
            }

            let answer = match (&question.predicate, Answer::parse(raw)) {
                (PredicateKind::ContainsAll, Answer::Any) => Answer::values(Vec::<String>::new()),
                (PredicateKind::ContainsAll, _) => Answer::values(
                    raw.split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty()),
                ),
                (_, answer) => answer,
            };
            self.selections.set(question.key.clone(), answer);
            applied.push(question.key.clone());
        }

        debug!(session_id = %self.session_id, applied = ?applied, "prefill applied");
        applied
    }

    /// View of any configured question against the current selections.
    pub fn question_view(&self, key: &str) -> Option<QuestionView> {
        QuestionView::build(&self.catalog, &self.selections, key)
    }

    /// View of the active question, if any.
    pub fn active_view(&self) -> Option<QuestionView> {
        self.question_view(self.active.as_deref()?)
    }

    /// Everything a front-end needs to render the current state.
    pub fn snapshot(&self) -> WizardSnapshot {
        let items = self.matching_items();
        let assessment = assess(
            self.catalog.questions(),
            &self.selections,
            &self.history,
            &items,
        );

        WizardSnapshot {
            session_id: self.session_id,
            status: self.status,
            active_question: self.active_view(),
            matching_item_ids: items.iter().map(|item| item.id).collect(),
            history: self.history.iter().map(str::to_string).collect(),
            selections: self.selections.clone(),
            should_stop: assessment.should_stop(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn status(&self) -> WizardStatus {
        self.status
    }

    pub fn mode(&self) -> AdvanceMode {
        self.mode
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selections(&self) -> &SelectionState {
        &self.selections
    }

    pub fn history(&self) -> &QuestionHistory {
        &self.history
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_question(&self) -> Option<&QuestionSpec> {
        self.catalog.questions().get(self.active.as_deref()?)
    }

    fn move_to(&mut self, target: WizardStatus) -> Result<(), WizardError> {
        self.status = self
            .status
            .transition_to(target)
            .map_err(|_| WizardError::InvalidTransition {
                from: self.status,
                to: target,
            })?;
        Ok(())
    }
}
