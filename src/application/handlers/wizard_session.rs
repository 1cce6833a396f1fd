//! Wizard session handler.
//!
//! The command surface a front-end drives for one session: start (with
//! optional pre-filled answers), answer, toggle, next, back, restart.
//! Every transition publishes a fresh [`WizardSnapshot`] on a watch
//! channel, including the deferred auto-advance.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::domain::catalog::{Catalog, Item};
use crate::domain::selection::Answer;
use crate::domain::wizard::{
    AdvanceMode, AnswerOutcome, Orchestrator, WizardError, WizardSnapshot,
};
use crate::ports::{AdvanceScheduler, AdvanceTask};

/// Presentation timings handed to the session and its front-end.
///
/// Only `advance_delay` drives the session; `fade` and `auto_dismiss` are
/// carried through [`WizardSessionHandler::timing`] for the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardTiming {
    /// Cross-fade between questions.
    pub fade: Duration,
    /// Pause between an answer and the auto-advance.
    pub advance_delay: Duration,
    /// How long transient notices stay visible.
    pub auto_dismiss: Duration,
}

impl Default for WizardTiming {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(300),
            advance_delay: Duration::from_millis(600),
            auto_dismiss: Duration::from_millis(5000),
        }
    }
}

/// Handler for one wizard session.
pub struct WizardSessionHandler {
    orchestrator: Arc<Mutex<Orchestrator>>,
    scheduler: Arc<dyn AdvanceScheduler>,
    updates: Arc<watch::Sender<WizardSnapshot>>,
    timing: WizardTiming,
}

impl WizardSessionHandler {
    pub fn new(
        catalog: Arc<Catalog>,
        mode: AdvanceMode,
        timing: WizardTiming,
        scheduler: Arc<dyn AdvanceScheduler>,
    ) -> Self {
        let orchestrator = Orchestrator::new(catalog, mode);
        let (updates, _) = watch::channel(orchestrator.snapshot());

        Self {
            orchestrator: Arc::new(Mutex::new(orchestrator)),
            scheduler,
            updates: Arc::new(updates),
            timing,
        }
    }

    /// Receiver that observes every published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<WizardSnapshot> {
        self.updates.subscribe()
    }

    pub fn timing(&self) -> WizardTiming {
        self.timing
    }

    /// Apply pre-filled answers, then present the first question.
    pub async fn start<I, K, V>(&self, prefill: I) -> Result<WizardSnapshot, WizardError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.scheduler.cancel();
        let mut orchestrator = self.orchestrator.lock().await;
        orchestrator.apply_prefill(prefill);
        orchestrator.select_next()?;
        Ok(self.publish(&orchestrator))
    }

    /// Record an answer for the active question.
    ///
    /// In auto mode a single-select answer schedules the advance; any
    /// advance still pending from an earlier answer is dropped first.
    pub async fn answer(&self, answer: Answer) -> Result<WizardSnapshot, WizardError> {
        self.scheduler.cancel();
        let mut orchestrator = self.orchestrator.lock().await;
        let outcome = orchestrator.answer(answer)?;
        self.after_answer(&orchestrator, outcome)
    }

    /// Flip one option of the active question.
    pub async fn toggle(&self, value: &str) -> Result<WizardSnapshot, WizardError> {
        self.scheduler.cancel();
        let mut orchestrator = self.orchestrator.lock().await;
        let outcome = orchestrator.toggle(value)?;
        self.after_answer(&orchestrator, outcome)
    }

    /// Explicit "next".
    pub async fn next(&self) -> Result<WizardSnapshot, WizardError> {
        self.scheduler.cancel();
        let mut orchestrator = self.orchestrator.lock().await;
        orchestrator.select_next()?;
        Ok(self.publish(&orchestrator))
    }

    pub async fn back(&self) -> Result<WizardSnapshot, WizardError> {
        self.scheduler.cancel();
        let mut orchestrator = self.orchestrator.lock().await;
        orchestrator.back()?;
        Ok(self.publish(&orchestrator))
    }

    /// Forget everything and present the first question again.
    pub async fn restart(&self) -> Result<WizardSnapshot, WizardError> {
        self.scheduler.cancel();
        let mut orchestrator = self.orchestrator.lock().await;
        orchestrator.restart()?;
        orchestrator.select_next()?;
        Ok(self.publish(&orchestrator))
    }

    pub async fn snapshot(&self) -> WizardSnapshot {
        self.orchestrator.lock().await.snapshot()
    }

    /// Items matching the current answers.
    pub async fn results(&self) -> Vec<Item> {
        let orchestrator = self.orchestrator.lock().await;
        orchestrator.matching_items().into_iter().cloned().collect()
    }

    pub fn is_advance_pending(&self) -> bool {
        self.scheduler.is_pending()
    }

    fn after_answer(
        &self,
        orchestrator: &Orchestrator,
        outcome: AnswerOutcome,
    ) -> Result<WizardSnapshot, WizardError> {
        let snapshot = self.publish(orchestrator);
        if outcome == AnswerOutcome::ScheduleAdvance {
            debug!(
                session_id = %orchestrator.session_id(),
                delay_ms = self.timing.advance_delay.as_millis() as u64,
                "scheduling auto-advance"
            );
            self.scheduler
                .schedule(self.timing.advance_delay, self.advance_task());
        }
        Ok(snapshot)
    }

    fn advance_task(&self) -> AdvanceTask {
        let orchestrator = Arc::clone(&self.orchestrator);
        let updates = Arc::clone(&self.updates);

        Box::pin(async move {
            let mut orchestrator = orchestrator.lock().await;
            match orchestrator.select_next() {
                Ok(_) => {
                    updates.send_replace(orchestrator.snapshot());
                }
                Err(e) => warn!(error = %e, "auto-advance skipped"),
            }
        })
    }

    fn publish(&self, orchestrator: &Orchestrator) -> WizardSnapshot {
        let snapshot = orchestrator.snapshot();
        self.updates.send_replace(snapshot.clone());
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::TokioAdvanceScheduler;
    use crate::domain::catalog::{AttributeValue, QuestionSet, QuestionSpec};
    use crate::domain::wizard::WizardStatus;

    fn catalog() -> Arc<Catalog> {
        let questions = QuestionSet::new(vec![
            QuestionSpec::category("skinType", "skinType", "universal"),
            QuestionSpec::boolean("fragranceFree", "fragranceFree"),
            QuestionSpec::contains_all("specialFeatures", "specialFeatures"),
        ])
        .unwrap();
        let items = vec![
            Item::new(1)
                .with("skinType", "oily")
                .with("fragranceFree", true)
                .with("specialFeatures", AttributeValue::list(["eco"])),
            Item::new(2)
                .with("skinType", "dry")
                .with("fragranceFree", true),
            Item::new(3)
                .with("skinType", "normal")
                .with("fragranceFree", false),
            Item::new(4)
                .with("skinType", "oily")
                .with("fragranceFree", false),
        ];
        Arc::new(Catalog::new(questions, items).unwrap())
    }

    fn handler(mode: AdvanceMode) -> WizardSessionHandler {
        let timing = WizardTiming {
            advance_delay: Duration::from_millis(20),
            ..WizardTiming::default()
        };
        WizardSessionHandler::new(
            catalog(),
            mode,
            timing,
            Arc::new(TokioAdvanceScheduler::new()),
        )
    }

    fn active(snapshot: &WizardSnapshot) -> Option<&str> {
        snapshot.active_question.as_ref().map(|q| q.key.as_str())
    }

    #[test]
    fn timing_is_exposed_to_the_front_end() {
        let timing = WizardTiming {
            fade: Duration::from_millis(120),
            advance_delay: Duration::from_millis(400),
            auto_dismiss: Duration::from_millis(2500),
        };
        let handler = WizardSessionHandler::new(
            catalog(),
            AdvanceMode::Auto,
            timing,
            Arc::new(TokioAdvanceScheduler::new()),
        );

        assert_eq!(handler.timing(), timing);
        assert_eq!(WizardTiming::default().fade, Duration::from_millis(300));
        assert_eq!(
            WizardTiming::default().auto_dismiss,
            Duration::from_millis(5000)
        );
    }

    #[tokio::test]
    async fn start_presents_first_question() {
        let handler = handler(AdvanceMode::Manual);

        let snapshot = handler.start(Vec::<(String, String)>::new()).await.unwrap();

        assert_eq!(active(&snapshot), Some("skinType"));
        assert_eq!(snapshot.matching_item_ids.len(), 4);
    }

    #[tokio::test]
    async fn start_with_prefill_skips_answered_questions() {
        let handler = handler(AdvanceMode::Manual);

        let snapshot = handler.start([("skinType", "oily")]).await.unwrap();

        assert_eq!(active(&snapshot), Some("fragranceFree"));
        assert_eq!(snapshot.matching_item_ids.len(), 2);
    }

    #[tokio::test]
    async fn manual_mode_waits_for_next() {
        let handler = handler(AdvanceMode::Manual);
        handler.start(Vec::<(String, String)>::new()).await.unwrap();

        let snapshot = handler.answer(Answer::parse("oily")).await.unwrap();
        assert_eq!(active(&snapshot), Some("skinType"));
        assert!(!handler.is_advance_pending());

        let snapshot = handler.next().await.unwrap();
        assert_eq!(active(&snapshot), Some("fragranceFree"));
    }

    #[tokio::test]
    async fn auto_mode_advances_after_delay_and_publishes() {
        let handler = handler(AdvanceMode::Auto);
        let mut updates = handler.subscribe();
        handler.start(Vec::<(String, String)>::new()).await.unwrap();

        handler.answer(Answer::parse("oily")).await.unwrap();
        assert!(handler.is_advance_pending());

        tokio::time::sleep(Duration::from_millis(100)).await;

        let latest = updates.borrow_and_update().clone();
        assert_eq!(active(&latest), Some("fragranceFree"));
    }

    #[tokio::test]
    async fn rapid_answers_advance_only_once() {
        let handler = handler(AdvanceMode::Auto);
        handler.start(Vec::<(String, String)>::new()).await.unwrap();

        handler.answer(Answer::parse("dry")).await.unwrap();
        handler.answer(Answer::parse("oily")).await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let snapshot = handler.snapshot().await;
        assert_eq!(active(&snapshot), Some("fragranceFree"));
        assert_eq!(snapshot.history, vec!["skinType", "fragranceFree"]);
    }

    #[tokio::test]
    async fn back_cancels_pending_advance() {
        let handler = handler(AdvanceMode::Auto);
        handler.start(Vec::<(String, String)>::new()).await.unwrap();
        handler.answer(Answer::parse("oily")).await.unwrap();

        handler.back().await.unwrap();
        tokio::time::sleep(Duration::from_millis(100)).await;

        let snapshot = handler.snapshot().await;
        assert_eq!(active(&snapshot), Some("skinType"));
        assert!(!handler.is_advance_pending());
    }

    #[tokio::test]
    async fn answer_before_start_is_rejected() {
        let handler = handler(AdvanceMode::Manual);
        assert_eq!(
            handler.answer(Answer::Any).await,
            Err(WizardError::NoActiveQuestion)
        );
    }

    #[tokio::test]
    async fn full_session_reaches_results() {
        let handler = handler(AdvanceMode::Manual);
        handler.start(Vec::<(String, String)>::new()).await.unwrap();
        handler.answer(Answer::parse("oily")).await.unwrap();
        handler.next().await.unwrap();
        handler.answer(Answer::parse("true")).await.unwrap();

        let snapshot = handler.next().await.unwrap();
        assert_eq!(active(&snapshot), Some("specialFeatures"));

        handler.toggle("eco").await.unwrap();
        let snapshot = handler.next().await.unwrap();

        assert_eq!(snapshot.status, WizardStatus::Exhausted);
        assert!(snapshot.should_stop);
        let results = handler.results().await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id.value(), 1);
    }

    #[tokio::test]
    async fn restart_begins_again() {
        let handler = handler(AdvanceMode::Manual);
        handler.start([("skinType", "dry")]).await.unwrap();

        let snapshot = handler.restart().await.unwrap();

        assert!(snapshot.selections.is_empty());
        assert_eq!(snapshot.history, vec!["skinType"]);
        assert_eq!(active(&snapshot), Some("skinType"));
    }
}
