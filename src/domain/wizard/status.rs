//! WizardStatus - lifecycle of one questionnaire session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WizardStatus {
    /// No question active yet (fresh or restarted session).
    #[default]
    Idle,
    /// A question is being shown.
    QuestionActive,
    /// Nothing left worth asking; results should be shown.
    Exhausted,
}

impl WizardStatus {
    pub fn is_exhausted(&self) -> bool {
        matches!(self, WizardStatus::Exhausted)
    }
}

impl StateMachine for WizardStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WizardStatus::*;
        matches!(
            (self, target),
            (Idle, Idle)
                | (Idle, QuestionActive)
                | (Idle, Exhausted)
                | (QuestionActive, QuestionActive)
                | (QuestionActive, Exhausted)
                | (QuestionActive, Idle)
                | (Exhausted, QuestionActive)
                | (Exhausted, Idle)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WizardStatus::*;
        match self {
            Idle => vec![Idle, QuestionActive, Exhausted],
            QuestionActive => vec![QuestionActive, Exhausted, Idle],
            Exhausted => vec![QuestionActive, Idle],
        }
    }
}

impl fmt::Display for WizardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WizardStatus::Idle => "Idle",
            WizardStatus::QuestionActive => "Question Active",
            WizardStatus::Exhausted => "Exhausted",
        };
        write!(f, "{}", s)
    }
}
