//! Value types for wizard flow control.

use serde::{Deserialize, Serialize};

/// How the wizard moves on after an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AdvanceMode {
    /// The caller sends an explicit "next".
    Manual,
    /// The next question is selected after a short presentation delay.
    #[default]
    Auto,
}

/// What the caller should do after an answer was recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Wait for an explicit "next".
    AwaitNext,
    /// Schedule a deferred `select_next`.
    ScheduleAdvance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_mode_defaults_to_auto() {
        assert_eq!(AdvanceMode::default(), AdvanceMode::Auto);
    }

    #[test]
    fn advance_mode_deserializes_lowercase() {
        let mode: AdvanceMode = serde_json::from_str("\"manual\"").unwrap();
        assert_eq!(mode, AdvanceMode::Manual);
    }
}
