//! Error types for the wizard domain.

use super::WizardStatus;

/// Session misuse. Bad keys and values never end up here; they degrade to
/// zero scores or empty results instead.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum WizardError {
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition {
        from: WizardStatus,
        to: WizardStatus,
    },

    #[error("No question is active")]
    NoActiveQuestion,
}
