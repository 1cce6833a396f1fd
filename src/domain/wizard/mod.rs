//! Wizard Domain Module
//!
//! Decides which question to ask next, when to stop, and how navigation
//! moves through a session.
//!
//! # Architecture
//!
//! - **decision**: one shared pass producing both the next question and the
//!   stop signal
//! - **Orchestrator**: per-session state (selections, history, status)
//! - **WizardStatus**: session lifecycle state machine
//! - **view**: read models for the presentation layer
//!
//! # Example
//!
//! ```ignore
//! let mut orchestrator = Orchestrator::new(catalog, AdvanceMode::Manual);
//! orchestrator.select_next()?;
//! orchestrator.answer(Answer::parse("oily"))?;
//! orchestrator.select_next()?;
//! ```

pub mod decision;
pub mod errors;
pub mod orchestrator;
pub mod status;
pub mod values;
pub mod view;

pub use decision::{assess, decide_next, should_stop_now, Assessment, NextStep};
pub use errors::WizardError;
pub use orchestrator::Orchestrator;
pub use status::WizardStatus;
pub use values::{AdvanceMode, AnswerOutcome};
pub use view::{OptionView, QuestionView, WizardSnapshot};
