//! Application handlers.
//!
//! Command handlers that drive a wizard session through the domain and ports.

mod wizard_session;

pub use wizard_session::{WizardSessionHandler, WizardTiming};
