//! Wizard behaviour and presentation timings

use serde::Deserialize;
use std::time::Duration;

use crate::application::handlers::WizardTiming;
use crate::domain::wizard::AdvanceMode;

use super::error::ValidationError;

/// Longest accepted timing value
const MAX_DURATION_MS: u64 = 60_000;

/// Wizard configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WizardConfig {
    /// `manual` or `auto`
    #[serde(default)]
    pub advance_mode: AdvanceMode,

    #[serde(default)]
    pub timing: TimingConfig,
}

/// Timings in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    #[serde(default = "default_fade_duration")]
    pub fade_duration_ms: u64,

    #[serde(default = "default_advance_delay")]
    pub advance_delay_ms: u64,

    #[serde(default = "default_auto_dismiss")]
    pub auto_dismiss_ms: u64,
}

impl WizardConfig {
    /// Timings as durations for the session handler
    pub fn timing(&self) -> WizardTiming {
        WizardTiming {
            fade: Duration::from_millis(self.timing.fade_duration_ms),
            advance_delay: Duration::from_millis(self.timing.advance_delay_ms),
            auto_dismiss: Duration::from_millis(self.timing.auto_dismiss_ms),
        }
    }

    /// Validate wizard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let timing = &self.timing;
        for (field, value) in [
            ("wizard.timing.fade_duration_ms", timing.fade_duration_ms),
            ("wizard.timing.advance_delay_ms", timing.advance_delay_ms),
            ("wizard.timing.auto_dismiss_ms", timing.auto_dismiss_ms),
        ] {
            if value > MAX_DURATION_MS {
                return Err(ValidationError::DurationTooLong {
                    field,
                    value,
                    max: MAX_DURATION_MS,
                });
            }
        }
        if self.advance_mode == AdvanceMode::Auto && timing.advance_delay_ms == 0 {
            return Err(ValidationError::InvalidAdvanceDelay);
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            fade_duration_ms: default_fade_duration(),
            advance_delay_ms: default_advance_delay(),
            auto_dismiss_ms: default_auto_dismiss(),
        }
    }
}

fn default_fade_duration() -> u64 {
    300
}

fn default_advance_delay() -> u64 {
    600
}

fn default_auto_dismiss() -> u64 {
    5000
}
