//! Analysis Module - Pure scoring services for question ranking.
//!
//! # Components
//!
//! - `PowerCalculator` - entropy-based discriminating power of a question
//!
//! All functions are pure and stateless. They take the question
//! configuration and the currently matching items and return a score.

mod discriminating_power;

pub use discriminating_power::PowerCalculator;
