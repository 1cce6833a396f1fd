//! Filter module - the predicate filter engine.
//!
//! All functions are pure: they take the question configuration, the items
//! and a selection state, and return the matching subset or a probe result.

mod engine;
mod predicate;

pub use engine::FilterEngine;
