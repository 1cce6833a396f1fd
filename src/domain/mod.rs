//! Domain layer containing the questionnaire logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors, state machine)
//! - `catalog` - Items, question configuration and the validated catalog
//! - `selection` - Answers and question history
//! - `filter` - Predicate filter engine
//! - `analysis` - Discriminating-power scoring
//! - `wizard` - Question orchestration and stop decisions

pub mod analysis;
pub mod catalog;
pub mod filter;
pub mod foundation;
pub mod selection;
pub mod wizard;
