//! Catalog module - items and the questions that filter them.
//!
//! # Components
//!
//! - `Item` / `AttributeValue` - immutable product records
//! - `QuestionSpec` / `PredicateKind` - one filterable dimension
//! - `QuestionSet` - validated, ordered question configuration
//! - `Catalog` - questions and items bundled for a session

mod aggregate;
mod item;
mod question;

pub use aggregate::{Catalog, CatalogDocument};
pub use item::{AttributeValue, Item};
pub use question::{PredicateKind, QuestionSet, QuestionSpec};
