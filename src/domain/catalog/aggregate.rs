//! Catalog - the validated questions and items one wizard works over.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

use super::{Item, QuestionSet, QuestionSpec};

/// Questions plus items, validated together.
///
/// Shared read-only between a session's orchestrator and its probes, so it
/// is usually held behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    questions: QuestionSet,
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate item ids.
    pub fn new(questions: QuestionSet, items: Vec<Item>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(ValidationError::duplicate("item.id", item.id.to_string()));
            }
        }

        Ok(Self { questions, items })
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    /// Items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// On-disk shape of a catalog file (JSON or YAML).
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    pub questions: Vec<QuestionSpec>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl TryFrom<CatalogDocument> for Catalog {
    type Error = ValidationError;

    fn try_from(doc: CatalogDocument) -> Result<Self, Self::Error> {
        Catalog::new(QuestionSet::new(doc.questions)?, doc.items)
    }
}
