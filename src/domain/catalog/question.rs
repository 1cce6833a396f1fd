//! QuestionSpec - configuration for one filterable dimension.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::domain::foundation::ValidationError;

/// How a question's answer is matched against an item attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredicateKind {
    /// Yes/no attribute; the answer is the string `"true"` or `"false"`.
    Boolean,
    /// Scalar category where items tagged `catch_all` match every answer.
    CategoryOrCatchAll { catch_all: String },
    /// Sequence attribute; matches when it holds the answer or `catch_all`.
    ContainsOrCatchAll { catch_all: String },
    /// Sequence attribute; matches when it holds the answer.
    Contains,
    /// Sequence attribute; matches when it holds every chosen value.
    ContainsAll,
}

impl PredicateKind {
    /// Whether items carry a sequence for this kind of predicate.
    pub fn expects_sequence(&self) -> bool {
        matches!(
            self,
            PredicateKind::ContainsOrCatchAll { .. }
                | PredicateKind::Contains
                | PredicateKind::ContainsAll
        )
    }

    pub fn catch_all(&self) -> Option<&str> {
        match self {
            PredicateKind::CategoryOrCatchAll { catch_all }
            | PredicateKind::ContainsOrCatchAll { catch_all } => Some(catch_all.as_str()),
            _ => None,
        }
    }
}

/// Describes one question the wizard can ask.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionSpec {
    pub key: String,
    pub attribute: String,
    pub is_multi_valued: bool,
    /// Display order only; never consulted when ranking questions.
    #[serde(default)]
    pub ordinal_position: u32,
    #[serde(default)]
    pub optional: bool,
    pub predicate: PredicateKind,
}

impl QuestionSpec {
    /// Creates a required question; multi-valuedness follows the predicate.
    pub fn new(key: impl Into<String>, attribute: impl Into<String>, predicate: PredicateKind) -> Self {
        Self {
            key: key.into(),
            attribute: attribute.into(),
            is_multi_valued: predicate.expects_sequence(),
            ordinal_position: 0,
            optional: false,
            predicate,
        }
    }

    pub fn boolean(key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::new(key, attribute, PredicateKind::Boolean)
    }

    pub fn category(
        key: impl Into<String>,
        attribute: impl Into<String>,
        catch_all: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            attribute,
            PredicateKind::CategoryOrCatchAll {
                catch_all: catch_all.into(),
            },
        )
    }

    pub fn contains_or_catch_all(
        key: impl Into<String>,
        attribute: impl Into<String>,
        catch_all: impl Into<String>,
    ) -> Self {
        Self::new(
            key,
            attribute,
            PredicateKind::ContainsOrCatchAll {
                catch_all: catch_all.into(),
            },
        )
    }

    pub fn contains(key: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::new(key, attribute, PredicateKind::Contains)
    }

    /// The trailing multi-select question. Always optional.
    pub fn contains_all(key: impl Into<String>, attribute: impl Into<String>) -> Self {
        let mut spec = Self::new(key, attribute, PredicateKind::ContainsAll);
        spec.optional = true;
        spec
    }

    /// Sets the display position.
    pub fn at(mut self, ordinal_position: u32) -> Self {
        self.ordinal_position = ordinal_position;
        self
    }
}

/// The configured questions, in declaration order.
///
/// Declaration order is the tie-break order when two questions score the
/// same discriminating power.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionSet {
    specs: Vec<QuestionSpec>,
}

impl QuestionSet {
    /// Validates and wraps a list of question specs.
    ///
    /// # Errors
    ///
    /// - empty key or attribute, or an empty catch-all marker
    /// - `is_multi_valued` disagreeing with the predicate kind
    /// - duplicate keys
    /// - more than one optional question
    /// - an optional question that is not a multi-valued `contains_all`
    pub fn new(specs: Vec<QuestionSpec>) -> Result<Self, ValidationError> {
        let mut seen = HashSet::new();
        let mut optional_count = 0;

        for spec in &specs {
            if spec.key.trim().is_empty() {
                return Err(ValidationError::empty_field("question.key"));
            }
            if spec.attribute.trim().is_empty() {
                return Err(ValidationError::empty_field(format!(
                    "question.{}.attribute",
                    spec.key
                )));
            }
            if matches!(spec.predicate.catch_all(), Some(marker) if marker.is_empty()) {
                return Err(ValidationError::empty_field(format!(
                    "question.{}.catch_all",
                    spec.key
                )));
            }
            if spec.is_multi_valued != spec.predicate.expects_sequence() {
                return Err(ValidationError::invalid_format(
                    format!("question.{}.isMultiValued", spec.key),
                    format!(
                        "must be {} for this predicate kind",
                        spec.predicate.expects_sequence()
                    ),
                ));
            }
            if !seen.insert(spec.key.as_str()) {
                return Err(ValidationError::duplicate("question.key", spec.key.clone()));
            }
            if spec.optional {
                optional_count += 1;
                if spec.predicate != PredicateKind::ContainsAll || !spec.is_multi_valued {
                    return Err(ValidationError::invalid_format(
                        format!("question.{}", spec.key),
                        "optional question must be a multi-valued contains_all question",
                    ));
                }
            } else if spec.predicate == PredicateKind::ContainsAll {
                return Err(ValidationError::invalid_format(
                    format!("question.{}", spec.key),
                    "contains_all questions must be optional",
                ));
            }
        }

        if optional_count > 1 {
            return Err(ValidationError::invalid_format(
                "question.optional",
                format!("at most one optional question allowed, found {}", optional_count),
            ));
        }

        Ok(Self { specs })
    }

    /// Looks up a question by key.
    pub fn get(&self, key: &str) -> Option<&QuestionSpec> {
        self.specs.iter().find(|spec| spec.key == key)
    }

    /// All questions in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &QuestionSpec> {
        self.specs.iter()
    }

    /// Non-optional questions in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &QuestionSpec> {
        self.specs.iter().filter(|spec| !spec.optional)
    }

    /// The optional trailing question, if configured.
    pub fn optional(&self) -> Option<&QuestionSpec> {
        self.specs.iter().find(|spec| spec.optional)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
