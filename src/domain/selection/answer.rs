//! Answer and SelectionState - the user's current choices.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Raw value meaning "don't filter on this question".
pub const ANY_SENTINEL: &str = "any";

/// Alternate spelling of [`ANY_SENTINEL`] used by some catalogs.
pub const ALL_SENTINEL: &str = "all";

/// The answer recorded for one question.
///
/// An unanswered question has no entry in [`SelectionState`] at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Answered, but matches everything.
    Any,
    /// A single concrete value.
    Value(String),
    /// The full set chosen on the multi-select question. May be empty.
    Values(BTreeSet<String>),
}

impl Answer {
    /// Parses a raw scalar answer, mapping the sentinels to [`Answer::Any`].
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(ANY_SENTINEL) || trimmed.eq_ignore_ascii_case(ALL_SENTINEL)
        {
            Answer::Any
        } else {
            Answer::Value(trimmed.to_string())
        }
    }

    /// Builds a multi-select answer.
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Answer::Values(values.into_iter().map(Into::into).collect())
    }

    /// The answer as a set of required values; `Any` requires nothing.
    pub fn as_value_set(&self) -> BTreeSet<String> {
        match self {
            Answer::Any => BTreeSet::new(),
            Answer::Value(value) => BTreeSet::from([value.clone()]),
            Answer::Values(values) => values.clone(),
        }
    }

    /// True when this answer applies no filtering.
    pub fn is_unfiltered(&self) -> bool {
        match self {
            Answer::Any => true,
            Answer::Value(_) => false,
            Answer::Values(values) => values.is_empty(),
        }
    }
}

/// Current answers keyed by question key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    answers: BTreeMap<String, Answer>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, handy for probes and tests.
    pub fn with(mut self, key: impl Into<String>, answer: Answer) -> Self {
        self.set(key, answer);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Answer> {
        self.answers.get(key)
    }

    /// Records an answer, replacing any previous one.
    pub fn set(&mut self, key: impl Into<String>, answer: Answer) {
        self.answers.insert(key.into(), answer);
    }

    /// Returns the question to the unanswered state.
    pub fn clear(&mut self, key: &str) -> Option<Answer> {
        self.answers.remove(key)
    }

    /// `Any` counts as answered; only a missing entry is unanswered.
    pub fn is_answered(&self, key: &str) -> bool {
        self.answers.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Answer)> {
        self.answers.iter().map(|(key, answer)| (key.as_str(), answer))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }
}
