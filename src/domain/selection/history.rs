//! QuestionHistory - the order questions were actually shown.

use serde::{Deserialize, Serialize};

/// Question keys in presentation order.
///
/// Grows during forward navigation and shrinks from the tail on back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionHistory {
    keys: Vec<String>,
}

impl QuestionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>) {
        self.keys.push(key.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.keys.pop()
    }

    pub fn last(&self) -> Option<&str> {
        self.keys.last().map(String::as_str)
    }

    /// Whether `key` was ever shown in the surviving history.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<S: Into<String>> FromIterator<S> for QuestionHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_pop_work_from_the_tail() {
        let mut history = QuestionHistory::new();
        history.push("loc");
        history.push("skinType");

        assert_eq!(history.last(), Some("skinType"));
        assert_eq!(history.pop(), Some("skinType".to_string()));
        assert_eq!(history.last(), Some("loc"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn contains_checks_every_entry() {
        let history: QuestionHistory = ["loc", "specialFeatures"].into_iter().collect();
        assert!(history.contains("specialFeatures"));
        assert!(!history.contains("skinType"));
    }

    #[test]
    fn pop_on_empty_history_is_none() {
        let mut history = QuestionHistory::new();
        assert_eq!(history.pop(), None);
        assert!(history.is_empty());
    }
}
