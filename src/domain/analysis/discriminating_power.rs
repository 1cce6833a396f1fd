//! Power Calculator - entropy score for how well a question splits the items.

use std::collections::BTreeMap;

use tracing::trace;

use crate::domain::catalog::{Item, QuestionSet, QuestionSpec};

/// Frequency bucket for one observed value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Bucket {
    /// Scalar question on an item that lacks the attribute.
    Missing,
    Value(String),
}

/// Discriminating-power scoring functions.
pub struct PowerCalculator;

impl PowerCalculator {
    /// Scores the question registered under `key`.
    ///
    /// Unknown keys score 0.
    pub fn compute(questions: &QuestionSet, key: &str, items: &[&Item]) -> f64 {
        match questions.get(key) {
            Some(question) => Self::power(question, items),
            None => {
                trace!(key, "power requested for unknown question");
                0.0
            }
        }
    }

    /// Shannon-style entropy of the question's attribute over `items`.
    ///
    /// # Algorithm
    /// H = -Σ p_i * log2(p_i), with p_i = count_i / items.len()
    ///
    /// Scalar questions bucket each item's value (string form). Multi-valued
    /// questions bucket every value inside each item's sequence, so one item
    /// can land in several buckets and Σ count_i may exceed items.len().
    /// The score is then a popularity-weighted variety measure rather than
    /// a normalized partition entropy, and the ranking relies on exactly
    /// this formula.
    ///
    /// # Edge Cases
    /// - No items: 0
    /// - Every item holds an identical value: 0
    /// - Non-finite intermediate result: 0
    pub fn power(question: &QuestionSpec, items: &[&Item]) -> f64 {
        if items.is_empty() || Self::is_uniform(question, items) {
            return 0.0;
        }

        let total = items.len() as f64;
        let entropy: f64 = Self::frequencies(question, items)
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                -p * p.log2()
            })
            .sum();

        let score = if entropy.is_finite() { entropy } else { 0.0 };
        trace!(key = %question.key, score, "scored question");
        score
    }

    /// Number of items (or sequence entries) per observed value.
    fn frequencies(question: &QuestionSpec, items: &[&Item]) -> BTreeMap<Bucket, usize> {
        let mut buckets = BTreeMap::new();

        for item in items {
            let value = item.attribute(&question.attribute);
            if question.is_multi_valued {
                if let Some(value) = value {
                    for observed in value.observed_values() {
                        *buckets
                            .entry(Bucket::Value(observed.into_owned()))
                            .or_insert(0) += 1;
                    }
                }
            } else {
                let bucket = value
                    .map(|v| Bucket::Value(v.scalar_form()))
                    .unwrap_or(Bucket::Missing);
                *buckets.entry(bucket).or_insert(0) += 1;
            }
        }

        buckets
    }

    /// Checks if every item holds the same value (or lacks it alike).
    fn is_uniform(question: &QuestionSpec, items: &[&Item]) -> bool {
        let first = items[0].attribute(&question.attribute);
        items
            .iter()
            .all(|item| item.attribute(&question.attribute) == first)
    }
}
