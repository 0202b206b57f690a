//! AnswerMap - selected option per question index.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from question index to the selected option text.
///
/// Iteration is always in question order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<usize, String>);

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the answer for `index`, replacing any earlier one.
    pub fn record(&mut self, index: usize, answer: impl Into<String>) {
        self.0.insert(index, answer.into());
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(&index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates `(index, answer)` pairs in question order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.0.iter().map(|(index, answer)| (*index, answer.as_str()))
    }

    /// All answers joined with single spaces, in question order.
    pub fn answers_text(&self) -> String {
        self.0.values().map(String::as_str).collect::<Vec<_>>().join(" ")
    }
}

impl FromIterator<(usize, String)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (usize, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
