//! PersonalityResult - the outcome of analysing one completed quiz.

use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "The Personality Explorer";
pub const DEFAULT_TYPE: &str = "Personality Type Analysis";
pub const DEFAULT_EMOJI: &str = "✨";
pub const DEFAULT_DESCRIPTION: &str = "No detailed description was provided.";
pub const DEFAULT_TRAITS: [&str; 3] = ["Unique", "Complex", "Multifaceted"];
pub const DEFAULT_STRENGTHS: [&str; 3] = ["Adaptability", "Insight", "Growth Mindset"];
pub const DEFAULT_GROWTH_AREAS: [&str; 3] =
    ["Continuing to explore", "Embracing change", "Self-discovery"];

/// A personality profile produced once per completed quiz.
///
/// Immutable once produced; a quiz reset discards it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityResult {
    /// Creative nickname for the quiz taker.
    pub title: String,
    /// Personality type label, usually an MBTI code with an explanation.
    #[serde(rename = "type")]
    pub personality_type: String,
    pub emoji: String,
    /// Free-form analysis; paragraphs separated by blank lines.
    pub description: String,
    pub traits: Vec<String>,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
}

impl PersonalityResult {
    /// Returns true if every field a client displays is populated.
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty()
            && !self.personality_type.is_empty()
            && !self.emoji.is_empty()
            && !self.traits.is_empty()
            && !self.strengths.is_empty()
            && !self.growth_areas.is_empty()
    }
}

pub(crate) fn owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PersonalityResult {
        PersonalityResult {
            title: "The Night Owl".to_string(),
            personality_type: "INTP".to_string(),
            emoji: "🦉".to_string(),
            description: "Curious.\n\nQuiet.".to_string(),
            traits: vec!["Curious".to_string()],
            strengths: vec!["Logic".to_string()],
            growth_areas: vec!["Sleep".to_string()],
        }
    }

    #[test]
    fn type_field_serializes_as_type() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "INTP");
        assert!(json.get("personality_type").is_none());
    }

    #[test]
    fn is_complete_requires_non_empty_lists() {
        let mut result = sample();
        assert!(result.is_complete());

        result.strengths.clear();
        assert!(!result.is_complete());
    }

    #[test]
    fn description_may_be_empty_for_completeness() {
        let mut result = sample();
        result.description.clear();
        assert!(result.is_complete());
    }
}
