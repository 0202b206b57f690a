//! Keyword Scorer - fallback classification by counting trait words.
//!
//! Used whenever the language-model analysis is unavailable. The result is
//! deliberately generic: only the four-letter code depends on the answers.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::result::{owned_list, PersonalityResult};
use crate::domain::quiz::AnswerMap;

pub const FALLBACK_DESCRIPTION: &str = "Analysis unavailable at the moment. Please try again later.";
pub const FALLBACK_EMOJI: &str = "✨";
pub const FALLBACK_TRAITS: [&str; 3] = ["Analytical", "Adaptable", "Thoughtful"];
pub const FALLBACK_STRENGTHS: [&str; 3] = ["Problem solving", "Communication", "Creativity"];
pub const FALLBACK_GROWTH_AREAS: [&str; 3] = ["Balance", "Patience", "Self-reflection"];

/// One of the eight MBTI preference letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitLetter {
    E,
    I,
    S,
    N,
    T,
    F,
    J,
    P,
}

impl TraitLetter {
    pub const ALL: [TraitLetter; 8] = [
        TraitLetter::E,
        TraitLetter::I,
        TraitLetter::S,
        TraitLetter::N,
        TraitLetter::T,
        TraitLetter::F,
        TraitLetter::J,
        TraitLetter::P,
    ];

    /// Words whose presence in an answer counts toward this letter.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            TraitLetter::E => &["out", "social", "friends", "party", "people", "group"],
            TraitLetter::I => &["alone", "quiet", "few", "home", "individual"],
            TraitLetter::S => &["detail", "fact", "practical", "present", "reality"],
            TraitLetter::N => &["future", "possibility", "imagine", "theory", "abstract"],
            TraitLetter::T => &["logic", "analyze", "think", "pros and cons", "objective"],
            TraitLetter::F => &["feel", "value", "harmony", "emotion", "care"],
            TraitLetter::J => &["plan", "organize", "structure", "decide", "control"],
            TraitLetter::P => &["flexible", "adapt", "spontaneous", "flow", "explore"],
        }
    }

    fn as_char(&self) -> char {
        match self {
            TraitLetter::E => 'E',
            TraitLetter::I => 'I',
            TraitLetter::S => 'S',
            TraitLetter::N => 'N',
            TraitLetter::T => 'T',
            TraitLetter::F => 'F',
            TraitLetter::J => 'J',
            TraitLetter::P => 'P',
        }
    }
}

impl fmt::Display for TraitLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Keyword hit counts per letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisScores {
    pub e: u32,
    pub i: u32,
    pub s: u32,
    pub n: u32,
    pub t: u32,
    pub f: u32,
    pub j: u32,
    pub p: u32,
}

impl AxisScores {
    pub fn get(&self, letter: TraitLetter) -> u32 {
        match letter {
            TraitLetter::E => self.e,
            TraitLetter::I => self.i,
            TraitLetter::S => self.s,
            TraitLetter::N => self.n,
            TraitLetter::T => self.t,
            TraitLetter::F => self.f,
            TraitLetter::J => self.j,
            TraitLetter::P => self.p,
        }
    }

    fn set(&mut self, letter: TraitLetter, value: u32) {
        match letter {
            TraitLetter::E => self.e = value,
            TraitLetter::I => self.i = value,
            TraitLetter::S => self.s = value,
            TraitLetter::N => self.n = value,
            TraitLetter::T => self.t = value,
            TraitLetter::F => self.f = value,
            TraitLetter::J => self.j = value,
            TraitLetter::P => self.p = value,
        }
    }

    /// Resolves the four-letter code.
    ///
    /// The first letter of each pair wins only on a strict majority;
    /// ties go to I, S, F and P.
    pub fn type_code(&self) -> String {
        let mut code = String::with_capacity(4);
        code.push(if self.e > self.i { 'E' } else { 'I' });
        code.push(if self.n > self.s { 'N' } else { 'S' });
        code.push(if self.t > self.f { 'T' } else { 'F' });
        code.push(if self.j > self.p { 'J' } else { 'P' });
        code
    }
}

/// Fallback classifier over the concatenated answers.
pub struct KeywordScorer;

impl KeywordScorer {
    /// Counts keyword occurrences for every letter.
    ///
    /// Each keyword is counted on its own as non-overlapping substring
    /// matches, so "hangout" scores for "out".
    pub fn score(answers: &AnswerMap) -> AxisScores {
        let text = answers.answers_text().to_lowercase();
        let mut scores = AxisScores::default();

        for letter in TraitLetter::ALL {
            let total = letter
                .keywords()
                .iter()
                .map(|word| text.matches(word).count() as u32)
                .sum();
            scores.set(letter, total);
        }

        scores
    }

    /// Returns the four-letter type code for the answers.
    pub fn type_code(answers: &AnswerMap) -> String {
        Self::score(answers).type_code()
    }

    /// Builds the canned fallback result for the answers.
    pub fn fallback_result(answers: &AnswerMap) -> PersonalityResult {
        let code = Self::type_code(answers);

        PersonalityResult {
            title: format!("The {} Explorer", code),
            personality_type: code,
            emoji: FALLBACK_EMOJI.to_string(),
            description: FALLBACK_DESCRIPTION.to_string(),
            traits: owned_list(&FALLBACK_TRAITS),
            strengths: owned_list(&FALLBACK_STRENGTHS),
            growth_areas: owned_list(&FALLBACK_GROWTH_AREAS),
        }
    }
}
