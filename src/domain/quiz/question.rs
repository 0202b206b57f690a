//! Questions and the fixed question bank.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Number of options every question offers.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// A multiple-choice question with exactly four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
    options: [String; OPTIONS_PER_QUESTION],
}

impl Question {
    /// Creates a question, rejecting blank text or blank options.
    pub fn new(
        text: impl Into<String>,
        options: [String; OPTIONS_PER_QUESTION],
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        if let Some(position) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(ValidationError::empty_field(format!("options[{}]", position)));
        }
        Ok(Self { text, options })
    }

    fn from_static(text: &str, options: [&str; OPTIONS_PER_QUESTION]) -> Self {
        Self {
            text: text.to_string(),
            options: options.map(str::to_string),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String; OPTIONS_PER_QUESTION] {
        &self.options
    }

    /// Returns the option at `index`, if any.
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    /// Returns true if `option` is one of this question's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Ordered, non-empty list of questions defined at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

const STANDARD_QUESTIONS: [(&str, [&str; OPTIONS_PER_QUESTION]); 10] = [
    (
        "Your friend just spilled a huge secret. You...",
        [
            "Can't help but tell someone else",
            "Take it to the grave",
            "Tell only if someone really needs to know",
            "Forget about it immediately",
        ],
    ),
    (
        "It's Friday night and your phone's buzzing with plans. You're most likely to...",
        [
            "Already be out somewhere",
            "Make up an excuse to stay in",
            "Join if your best friend is going",
            "Suggest a smaller hangout instead",
        ],
    ),
    (
        "Your brain at 3 AM usually...",
        [
            "Replays embarrassing moments from 2015",
            "Plans your next big life move",
            "Thinks about random facts",
            "Actually sleeps like a normal person",
        ],
    ),
    (
        "Someone disagrees with you in the group chat. You...",
        [
            "Write a whole essay with sources cited",
            "Send a meme and change the subject",
            "Start a friendly debate",
            "Leave them on read",
        ],
    ),
    (
        "Your idea of a perfect weekend is...",
        [
            "Netflix marathon in your blanket fort",
            "Spontaneous road trip with friends",
            "Trying that new thing everyone's talking about",
            "Finally organizing your life",
        ],
    ),
    (
        "When your friend is going through it, you typically...",
        [
            "Offer practical solutions",
            "Just listen and validate",
            "Share your own similar experience",
            "Distract them with fun activities",
        ],
    ),
    (
        "Your camera roll is full of...",
        [
            "Aesthetic shots that never make it to Instagram",
            "Screenshots you'll never look at again",
            "Memes to send at the perfect moment",
            "Photos of things you need to remember",
        ],
    ),
    (
        "When making big decisions, you usually...",
        [
            "Go with your gut feeling",
            "Make a pros and cons list",
            "Ask everyone you know for advice",
            "Google it extensively",
        ],
    ),
    (
        "Your friends would describe you as the one who...",
        [
            "Always has a crazy story to tell",
            "Knows everyone's secrets",
            "Comes through in a crisis",
            "Has the best recommendations",
        ],
    ),
    (
        "In group projects, you naturally become the...",
        [
            "Ideas person with big plans",
            "One who actually gets it done",
            "Peacekeeper between strong personalities",
            "Editor who fixes everything last minute",
        ],
    ),
];

static STANDARD_BANK: Lazy<QuestionBank> = Lazy::new(|| QuestionBank {
    questions: STANDARD_QUESTIONS
        .iter()
        .map(|(text, options)| Question::from_static(text, *options))
        .collect(),
});

impl QuestionBank {
    /// Creates a bank from a non-empty list of questions.
    pub fn new(questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::empty_field("questions"));
        }
        Ok(Self { questions })
    }

    /// The ten built-in quiz questions.
    pub fn standard() -> Self {
        STANDARD_BANK.clone()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a constructed bank; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Question> {
        self.questions.iter()
    }
}
