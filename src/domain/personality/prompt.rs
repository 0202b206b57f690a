//! Prompt construction for the language-model analysis.

use crate::domain::quiz::{AnswerMap, QuestionBank};

/// System message used for full quiz analysis.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a personality analyst who deeply understands MBTI theory while keeping things relatable.
For each analysis:
- Break down cognitive functions in a way that makes sense (like explaining how Fe users are the friends who always know when someone's upset)
- Use specific examples from their answers to support your type assessment
- Mix professional insights with casual observations
- Explain MBTI concepts clearly without getting too technical
- Connect their type to real-world behaviors and tendencies
- Keep it balanced between formal MBTI theory and friendly chat";

/// System message used for free-text analysis.
pub const RAW_SYSTEM_INSTRUCTION: &str = "You are an insightful personality analyst.";

const INSTRUCTIONS: &str = "\
Analyze these quiz responses and give us a personality deep-dive! Mix professional MBTI insights with relatable examples.

1. Core MBTI Analysis:
- Break down their type preferences (E/I, S/N, T/F, J/P)
- Show how their answers reveal their type (like \"choosing 'Netflix marathon' over 'spontaneous road trip' gives us introverted vibes\")
- Explain their cognitive function stack (like Ni-Fe-Ti-Se) and how it shows up in their answers
- Connect their answers to famous people/characters with the same type

2. Deep Personality Insights:
- Their energy style (how they recharge and what drains them)
- Decision-making approach (what their answers reveal about how they solve problems)
- Social style (their unique way of connecting with others)
- Stress patterns (how they handle pressure, based on their answers)
- Communication preferences (their natural way of expressing themselves)

3. Real-Life Applications:
- How their type shows up in friendships
- Their likely work/study style
- Their approach to challenges
- Natural talents and potential blind spots

Format your response like this:
TITLE: [A creative nickname that captures their essence]
TYPE: [MBTI type with a clear, relatable explanation of why]
EMOJI: [A spot-on emoji for their vibe]
DESCRIPTION: [A thorough analysis that mixes MBTI theory with real-world examples from their answers. Make it engaging - like a friend who really gets MBTI explaining things over coffee. Minimum 300 words.]
TRAITS: [Key personality traits with specific examples from their answers]
STRENGTHS: [Their superpowers, based on their type and answers]
GROWTH_AREAS: [Gentle suggestions for development, explained in a supportive way]

Here are their responses:
";

const CLOSING: &str = "\nGive us a balanced analysis that's both insightful and relatable. Mix some casual language with proper MBTI insights!";

/// Builds the user prompt for a completed quiz.
pub struct AnalysisPrompt;

impl AnalysisPrompt {
    /// Embeds every answered question, in question order, between the
    /// format instructions and the closing request.
    ///
    /// Answers whose index has no question in `bank` are skipped.
    pub fn build(answers: &AnswerMap, bank: &QuestionBank) -> String {
        let mut prompt = String::from(INSTRUCTIONS);

        for (index, answer) in answers.iter() {
            let Some(question) = bank.get(index) else {
                continue;
            };
            prompt.push_str(&format!("Question: {}\n", question.text()));
            prompt.push_str(&format!("Answer: {}\n\n", answer));
        }

        prompt.push_str(CLOSING);
        prompt
    }
}
