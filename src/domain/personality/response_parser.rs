//! Response Parser - turns a labelled model reply into a PersonalityResult.
//!
//! The reply is expected to follow the seven-label schema requested by the
//! prompt (`TITLE:`, `TYPE:`, `EMOJI:`, `DESCRIPTION:`, `TRAITS:`,
//! `STRENGTHS:`, `GROWTH_AREAS:`). Labels may be missing or reordered;
//! missing fields fall back to fixed defaults, so any reply yields a
//! complete result.

use super::result::{
    owned_list, PersonalityResult, DEFAULT_DESCRIPTION, DEFAULT_EMOJI, DEFAULT_GROWTH_AREAS,
    DEFAULT_STRENGTHS, DEFAULT_TITLE, DEFAULT_TRAITS, DEFAULT_TYPE,
};

/// Section cursor while walking the reply line by line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Title,
    Type,
    Emoji,
    Description,
    Traits,
    Strengths,
    GrowthAreas,
}

impl Section {
    const LABELS: [(&'static str, Section); 7] = [
        ("TITLE:", Section::Title),
        ("TYPE:", Section::Type),
        ("EMOJI:", Section::Emoji),
        ("DESCRIPTION:", Section::Description),
        ("TRAITS:", Section::Traits),
        ("STRENGTHS:", Section::Strengths),
        ("GROWTH_AREAS:", Section::GrowthAreas),
    ];

    /// Splits a label line into its section and the remainder after the label.
    fn match_label(line: &str) -> Option<(Section, &str)> {
        Self::LABELS.iter().find_map(|(label, section)| {
            line.strip_prefix(*label)
                .map(|rest| (*section, rest.trim()))
        })
    }
}

#[derive(Debug, Default)]
struct Sections {
    title: String,
    personality_type: String,
    emoji: String,
    description: Vec<String>,
    traits: Vec<String>,
    strengths: Vec<String>,
    growth_areas: Vec<String>,
}

impl Sections {
    fn list_mut(&mut self, section: Section) -> Option<&mut Vec<String>> {
        match section {
            Section::Traits => Some(&mut self.traits),
            Section::Strengths => Some(&mut self.strengths),
            Section::GrowthAreas => Some(&mut self.growth_areas),
            _ => None,
        }
    }
}

/// Line-oriented parser for labelled analysis replies.
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a reply into a complete result, filling defaults.
    ///
    /// A reply without any label yields the all-default result.
    pub fn parse(text: &str) -> PersonalityResult {
        let mut sections = Sections::default();
        let mut current: Option<Section> = None;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some((section, rest)) = Section::match_label(line) {
                current = Some(section);
                Self::apply_label(&mut sections, section, rest);
                continue;
            }

            match current {
                Some(Section::Description) => sections.description.push(line.to_string()),
                Some(section) => {
                    if line.starts_with('-') {
                        continue;
                    }
                    if let Some(list) = sections.list_mut(section) {
                        list.push(line.to_string());
                    }
                }
                None => {}
            }
        }

        Self::finish(sections)
    }

    fn apply_label(sections: &mut Sections, section: Section, rest: &str) {
        match section {
            Section::Title => sections.title = rest.to_string(),
            Section::Type => sections.personality_type = rest.to_string(),
            Section::Emoji => sections.emoji = rest.to_string(),
            // Only the lines below the label form the description.
            Section::Description => {}
            Section::Traits | Section::Strengths | Section::GrowthAreas => {
                if let Some(list) = sections.list_mut(section) {
                    *list = split_inline_list(rest);
                }
            }
        }
    }

    fn finish(sections: Sections) -> PersonalityResult {
        let description = sections.description.join("\n\n");

        PersonalityResult {
            title: or_default(sections.title, DEFAULT_TITLE),
            personality_type: or_default(sections.personality_type, DEFAULT_TYPE),
            emoji: or_default(sections.emoji, DEFAULT_EMOJI),
            description: or_default(description, DEFAULT_DESCRIPTION),
            traits: clean_list(sections.traits, &DEFAULT_TRAITS),
            strengths: clean_list(sections.strengths, &DEFAULT_STRENGTHS),
            growth_areas: clean_list(sections.growth_areas, &DEFAULT_GROWTH_AREAS),
        }
    }
}

/// Items on the label line itself: comma separated, or one item.
fn split_inline_list(rest: &str) -> Vec<String> {
    if rest.contains(',') {
        rest.split(',').map(|item| item.trim().to_string()).collect()
    } else if rest.is_empty() {
        Vec::new()
    } else {
        vec![rest.to_string()]
    }
}

fn strip_bullet(item: &str) -> &str {
    item.strip_prefix("- ")
        .or_else(|| item.strip_prefix("• "))
        .unwrap_or(item)
}

fn clean_list(items: Vec<String>, default: &[&str]) -> Vec<String> {
    let cleaned: Vec<String> = items
        .iter()
        .map(|item| strip_bullet(item).to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if cleaned.is_empty() {
        owned_list(default)
    } else {
        cleaned
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}
