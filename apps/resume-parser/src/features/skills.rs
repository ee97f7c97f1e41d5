use serde::{Deserialize, Serialize};

use crate::features::vocabulary::Vocabulary;
use crate::models::SkillSet;

/// How a skill term has to appear in the text to count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// The occurrence must not be glued to letters or digits on an alphanumeric edge.
    /// "java" does not match inside "javascript".
    #[default]
    WordBoundary,
    /// Plain containment. Known false positives: "java" in "javascript", "go" in "django".
    Substring,
}

/// Finds vocabulary skills in resume text and reports their canonical names.
#[derive(Debug, Clone)]
pub struct SkillExtractor {
    /// (lower-case term, canonical display name)
    terms: Vec<(String, String)>,
    mode: MatchMode,
}

impl SkillExtractor {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        let terms = vocabulary
            .skills
            .iter()
            .map(|term| {
                let canonical = vocabulary
                    .skill_aliases
                    .get(term)
                    .cloned()
                    .unwrap_or_else(|| title_case(term));
                (term.clone(), canonical)
            })
            .collect();
        Self {
            terms,
            mode: vocabulary.skill_match,
        }
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let text_lower = text.to_lowercase();
        self.terms
            .iter()
            .filter(|(term, _)| match self.mode {
                MatchMode::Substring => text_lower.contains(term.as_str()),
                MatchMode::WordBoundary => contains_word(&text_lower, term),
            })
            .map(|(_, canonical)| canonical.clone())
            .collect()
    }
}

/// Title-cases the way most resume tooling does: the first letter of every run of
/// letters goes upper-case, the rest lower-case. `node.js` -> `Node.Js`.
pub fn title_case(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut prev_is_letter = false;
    for c in term.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }
    let guard_start = needle.chars().next().is_some_and(char::is_alphanumeric);
    let guard_end = needle.chars().next_back().is_some_and(char::is_alphanumeric);

    haystack.match_indices(needle).any(|(idx, _)| {
        let before_ok = !guard_start
            || !haystack[..idx]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let after_ok = !guard_end
            || !haystack[idx + needle.len()..]
                .chars()
                .next()
                .is_some_and(char::is_alphanumeric);
        before_ok && after_ok
    })
}
