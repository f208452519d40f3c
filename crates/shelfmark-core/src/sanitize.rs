/// Text sanitization for filename fields
///
/// Fields go through a fixed sequence before they are joined into a
/// filename: parenthetical asides are dropped, the text is transliterated to
/// ASCII, and everything outside the letter/digit/space allowlist is removed.
/// The case policy is applied afterwards by the builder, on the whole field.
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// Parenthesized asides like "(Deluxe Edition)". Non-greedy, no nesting
// support: an unbalanced inner parenthesis is a known limitation.
static RE_PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid parenthetical pattern"));

// Everything outside the portable filename alphabet.
static RE_DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^ a-zA-Z0-9]+").expect("valid allowlist pattern"));

/// String-case policy applied to a whole field before it is split into
/// separator-joined tokens. Closed set; selection is always an explicit
/// match, never a name lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseTransform {
    /// Every character lowercased
    Lower,
    /// Every character uppercased
    Upper,
    /// Every whitespace-delimited token capitalized
    #[default]
    Title,
    /// First token capitalized, the rest lowercased
    Sentence,
}

impl CaseTransform {
    /// Apply the policy to a whole string.
    #[must_use = "returns the re-cased string"]
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Lower => text.to_lowercase(),
            Self::Upper => text.to_uppercase(),
            Self::Title => text
                .split_whitespace()
                .map(capitalize)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Sentence => capitalize(text),
        }
    }
}

/// Capitalize the first character, lowercase the rest
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        let mut capitalized = first.to_uppercase().collect::<String>();
        capitalized.push_str(&chars.as_str().to_lowercase());
        capitalized
    })
}

/// Remove every parenthesized substring, including the parentheses
#[must_use = "returns the text without parenthetical asides"]
pub fn strip_parentheticals(text: &str) -> String {
    RE_PARENTHETICAL.replace_all(text, "").to_string()
}

/// Transliterate to ASCII and drop every character outside the
/// letter/digit/space allowlist. Characters with no ASCII approximation may
/// disappear entirely; the result can be empty.
#[must_use = "returns the portable ASCII form of the text"]
pub fn to_portable_ascii(text: &str) -> String {
    let transliterated = deunicode::deunicode(text);
    RE_DISALLOWED.replace_all(&transliterated, "").to_string()
}

/// Full cleaning sequence for one field: strip parentheticals, then reduce
/// to the portable ASCII alphabet. Whitespace is left for the builder to
/// collapse when it joins tokens with the field separator.
#[must_use = "returns the cleaned field text"]
pub fn clean_text(text: &str) -> String {
    to_portable_ascii(&strip_parentheticals(text))
}
