//! Field naming conventions.
//!
//! Object keys found in an example are renamed before they become field
//! descriptor names, so a catalogue built from `{"userId": 1}` and one built
//! from `{"user_id": 2}` agree on the field `user_id`.
//!
//! Word boundaries are found at separators (`_`, `-`, `.`, whitespace) and at
//! case changes:
//! - "userId" -> ["user", "Id"]
//! - "HTTPClient" -> ["HTTP", "Client"]
//! - "UserID" -> ["User", "ID"]
//! - "v2Name" -> ["v2", "Name"]

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// How object keys are renamed when building a catalogue.
///
/// ## Examples
///
/// ```
/// use draft_reflect::NameConvention;
///
/// assert_eq!(NameConvention::SnakeCase.apply("userId"), "user_id");
/// assert_eq!(NameConvention::CamelCase.apply("user_id"), "userId");
/// assert_eq!(NameConvention::Preserve.apply("userId"), "userId");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum NameConvention {
    /// Keep keys exactly as they appear in the example.
    #[default]
    Preserve,
    /// `lower_case_with_underscores`
    SnakeCase,
    /// `lowerCamelCase`
    CamelCase,
}

impl NameConvention {
    /// Renames `name` according to this convention.
    pub fn apply(&self, name: &str) -> String {
        match self {
            Self::Preserve => name.to_string(),
            Self::SnakeCase => split_words(name)
                .iter()
                .map(|w| w.to_lowercase())
                .collect::<Vec<_>>()
                .join("_"),
            Self::CamelCase => split_words(name)
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    if i == 0 {
                        w.to_lowercase()
                    } else {
                        capitalize(w)
                    }
                })
                .collect(),
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn is_separator(c: char) -> bool {
    c == '_' || c == '-' || c == '.' || c.is_whitespace()
}

/// Splits an identifier into its words.
fn split_words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start: Option<usize> = None;

    for (i, &(pos, current)) in chars.iter().enumerate() {
        if is_separator(current) {
            if let Some(begin) = start.take() {
                words.push(&s[begin..pos]);
            }
            continue;
        }

        let Some(begin) = start else {
            start = Some(pos);
            continue;
        };

        // "userId" splits before 'I'; "HTTPClient" splits before 'C'
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|&(_, c)| c.is_lowercase());
        let is_new_word = current.is_uppercase()
            && (prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower));

        if is_new_word {
            words.push(&s[begin..pos]);
            start = Some(pos);
        }
    }

    if let Some(begin) = start {
        words.push(&s[begin..]);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    // === split_words tests ===

    #[test]
    fn split_words_camel_case() {
        assert_eq!(split_words("userId"), vec!["user", "Id"]);
        assert_eq!(split_words("DisplayName"), vec!["Display", "Name"]);
    }

    #[test]
    fn split_words_acronyms() {
        assert_eq!(split_words("HTTPClient"), vec!["HTTP", "Client"]);
        assert_eq!(split_words("UserID"), vec!["User", "ID"]);
    }

    #[test]
    fn split_words_separators() {
        assert_eq!(split_words("already_snake"), vec!["already", "snake"]);
        assert_eq!(split_words("x-request-id"), vec!["x", "request", "id"]);
        assert_eq!(split_words("__leading"), vec!["leading"]);
    }

    #[test]
    fn split_words_digits() {
        assert_eq!(split_words("v2Name"), vec!["v2", "Name"]);
        assert_eq!(split_words("page2"), vec!["page2"]);
    }

    #[test]
    fn split_words_empty() {
        assert_eq!(split_words(""), Vec::<&str>::new());
        assert_eq!(split_words("__"), Vec::<&str>::new());
    }

    #[test]
    fn split_words_non_ascii() {
        assert_eq!(split_words("größeWert"), vec!["größe", "Wert"]);
    }

    // === NameConvention tests ===

    #[test]
    fn snake_case_conversion() {
        let naming = NameConvention::SnakeCase;
        assert_eq!(naming.apply("Id"), "id");
        assert_eq!(naming.apply("UserID"), "user_id");
        assert_eq!(naming.apply("X-Request-Id"), "x_request_id");
        assert_eq!(naming.apply("created_at"), "created_at");
    }

    #[test]
    fn camel_case_conversion() {
        let naming = NameConvention::CamelCase;
        assert_eq!(naming.apply("created_at"), "createdAt");
        assert_eq!(naming.apply("UserID"), "userId");
        assert_eq!(naming.apply("name"), "name");
    }

    #[test]
    fn preserve_keeps_key() {
        assert_eq!(NameConvention::Preserve.apply("X-Request-Id"), "X-Request-Id");
    }

    #[test]
    fn convention_parses_from_str() {
        assert_eq!(
            NameConvention::from_str("snake_case").unwrap(),
            NameConvention::SnakeCase
        );
        assert!(NameConvention::from_str("kebab").is_err());
    }
}
