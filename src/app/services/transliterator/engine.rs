//! Transliteration pipeline

use super::tables::{map_latin_char, override_for, COMPILED_RULES};
use crate::constants::contains_cyrillic;

/// Transliterate a Latin place name into Macedonian Cyrillic.
///
/// Pipeline, in order:
/// 1. curated override lookup (exact match, returns the stored form)
/// 2. Cyrillic passthrough (input containing Cyrillic returns unchanged)
/// 3. ordered multi-character substitution rules, case-insensitive
/// 4. single-character Latin-to-Cyrillic map
/// 5. word-wise capitalization
pub fn transliterate(name: &str) -> String {
    if name.is_empty() {
        return String::new();
    }

    if let Some(translated) = override_for(name) {
        return translated.to_string();
    }

    if contains_cyrillic(name) {
        return name.to_string();
    }

    let mut text = name.to_string();
    for (regex, replacement) in COMPILED_RULES.iter() {
        if regex.is_match(&text) {
            text = regex.replace_all(&text, *replacement).into_owned();
        }
    }

    let mapped: String = text.chars().map(map_latin_char).collect();

    capitalize_words(&mapped)
}

/// Capitalize the first letter of every whitespace-separated word and
/// lowercase the rest.
///
/// Leading non-alphabetic characters (apostrophes, digits) are preserved;
/// the first alphabetic character of each word gets the capital. Runs of
/// whitespace collapse to a single space.
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut capitalized = false;
    for c in word.chars() {
        if !capitalized && c.is_alphabetic() {
            result.extend(c.to_uppercase());
            capitalized = true;
        } else if capitalized {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}
