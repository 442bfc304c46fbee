//! Latin to Macedonian Cyrillic transliteration
//!
//! Converts Latin-script place names into Macedonian Cyrillic through a
//! fixed pipeline: curated overrides first, then a Cyrillic passthrough,
//! then ordered multi-character substitution rules, a single-character
//! map, and finally word-wise capitalization.
//!
//! The engine is deterministic and allocation-light; rule regexes are
//! compiled once on first use.

mod engine;
mod tables;

#[cfg(test)]
mod tests;

pub use engine::{capitalize_words, transliterate};
pub use tables::{map_latin_char, override_for, OVERRIDES, RULES};
