use crate::app::services::transliterator::{map_latin_char, override_for, OVERRIDES, RULES};
use crate::constants::contains_cyrillic;
use std::collections::HashSet;

#[test]
fn test_override_lookup_is_exact() {
    assert_eq!(override_for("Unknown"), Some("Непознато"));
    assert_eq!(override_for("unknown"), None);
    assert_eq!(override_for("Москва"), None);
}

#[test]
fn test_override_keys_unique() {
    let keys: HashSet<&str> = OVERRIDES.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys.len(), OVERRIDES.len());
}

#[test]
fn test_override_values_are_cyrillic() {
    for (name, translated) in OVERRIDES {
        assert!(
            contains_cyrillic(translated),
            "override for {name:?} is not Cyrillic: {translated:?}"
        );
    }
}

#[test]
fn test_bare_c_rule_is_last() {
    // ch, ck and sch must be consumed before the single-letter fallback
    assert_eq!(RULES.last(), Some(&("c", "к")));
    let c_position = RULES.iter().position(|(p, _)| *p == "c");
    for digraph in ["ch", "ck", "sch", "tch"] {
        let position = RULES.iter().position(|(p, _)| *p == digraph);
        assert!(position < c_position, "{digraph} ordered after bare c");
    }
}

#[test]
fn test_rule_replacements_are_lowercase_cyrillic() {
    for (pattern, replacement) in RULES {
        assert!(
            contains_cyrillic(replacement),
            "rule {pattern:?} has non-Cyrillic replacement {replacement:?}"
        );
        assert!(
            replacement.chars().all(|c| !c.is_uppercase()),
            "rule {pattern:?} has uppercase replacement {replacement:?}"
        );
    }
}

#[test]
fn test_char_map_is_case_insensitive() {
    assert_eq!(map_latin_char('a'), 'а');
    assert_eq!(map_latin_char('A'), 'а');
    assert_eq!(map_latin_char('w'), 'в');
    assert_eq!(map_latin_char('y'), 'ј');
    assert_eq!(map_latin_char('q'), 'к');
}

#[test]
fn test_char_map_passes_through_non_latin() {
    assert_eq!(map_latin_char('ж'), 'ж');
    assert_eq!(map_latin_char('7'), '7');
    assert_eq!(map_latin_char('-'), '-');
    assert_eq!(map_latin_char('\''), '\'');
}

#[test]
fn test_rules_and_map_cover_alphabet() {
    // Every ASCII letter is handled by either a substitution rule or the
    // character map
    for c in 'a'..='z' {
        let by_rule = RULES.iter().any(|(p, _)| *p == c.to_string());
        let by_map = map_latin_char(c) != c;
        assert!(by_rule || by_map, "letter {c:?} unhandled");
    }
}
