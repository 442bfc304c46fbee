use super::build_rules;
use crate::app::models::{RuleType, Severity};
use std::collections::HashSet;

#[test]
fn test_rule_count_and_unique_codes() {
    let rules = build_rules();
    assert_eq!(rules.len(), 17);

    let codes: HashSet<&str> = rules.iter().map(|r| r.rule_code.as_str()).collect();
    assert_eq!(codes.len(), rules.len());
}

#[test]
fn test_rules_sorted_by_priority() {
    let rules = build_rules();
    let priorities: Vec<u32> = rules.iter().map(|r| r.priority).collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
}

#[test]
fn test_tariff_format_rule() {
    let rules = build_rules();
    let rule = rules.iter().find(|r| r.rule_code == "BOX33_FORMAT").unwrap();

    assert_eq!(rule.rule_type, RuleType::Format);
    assert_eq!(rule.severity, Severity::Error);
    assert!(rule.validation_logic.contains("^\\d{10}$"));
    assert!(rule.procedure_code.is_none());
}

#[test]
fn test_re_export_rules_target_3151() {
    let rules = build_rules();
    for code in [
        "DOC_N785_REQUIRED_REEXPORT",
        "MRN_REQUIRED_REEXPORT",
        "MRN_EXISTS_IN_REGISTRY",
        "MRN_SUFFICIENT_QUANTITY",
    ] {
        let rule = rules.iter().find(|r| r.rule_code == code).unwrap();
        assert_eq!(rule.procedure_code.as_deref(), Some("31 51"), "{code}");
    }
}

#[test]
fn test_severity_split() {
    let rules = build_rules();
    let errors = rules.iter().filter(|r| r.severity == Severity::Error).count();
    let warnings = rules.iter().filter(|r| r.severity == Severity::Warning).count();
    assert_eq!(errors, 13);
    assert_eq!(warnings, 4);
}

#[test]
fn test_bilingual_messages_present() {
    for rule in build_rules() {
        assert!(!rule.error_message_mk.is_empty(), "{}", rule.rule_code);
        assert!(!rule.error_message_en.is_empty(), "{}", rule.rule_code);
        assert!(!rule.reference_document.is_empty(), "{}", rule.rule_code);
    }
}
