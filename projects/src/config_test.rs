#![allow(clippy::float_cmp)]

use super::*;
use crate::validate::validate;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_host_is_app() {
    assert_eq!(BoardConfig::default().host_id, DEFAULT_HOST_ID);
}

#[test]
fn default_rules() {
    let rules = FormRules::default();
    assert!(rules.title.required);
    assert_eq!(rules.title.min_length, None);
    assert!(rules.description.required);
    assert_eq!(rules.description.min_length, Some(5));
    assert!(rules.people.required);
    assert_eq!(rules.people.min, Some(1.0));
    assert_eq!(rules.people.max, Some(10.0));
}

// =============================================================
// from_json
// =============================================================

#[test]
fn empty_input_is_default() {
    assert_eq!(BoardConfig::from_json("").unwrap(), BoardConfig::default());
    assert_eq!(BoardConfig::from_json("  \n").unwrap(), BoardConfig::default());
}

#[test]
fn empty_object_is_default() {
    assert_eq!(BoardConfig::from_json("{}").unwrap(), BoardConfig::default());
}

#[test]
fn host_override() {
    let cfg = BoardConfig::from_json(r#"{"host_id":"board-root"}"#).unwrap();
    assert_eq!(cfg.host_id, "board-root");
    assert_eq!(cfg.rules, FormRules::default());
}

#[test]
fn partial_rules_override_keeps_other_fields() {
    let cfg = BoardConfig::from_json(r#"{"rules":{"people":{"required":true,"max":6}}}"#).unwrap();
    assert_eq!(cfg.rules.people.max, Some(6.0));
    assert_eq!(cfg.rules.people.min, Some(DEFAULT_PEOPLE_MIN));
    assert_eq!(cfg.rules.title, FormRules::default().title);
    assert_eq!(cfg.rules.description, FormRules::default().description);
}

#[test]
fn partial_field_override_keeps_that_fields_defaults() {
    let cfg = BoardConfig::from_json(r#"{"rules":{"people":{"max":20}}}"#).unwrap();
    let people = cfg.rules.people;
    assert!(people.required);
    assert_eq!(people.min, Some(DEFAULT_PEOPLE_MIN));
    assert_eq!(people.max, Some(20.0));
}

#[test]
fn explicit_false_disables_required() {
    let cfg = BoardConfig::from_json(r#"{"rules":{"title":{"required":false,"max_length":40}}}"#).unwrap();
    assert!(!cfg.rules.title.required);
    assert_eq!(cfg.rules.title.max_length, Some(40));
}

#[test]
fn wrong_rule_type_is_error() {
    assert!(BoardConfig::from_json(r#"{"rules":{"people":{"min":"one"}}}"#).is_err());
}

#[test]
fn malformed_json_is_error() {
    let err = BoardConfig::from_json("{host_id:").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid board config"));
}

#[test]
fn wrong_field_type_is_error() {
    assert!(BoardConfig::from_json(r#"{"host_id":3}"#).is_err());
}

// =============================================================
// FieldRules
// =============================================================

#[test]
fn to_validatable_copies_constraints() {
    let rules = FormRules::default().description;
    let v = rules.to_validatable("abc");
    assert!(v.required);
    assert_eq!(v.min_length, Some(5));
    assert!(!validate(&v));
}

#[test]
fn default_people_rules_are_strict() {
    let rules = FormRules::default().people;
    assert!(!validate(&rules.to_validatable(1_u32)));
    assert!(validate(&rules.to_validatable(2_u32)));
    assert!(validate(&rules.to_validatable(9_u32)));
    assert!(!validate(&rules.to_validatable(10_u32)));
}
