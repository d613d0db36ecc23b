//! Configuration parsing tests.

use pipesim_core::common::SimError;
use pipesim_core::config::{Config, HazardStrategy, defaults};
use pretty_assertions::assert_eq;

#[test]
fn defaults_are_full_bypass() {
    let config = Config::default();
    assert_eq!(config.hazard, HazardStrategy::FullBypass);
    assert_eq!(config.mem_size, defaults::MEM_SIZE);
    assert_eq!(config.reset_vector, defaults::RESET_VECTOR);
}

#[test]
fn parses_a_full_document() {
    let config = Config::from_json(
        r#"{ "hazard": "stall_only", "mem_size": 1024, "reset_vector": 128 }"#,
    )
    .unwrap();
    assert_eq!(config.hazard, HazardStrategy::StallOnly);
    assert_eq!(config.mem_size, 1024);
    assert_eq!(config.reset_vector, 128);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config = Config::from_json(r#"{ "hazard": "stall_only" }"#).unwrap();
    assert_eq!(config.hazard, HazardStrategy::StallOnly);
    assert_eq!(config.mem_size, defaults::MEM_SIZE);
}

#[test]
fn empty_document_is_all_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn accepts_kebab_case_strategy_spellings() {
    // The CLI spells strategies with hyphens; JSON accepts both forms.
    let config = Config::from_json(r#"{ "hazard": "full-bypass" }"#).unwrap();
    assert_eq!(config.hazard, HazardStrategy::FullBypass);

    let config = Config::from_json(r#"{ "hazard": "stall-only" }"#).unwrap();
    assert_eq!(config.hazard, HazardStrategy::StallOnly);
}

#[test]
fn rejects_an_unknown_strategy() {
    let err = Config::from_json(r#"{ "hazard": "psychic" }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn rejects_malformed_json() {
    let err = Config::from_json("not json").unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}
