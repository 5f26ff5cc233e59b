// ABOUTME: Integration tests for engine configuration loading and validation
// ABOUTME: Covers defaults, KARENDERIA_* environment overrides, and rejected values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use karenderia_engine::config::{ConfigError, EngineConfig, PortionConfig};
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::lexicon::LexiconStore;
use karenderia_engine::logging::LogFormat;
use serial_test::serial;
use std::env;
use std::sync::Arc;

const OVERRIDES: [&str; 5] = [
    "KARENDERIA_HEALTH_BASE_SCORE",
    "KARENDERIA_HEALTH_CATEGORY_BONUS",
    "KARENDERIA_MIN_REVERSE_MATCH_LEN",
    "KARENDERIA_WARN_HIGH_CALORIES",
    "KARENDERIA_PORTION_SCALE_FACTOR",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_default_config_is_valid() {
    let config = EngineConfig::default();
    config.validate().unwrap();

    let scoring = &config.nutrition.health_scoring;
    assert_eq!(
        (scoring.base_score, scoring.min_score, scoring.max_score),
        (50, 0, 100)
    );
    assert_eq!(config.matching.min_reverse_match_len, 4);
}

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("KARENDERIA_HEALTH_BASE_SCORE", "60");
    env::set_var("KARENDERIA_MIN_REVERSE_MATCH_LEN", "6");
    env::set_var("KARENDERIA_WARN_HIGH_CALORIES", "900.5");

    let config = EngineConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.nutrition.health_scoring.base_score, 60);
    assert_eq!(config.matching.min_reverse_match_len, 6);
    assert!((config.nutrition.warnings.high_calories - 900.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var("KARENDERIA_MIN_REVERSE_MATCH_LEN", "four");

    let result = EngineConfig::load();
    clear_overrides();

    match result {
        Err(ConfigError::Parse(message)) => {
            assert!(message.contains("KARENDERIA_MIN_REVERSE_MATCH_LEN"));
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_out_of_range_override_fails_validation() {
    clear_overrides();
    env::set_var("KARENDERIA_HEALTH_BASE_SCORE", "150");
    let result = EngineConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));

    env::set_var("KARENDERIA_PORTION_SCALE_FACTOR", "-0.1");
    let result = EngineConfig::load();
    clear_overrides();
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_max_category_bonus_clamps_score() {
    clear_overrides();
    env::set_var("KARENDERIA_HEALTH_CATEGORY_BONUS", i32::MAX.to_string());
    let config = EngineConfig::load();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.nutrition.health_scoring.category_bonus, i32::MAX);
    let engine = KarenderiaEngine::with_config(Arc::new(LexiconStore::builtin()), config).unwrap();
    let analysis = engine.analyze_dish(&["chicken", "rice", "kangkong"], 200.0);
    assert_eq!(analysis.health_score, 100);
}

#[test]
fn test_portion_factor_clamps_bad_weights() {
    let portion = PortionConfig::default();
    let floor = portion.factor_for(0.0);

    assert!(floor > 0.0);
    assert!((portion.factor_for(-20.0) - floor).abs() < f64::EPSILON);
    assert!((portion.factor_for(f64::NAN) - floor).abs() < f64::EPSILON);
    assert!((portion.factor_for(100.0) - 10.0).abs() < f64::EPSILON);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_env_value("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::from_env_value(" pretty "), LogFormat::Pretty);
    assert_eq!(LogFormat::from_env_value("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::from_env_value("xml"), LogFormat::Compact);
}
