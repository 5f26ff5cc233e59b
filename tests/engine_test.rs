// ABOUTME: Integration tests for the engine facade
// ABOUTME: Covers the cached profile, labels, alternatives, catalog, and config validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use karenderia_engine::config::EngineConfig;
use karenderia_engine::constants::allergen_names;
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::ErrorCode;
use karenderia_engine::lexicon::LexiconStore;
use karenderia_engine::models::{NutritionRecord, Severity, UserAllergenEntry};
use std::sync::Arc;

#[test]
fn test_profile_starts_empty_and_is_replaced() {
    let engine = common::test_engine();
    assert!(engine.current_user_allergens().is_empty());

    engine.update_user_allergens(common::peanut_profile());
    assert_eq!(engine.current_user_allergens(), common::peanut_profile());

    let replacement = vec![
        UserAllergenEntry::new("Dairy", Severity::Mild),
        UserAllergenEntry::new("Sesame", Severity::Moderate),
    ];
    engine.update_user_allergens(replacement.clone());
    assert_eq!(engine.current_user_allergens(), replacement);

    engine.update_user_allergens(Vec::new());
    assert!(engine.current_user_allergens().is_empty());
}

#[test]
fn test_nutrition_label_through_engine() {
    let engine = common::test_engine();
    let record = NutritionRecord {
        calories: 412.6,
        protein: 18.04,
        sodium: 950.0,
        vitamin_a: 35.24,
        ..NutritionRecord::default()
    };
    let label = engine.get_nutrition_label(&record);

    assert_eq!(label.len(), 11);
    assert_eq!(label["calories"], "413 kcal");
    assert_eq!(label["protein"], "18.0 g");
    assert_eq!(label["sodium"], "950.0 mg");
    assert_eq!(label["vitaminA"], "35.2 IU");
    assert_eq!(label["fiber"], "0.0 g");
}

#[test]
fn test_label_of_analyzed_dish() {
    let engine = common::test_engine();
    let analysis = engine.analyze_dish(&common::adobo().ingredients, 100.0);
    let label = engine.get_nutrition_label(&analysis.total_nutrition);

    assert!(label["calories"].ends_with(" kcal"));
    assert!(label["iron"].ends_with(" mg"));
}

#[test]
fn test_alternatives_for_detected_allergens() {
    let engine = common::test_engine();
    let alternatives = engine.get_allergen_alternatives(&["bagoong", "itlog", "kanin"]);

    let keys: Vec<&str> = alternatives.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        [allergen_names::EGGS, allergen_names::FISH, allergen_names::SHELLFISH]
    );
    let fish = engine.lexicon().find_allergen(allergen_names::FISH).unwrap();
    assert_eq!(alternatives[allergen_names::FISH], fish.alternatives);
}

#[test]
fn test_catalog_lists_every_allergen_in_report_order() {
    let engine = common::test_engine();
    let catalog: Vec<&str> = engine
        .allergen_catalog()
        .iter()
        .map(|a| a.canonical_name.as_str())
        .collect();

    assert_eq!(
        catalog,
        [
            allergen_names::PEANUTS,
            allergen_names::TREE_NUTS,
            allergen_names::DAIRY,
            allergen_names::EGGS,
            allergen_names::FISH,
            allergen_names::SHELLFISH,
            allergen_names::SOY,
            allergen_names::WHEAT,
            allergen_names::SESAME,
        ]
    );
    let peanut = UserAllergenEntry::from_definition(&engine.allergen_catalog()[0]);
    assert_eq!(peanut.severity, Severity::Severe);
}

#[test]
fn test_with_config_rejects_invalid_settings() {
    common::init_test_logging();
    let lexicon = Arc::new(LexiconStore::builtin());

    let mut inverted = EngineConfig::default();
    inverted.nutrition.health_scoring.base_score = 120;
    let err = KarenderiaEngine::with_config(Arc::clone(&lexicon), inverted).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    let mut zero_len = EngineConfig::default();
    zero_len.matching.min_reverse_match_len = 0;
    let err = KarenderiaEngine::with_config(Arc::clone(&lexicon), zero_len).unwrap_err();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);

    let mut negative = EngineConfig::default();
    negative.nutrition.warnings.high_calories = -1.0;
    assert!(KarenderiaEngine::with_config(lexicon, negative).is_err());
}

#[test]
fn test_custom_config_changes_scoring() {
    common::init_test_logging();
    let mut config = EngineConfig::default();
    config.nutrition.health_scoring.base_score = 70;
    let engine =
        KarenderiaEngine::with_config(Arc::new(LexiconStore::builtin()), config).unwrap();

    let empty: [&str; 0] = [];
    assert_eq!(engine.analyze_dish(&empty, 100.0).health_score, 70);
    assert_eq!(engine.config().nutrition.health_scoring.base_score, 70);
}
