// ABOUTME: Integration tests for allergen safety evaluation
// ABOUTME: Covers matching, user severity precedence, unknown allergens, and batch ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use karenderia_engine::constants::alternatives;
use karenderia_engine::models::{RiskLevel, Severity, UserAllergenEntry};

#[test]
fn test_matching_ingredient_makes_dish_unsafe() {
    let engine = common::test_engine();
    let analysis = engine.evaluate_safety(
        &["chicken", "peanut sauce"],
        &common::peanut_profile(),
        None,
    );

    assert!(!analysis.is_safe);
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert_eq!(analysis.warnings.len(), 1);
    let warning = &analysis.warnings[0];
    assert_eq!(warning.allergen, "Peanuts");
    assert_eq!(warning.found_in, ["peanut sauce"]);
    assert!(warning.message.starts_with("DANGER: This dish contains Peanuts"));
    assert_eq!(analysis.safe_alternatives, [alternatives::NUTS]);
}

#[test]
fn test_dish_without_matches_is_safe() {
    let engine = common::test_engine();
    let analysis = engine.evaluate_safety(
        &["chicken", "soy sauce", "vinegar", "garlic", "bay leaves"],
        &common::peanut_profile(),
        Some("Adobong Manok"),
    );

    assert!(analysis.is_safe);
    assert!(analysis.warnings.is_empty());
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert!(analysis.safe_alternatives.is_empty());
}

#[test]
fn test_bagoong_triggers_fish_allergy() {
    let engine = common::test_engine();
    let profile = vec![UserAllergenEntry::new("Fish", Severity::Moderate)];
    let analysis = engine.evaluate_safety(&["bagoong"], &profile, None);

    assert!(!analysis.is_safe);
    assert_eq!(analysis.warnings.len(), 1);
    assert_eq!(analysis.warnings[0].allergen, "Fish");
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
    assert!(analysis.warnings[0].message.starts_with("WARNING"));
}

#[test]
fn test_moderate_and_mild_matches_give_medium_risk() {
    let engine = common::test_engine();
    let profile = vec![
        UserAllergenEntry::new("Dairy", Severity::Moderate),
        UserAllergenEntry::new("Soy", Severity::Mild),
    ];
    let analysis = engine.evaluate_safety(&["evaporated milk", "tokwa", "rice"], &profile, None);

    assert!(!analysis.is_safe);
    let allergens: Vec<&str> = analysis.warnings.iter().map(|w| w.allergen.as_str()).collect();
    assert_eq!(allergens, ["Dairy", "Soy"]);
    assert_eq!(analysis.risk_level, RiskLevel::Medium);
}

#[test]
fn test_kare_kare_scenario() {
    let engine = common::test_engine();
    let dish = common::kare_kare();
    let analysis =
        engine.evaluate_safety(&dish.ingredients, &common::peanut_profile(), Some(&dish.name));

    assert!(!analysis.is_safe);
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert_eq!(analysis.warnings.len(), 1);
    assert_eq!(analysis.warnings[0].allergen, "Peanuts");
    assert_eq!(analysis.warnings[0].found_in, ["peanut sauce"]);
    assert!(analysis.warnings[0].message.contains("Kare-Kare"));
}

#[test]
fn test_sinigang_with_empty_profile_is_safe() {
    let engine = common::test_engine();
    let dish = common::sinigang();
    let analysis = engine.evaluate_safety(&dish.ingredients, &[], Some(&dish.name));

    assert!(analysis.is_safe);
    assert!(analysis.warnings.is_empty());
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn test_user_severity_overrides_lexicon_default() {
    let engine = common::test_engine();
    // Shellfish defaults to severe in the lexicon
    let profile = vec![UserAllergenEntry::new("shellfish", Severity::Mild)];
    let analysis = engine.evaluate_safety(&["hipon", "rice"], &profile, None);

    assert_eq!(analysis.warnings[0].severity, Severity::Mild);
    assert_eq!(analysis.risk_level, RiskLevel::Low);
    assert!(analysis.warnings[0].message.starts_with("NOTICE"));
}

#[test]
fn test_unknown_allergen_is_reported_not_warned() {
    let engine = common::test_engine();
    let profile = vec![
        UserAllergenEntry::new("Kiwi", Severity::Severe),
        UserAllergenEntry::new("Peanuts", Severity::Severe),
    ];
    let analysis = engine.evaluate_safety(&["kiwi", "rice"], &profile, None);

    assert!(analysis.is_safe);
    assert!(analysis.warnings.is_empty());
    assert_eq!(analysis.unchecked_allergens, ["Kiwi"]);
}

#[test]
fn test_profile_resolves_by_keyword() {
    let engine = common::test_engine();
    let profile = vec![UserAllergenEntry::new("gluten", Severity::Moderate)];
    let analysis = engine.evaluate_safety(&["pandesal"], &profile, None);

    assert_eq!(analysis.warnings.len(), 1);
    assert_eq!(analysis.warnings[0].allergen, "Wheat");
    assert!(analysis.unchecked_allergens.is_empty());
}

#[test]
fn test_warnings_follow_profile_order_and_dedupe() {
    let engine = common::test_engine();
    let profile = vec![
        UserAllergenEntry::new("Soy", Severity::Mild),
        UserAllergenEntry::new("Wheat", Severity::Severe),
        UserAllergenEntry::new("toyo", Severity::Severe),
    ];
    let analysis = engine.evaluate_safety(&["soy sauce", "garlic"], &profile, None);

    let allergens: Vec<&str> = analysis.warnings.iter().map(|w| w.allergen.as_str()).collect();
    assert_eq!(allergens, ["Soy", "Wheat"]);
    assert_eq!(analysis.warnings[0].severity, Severity::Mild);
    assert_eq!(analysis.risk_level, RiskLevel::High);
    assert_eq!(analysis.safe_alternatives, [alternatives::SOY, alternatives::WHEAT]);
}

#[test]
fn test_unrecognized_severity_uses_generic_message() {
    let engine = common::test_engine();
    let profile = vec![UserAllergenEntry::new("Eggs", Severity::from_str_lossy("extreme"))];
    let analysis = engine.evaluate_safety(&["itlog"], &profile, Some("Tortang Talong"));

    assert_eq!(
        analysis.warnings[0].message,
        "Eggs detected in Tortang Talong (itlog)."
    );
    assert_eq!(analysis.risk_level, RiskLevel::Low);
}

#[test]
fn test_batch_uses_cached_profile_and_keeps_order() {
    let engine = common::test_engine();
    engine.update_user_allergens(common::peanut_profile());

    let dishes = common::batch_shape(&common::sample_menu());
    let results = engine.batch_evaluate(&dishes);

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, common::names(&common::sample_menu()));
    let unsafe_dishes: Vec<&str> = results
        .iter()
        .filter(|r| !r.analysis.is_safe)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(unsafe_dishes, ["Kare-Kare"]);
}

#[test]
fn test_batch_matches_single_evaluation() {
    let engine = common::test_engine();
    let profile = vec![
        UserAllergenEntry::new("Dairy", Severity::Moderate),
        UserAllergenEntry::new("Eggs", Severity::Severe),
    ];
    engine.update_user_allergens(profile.clone());

    let menu = common::sample_menu();
    let dishes = common::batch_shape(&menu);
    for (result, dish) in engine.batch_evaluate(&dishes).iter().zip(&menu) {
        assert_eq!(
            result.analysis,
            engine.evaluate_safety(&dish.ingredients, &profile, Some(&dish.name))
        );
    }
}
