// ABOUTME: Integration tests for dish nutrition aggregation and health scoring
// ABOUTME: Covers the empty dish, score clamping, portion hardening, advice, and warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use karenderia_engine::constants::recommendations;
use karenderia_engine::models::NutritionRecord;

#[test]
fn test_empty_dish_yields_zero_state() {
    let engine = common::test_engine();
    let empty: [&str; 0] = [];
    let analysis = engine.analyze_dish(&empty, 0.0);

    assert!(analysis.total_calories.abs() < f64::EPSILON);
    assert_eq!(analysis.total_nutrition, NutritionRecord::default());
    assert_eq!(analysis.health_score, 50);
    assert!(analysis.allergens.is_empty());
    assert!(analysis.warnings.is_empty());
    assert!(analysis.ingredients.is_empty());
    assert!(analysis
        .recommendations
        .contains(&recommendations::ADD_PROTEIN.to_owned()));
    assert!(analysis
        .recommendations
        .contains(&recommendations::ADD_VEGETABLES.to_owned()));
}

#[test]
fn test_score_stays_within_bounds_for_adversarial_dishes() {
    let engine = common::test_engine();
    let dishes: [&[&str]; 4] = [
        &["salt", "salt", "fish sauce", "soy sauce", "shrimp paste"],
        &["sugar", "sugar", "sugar", "pork belly", "butter"],
        &["peanuts", "shrimp", "egg", "milk", "bread", "tofu"],
        &["moringa", "kangkong", "chicken", "mung beans", "tomato", "rice"],
    ];
    for ingredients in dishes {
        for portion in [0.0, 1.0, 100.0, 1000.0, 1.0e6] {
            let analysis = engine.analyze_dish(ingredients, portion);
            assert!(analysis.health_score <= 100, "{ingredients:?} at {portion}");
        }
    }
}

#[test]
fn test_salt_only_dish() {
    let engine = common::test_engine();
    let analysis = engine.analyze_dish(&["salt"], 100.0);

    // Portion factor is 100 * 0.1, so sodium is 10x the per-100g value
    assert!((analysis.total_nutrition.sodium - 387_580.0).abs() < 1e-6);
    // 50 - 15 (sodium) + 5 (calcium) + 5 (iron) + 2 (seasoning)
    assert_eq!(analysis.health_score, 47);
    assert_eq!(
        analysis.recommendations,
        vec![
            recommendations::ADD_PROTEIN,
            recommendations::ADD_FIBER,
            recommendations::REDUCE_SODIUM,
            recommendations::ADD_VITAMIN_C,
            recommendations::ADD_VEGETABLES,
        ]
    );
    assert_eq!(analysis.warnings.len(), 1);
    assert!(analysis.warnings[0].starts_with("High sodium"));
}

#[test]
fn test_negative_and_nan_portions_are_clamped() {
    let engine = common::test_engine();
    for portion in [-50.0, 0.0, f64::NAN] {
        let analysis = engine.analyze_dish(&["rice", "chicken"], portion);
        let fields = analysis.total_nutrition.fields();
        assert!(
            fields.iter().all(|(_, v)| v.is_finite() && *v >= 0.0),
            "portion {portion} produced {fields:?}"
        );
        assert!(analysis.total_calories > 0.0);
    }
}

#[test]
fn test_kare_kare_allergens_and_warnings() {
    let engine = common::test_engine();
    let dish = common::kare_kare();
    let analysis = engine.analyze_dish(&dish.ingredients, 100.0);

    let allergens: Vec<&str> = analysis
        .allergens
        .iter()
        .map(|a| a.canonical_name.as_str())
        .collect();
    assert_eq!(allergens, ["Peanuts"]);
    assert!(analysis
        .warnings
        .iter()
        .any(|w| w.contains("Peanuts")));
    assert_eq!(analysis.ingredients.len(), 4);
    assert!(!analysis
        .recommendations
        .contains(&recommendations::ADD_VEGETABLES.to_owned()));
}

#[test]
fn test_allergen_union_is_distinct() {
    let engine = common::test_engine();
    let analysis = engine.analyze_dish(&["shrimp", "hipon", "shrimp paste"], 100.0);

    let names: Vec<&str> = analysis
        .allergens
        .iter()
        .map(|a| a.canonical_name.as_str())
        .collect();
    assert_eq!(names, ["Shellfish"]);
}

#[test]
fn test_total_calories_mirror_aggregate() {
    let engine = common::test_engine();
    let analysis = engine.analyze_dish(&common::sinigang().ingredients, 250.0);
    assert!((analysis.total_calories - analysis.total_nutrition.calories).abs() < f64::EPSILON);
}
