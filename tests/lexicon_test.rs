// ABOUTME: Integration tests for loading, validating, and exporting lexicons
// ABOUTME: Covers the builtin tables, JSON round trips, custom files, and rejection of bad documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use karenderia_engine::constants::lexicon::LEXICON_VERSION;
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::ErrorCode;
use karenderia_engine::lexicon::{CategoryGroup, LexiconDocument, LexiconStore, NutritionEntry};
use karenderia_engine::models::{
    AllergenDefinition, IngredientCategory, NutritionRecord, Severity, UserAllergenEntry,
};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn calamansi_document() -> LexiconDocument {
    LexiconDocument {
        version: "test-1".into(),
        allergens: vec![AllergenDefinition {
            canonical_name: " Citrus ".into(),
            severity_default: Severity::Mild,
            keywords: vec!["Calamansi".into(), "dalandan".into(), "  ".into()],
            exclusions: vec![],
            alternatives: vec!["Vinegar".into()],
        }],
        nutrition: vec![NutritionEntry {
            key: "Calamansi".into(),
            aliases: vec!["kalamansi".into()],
            nutrition: NutritionRecord {
                vitamin_c: 37.0,
                ..NutritionRecord::macros(30.0, 0.6, 8.0, 0.2)
            },
        }],
        categories: vec![CategoryGroup {
            category: IngredientCategory::Seasoning,
            keywords: vec!["calamansi".into()],
        }],
    }
}

#[test]
fn test_builtin_lexicon_version() {
    let store = LexiconStore::builtin();
    assert_eq!(store.version(), LEXICON_VERSION);
    assert_eq!(store.allergens().len(), 9);
    assert!(!store.nutrition_entries().is_empty());
}

#[test]
fn test_export_reloads_to_identical_tables() {
    let store = LexiconStore::builtin();
    let reloaded = LexiconStore::from_json(&store.to_json().unwrap()).unwrap();

    assert_eq!(reloaded.version(), store.version());
    assert_eq!(reloaded.allergens(), store.allergens());
    assert_eq!(reloaded.nutrition_entries(), store.nutrition_entries());
}

#[test]
fn test_document_terms_are_normalized() {
    let store = LexiconStore::from_document(calamansi_document()).unwrap();
    let citrus = &store.allergens()[0];

    assert_eq!(citrus.canonical_name, "Citrus");
    assert_eq!(citrus.keywords, ["calamansi", "dalandan"]);
    assert_eq!(store.nutrition_entries()[0].key, "calamansi");
}

#[test]
fn test_custom_lexicon_file_drives_engine() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lexicon.json");
    fs::write(&path, serde_json::to_string(&calamansi_document()).unwrap()).unwrap();

    let store = LexiconStore::from_file(&path).unwrap();
    assert_eq!(store.version(), "test-1");
    let engine = KarenderiaEngine::with_lexicon(Arc::new(store));

    let analysis = engine.analyze_ingredient("fresh kalamansi");
    assert_eq!(analysis.matched_allergens.len(), 0);
    assert!((analysis.nutrition.vitamin_c - 37.0).abs() < f64::EPSILON);

    let juice = engine.analyze_ingredient("calamansi juice");
    assert_eq!(juice.matched_allergens[0].canonical_name, "Citrus");
    assert_eq!(juice.category, IngredientCategory::Seasoning);

    let profile = vec![UserAllergenEntry::new("citrus", Severity::Moderate)];
    let safety = engine.evaluate_safety(&["dalandan", "rice"], &profile, None);
    assert!(!safety.is_safe);
    assert!(safety.safe_alternatives.is_empty());
    assert_eq!(
        engine.get_allergen_alternatives(&["dalandan"])["Citrus"],
        ["Vinegar"]
    );

    // Builtin allergens are gone with a replacement lexicon
    assert!(engine.analyze_ingredient("peanuts").matched_allergens.is_empty());
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let err = LexiconStore::from_file(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_malformed_json_is_format_error() {
    let err = LexiconStore::from_json("{\"version\": \"x\", \"allergens\": [").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);

    let err = LexiconStore::from_json("{\"version\": \"x\"}").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidFormat);
}

#[test]
fn test_duplicate_allergen_names_are_rejected() {
    let mut document = calamansi_document();
    let mut duplicate = document.allergens[0].clone();
    duplicate.canonical_name = "CITRUS".into();
    document.allergens.push(duplicate);

    let err = LexiconStore::from_document(document).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("Duplicate"));
}

#[test]
fn test_allergen_without_keywords_is_rejected() {
    let mut document = calamansi_document();
    document.allergens[0].keywords = vec!["   ".into()];

    let err = LexiconStore::from_document(document).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_invalid_nutrition_is_rejected() {
    let mut negative = calamansi_document();
    negative.nutrition[0].nutrition.sodium = -3.0;
    let err = LexiconStore::from_document(negative).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("sodium"));

    let mut blank_key = calamansi_document();
    blank_key.nutrition[0].key = " ".into();
    assert_eq!(
        LexiconStore::from_document(blank_key).unwrap_err().code,
        ErrorCode::InvalidInput
    );
}
