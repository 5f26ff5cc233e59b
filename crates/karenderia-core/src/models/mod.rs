// ABOUTME: Value-object models for the karenderia allergen and nutrition engine
// ABOUTME: Re-exports nutrition, allergen, dish, and analysis types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Request/response value objects. None of these are persisted by the engine;
//! callers own their lifecycle.

/// Allergen definitions, user profile entries, severity and risk levels
pub mod allergen;
/// Derived ingredient and dish analysis results
pub mod analysis;
/// Menu dishes and filter specifications
pub mod dish;
/// Per-100g nutrition records
pub mod nutrition;

pub use allergen::{AllergenDefinition, RiskLevel, Severity, UserAllergenEntry};
pub use analysis::{
    AllergenWarning, BatchSafetyResult, DishNutritionAnalysis, DishSafetyAnalysis,
    IngredientAnalysis, IngredientCategory, MatchedAllergen,
};
pub use dish::{Dish, DishIngredients, FilterPreset, FilterSpec, SortKey, SortOrder};
pub use nutrition::NutritionRecord;
