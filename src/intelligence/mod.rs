// ABOUTME: Analysis components built on top of the lexicon store
// ABOUTME: Ingredient matching, dish nutrition, allergen safety, filtering, labels, and alternatives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! # Intelligence Module
//!
//! Pure, synchronous analysis over an immutable [`crate::lexicon::LexiconStore`].
//! Every component borrows the lexicon and its configuration; none of them
//! hold mutable state, so they are cheap to construct per call.

/// Allergen substitution suggestions keyed by detected allergen
pub mod alternatives;
/// Dish safety evaluation against a user allergen profile
pub mod allergen_safety;
/// Dish-level nutrition aggregation and health scoring
pub mod dish_analyzer;
/// Single-ingredient analysis
pub mod ingredient_matcher;
/// Dish filtering and sorting
pub mod meal_filter;
/// Nutrition label formatting
pub mod nutrition_label;

pub use alternatives::allergen_alternatives;
pub use allergen_safety::{safe_alternatives, SafetyEvaluator};
pub use dish_analyzer::{health_score, DishAnalyzer};
pub use ingredient_matcher::IngredientMatcher;
pub use meal_filter::MealFilter;
pub use nutrition_label::nutrition_label;
