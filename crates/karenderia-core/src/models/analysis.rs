// ABOUTME: Derived analysis results produced by the matching engine
// ABOUTME: Ingredient, dish-nutrition, and dish-safety value objects consumed by the UI layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use super::allergen::{RiskLevel, Severity};
use super::nutrition::NutritionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Coarse food-group classification of a single ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IngredientCategory {
    /// Meat, fish, eggs, legumes, tofu
    Protein,
    /// Rice, noodles, bread, root crops
    Carbohydrate,
    /// Leafy and fruiting vegetables
    Vegetable,
    /// Oils, butter, coconut milk
    Fat,
    /// Sauces, condiments, herbs, spices
    Seasoning,
    /// No keyword group matched
    Other,
}

impl IngredientCategory {
    /// Classification priority; earlier groups win when several match
    pub const PRIORITY: [Self; 5] = [
        Self::Protein,
        Self::Carbohydrate,
        Self::Vegetable,
        Self::Fat,
        Self::Seasoning,
    ];
}

impl fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Protein => "protein",
            Self::Carbohydrate => "carbohydrate",
            Self::Vegetable => "vegetable",
            Self::Fat => "fat",
            Self::Seasoning => "seasoning",
            Self::Other => "other",
        })
    }
}

/// Allergen attributed to an ingredient by the lexicon
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedAllergen {
    /// Canonical allergen name
    pub canonical_name: String,
    /// Lexicon default severity
    pub severity_default: Severity,
}

/// Analysis of one ingredient string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientAnalysis {
    /// Ingredient text exactly as supplied
    pub ingredient: String,
    /// Allergens the ingredient may trigger, in lexicon order
    pub matched_allergens: Vec<MatchedAllergen>,
    /// Per-100g nutrition (lexicon entry or trace estimate)
    pub nutrition: NutritionRecord,
    /// Food-group classification
    pub category: IngredientCategory,
    /// Derived labels such as "vegan-friendly" or "gluten-free"
    pub tags: BTreeSet<String>,
}

impl IngredientAnalysis {
    /// Whether an allergen with this canonical name was matched
    #[must_use]
    pub fn has_allergen(&self, canonical_name: &str) -> bool {
        self.matched_allergens
            .iter()
            .any(|a| a.canonical_name.eq_ignore_ascii_case(canonical_name))
    }
}

/// Nutrition assessment for a whole dish
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishNutritionAnalysis {
    /// Aggregate calories (same as `total_nutrition.calories`)
    pub total_calories: f64,
    /// Aggregate nutrients scaled by the portion factor
    pub total_nutrition: NutritionRecord,
    /// Heuristic quality index, 0-100
    pub health_score: u8,
    /// Distinct allergens across all ingredients, by canonical name
    pub allergens: Vec<MatchedAllergen>,
    /// Improvement suggestions, in rule order
    pub recommendations: Vec<String>,
    /// Sodium, calorie, and severe-allergen warnings
    pub warnings: Vec<String>,
    /// Per-ingredient breakdown
    pub ingredients: Vec<IngredientAnalysis>,
}

/// One allergen conflict between a dish and a user profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenWarning {
    /// Canonical allergen name
    pub allergen: String,
    /// User-declared severity
    pub severity: Severity,
    /// Ingredient strings that triggered the match, in dish order
    pub found_in: Vec<String>,
    /// Severity-tiered message for display
    pub message: String,
}

/// Safety verdict for a dish against one user's allergen profile
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishSafetyAnalysis {
    /// `true` when no warning was raised
    pub is_safe: bool,
    /// Warnings in profile order
    pub warnings: Vec<AllergenWarning>,
    /// Highest risk implied by the warnings
    pub risk_level: RiskLevel,
    /// Deduplicated substitution suggestions
    pub safe_alternatives: Vec<String>,
    /// Profile entries that matched no lexicon allergen and were not checked
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unchecked_allergens: Vec<String>,
}

/// Result row for batch safety evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSafetyResult {
    /// Dish name
    pub name: String,
    /// Safety verdict for the dish
    pub analysis: DishSafetyAnalysis,
}
