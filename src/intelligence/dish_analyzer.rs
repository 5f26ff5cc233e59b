// ABOUTME: Dish-level nutrition aggregation and heuristic health assessment
// ABOUTME: Sums portion-scaled nutrients, unions allergens, scores health, and emits advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Dish Analyzer
//!
//! Aggregates ingredient analyses into a [`DishNutritionAnalysis`]. Each
//! listed ingredient contributes its per-100g record multiplied by the
//! portion factor (see [`crate::config::PortionConfig`]); the result is an approximation
//! that treats ingredients as roughly equal-weight components.

use super::ingredient_matcher::IngredientMatcher;
use crate::config::{
    DishWarningThresholds, HealthScoringConfig, NutritionAnalysisConfig, RecommendationThresholds,
};
use karenderia_core::constants::recommendations;
use karenderia_core::models::{
    DishNutritionAnalysis, IngredientAnalysis, IngredientCategory, MatchedAllergen,
    NutritionRecord, Severity,
};
use std::collections::HashSet;
use tracing::debug;

/// Builds nutrition assessments for whole dishes
#[derive(Debug, Clone, Copy)]
pub struct DishAnalyzer<'a> {
    matcher: IngredientMatcher<'a>,
    config: &'a NutritionAnalysisConfig,
}

impl<'a> DishAnalyzer<'a> {
    /// Create an analyzer
    #[must_use]
    pub const fn new(matcher: IngredientMatcher<'a>, config: &'a NutritionAnalysisConfig) -> Self {
        Self { matcher, config }
    }

    /// Analyze a dish given its ingredient strings and portion weight
    ///
    /// An empty ingredient list yields all-zero nutrition and the base score
    /// with the recommendations the zero state triggers.
    #[must_use]
    pub fn analyze<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        portion_weight: f64,
    ) -> DishNutritionAnalysis {
        let analyses: Vec<IngredientAnalysis> = ingredients
            .iter()
            .map(|raw| self.matcher.analyze(raw.as_ref()))
            .collect();

        let factor = self.config.portion.factor_for(portion_weight);
        let total = aggregate_nutrition(&analyses, factor);
        let allergens = union_allergens(&analyses);
        let category_count = distinct_categories(&analyses);
        let has_vegetable = analyses
            .iter()
            .any(|a| a.category == IngredientCategory::Vegetable);

        let health_score = health_score(
            &total,
            allergens.len(),
            category_count,
            &self.config.health_scoring,
        );
        let recommendations =
            recommendations_for(&total, has_vegetable, &self.config.recommendations);
        let warnings = warnings_for(&total, &allergens, &self.config.warnings);

        debug!(
            ingredients = analyses.len(),
            portion_factor = factor,
            health_score,
            allergens = allergens.len(),
            "Dish analyzed"
        );

        DishNutritionAnalysis {
            total_calories: total.calories,
            total_nutrition: total,
            health_score,
            allergens,
            recommendations,
            warnings,
            ingredients: analyses,
        }
    }
}

fn aggregate_nutrition(analyses: &[IngredientAnalysis], factor: f64) -> NutritionRecord {
    let mut total = NutritionRecord::default();
    for analysis in analyses {
        total.add_scaled(&analysis.nutrition, factor);
    }
    total
}

/// Distinct allergens by canonical name, in first-seen order
fn union_allergens(analyses: &[IngredientAnalysis]) -> Vec<MatchedAllergen> {
    let mut seen = HashSet::new();
    analyses
        .iter()
        .flat_map(|a| &a.matched_allergens)
        .filter(|a| seen.insert(a.canonical_name.to_lowercase()))
        .cloned()
        .collect()
}

/// Number of distinct categories other than `Other`
fn distinct_categories(analyses: &[IngredientAnalysis]) -> usize {
    analyses
        .iter()
        .map(|a| a.category)
        .filter(|c| *c != IngredientCategory::Other)
        .collect::<HashSet<_>>()
        .len()
}

/// Heuristic 0-100 health score
#[must_use]
pub fn health_score(
    total: &NutritionRecord,
    allergen_count: usize,
    category_count: usize,
    config: &HealthScoringConfig,
) -> u8 {
    let mut score = config.base_score;

    if total.protein > config.protein_bonus_threshold_g {
        score = score.saturating_add(config.protein_bonus);
    }
    if total.fiber > config.fiber_bonus_threshold_g {
        score = score.saturating_add(config.fiber_bonus);
    }
    if total.vitamin_c > config.vitamin_c_bonus_threshold_mg {
        score = score.saturating_add(config.vitamin_c_bonus);
    }
    if total.calcium > config.calcium_bonus_threshold_mg {
        score = score.saturating_add(config.calcium_bonus);
    }
    if total.iron > config.iron_bonus_threshold_mg {
        score = score.saturating_add(config.iron_bonus);
    }

    if total.sodium > config.sodium_penalty_threshold_mg {
        score = score.saturating_sub(config.sodium_penalty);
    }
    if total.sugar > config.sugar_penalty_threshold_g {
        score = score.saturating_sub(config.sugar_penalty);
    }
    if total.fat > config.fat_penalty_threshold_g {
        score = score.saturating_sub(config.fat_penalty);
    }
    if allergen_count > config.allergen_count_threshold {
        score = score.saturating_sub(config.allergen_penalty);
    }

    let categories = i32::try_from(category_count).unwrap_or(i32::MAX);
    score = score.saturating_add(categories.saturating_mul(config.category_bonus));

    let clamped = score
        .clamp(config.min_score, config.max_score)
        .clamp(0, i32::from(u8::MAX));
    u8::try_from(clamped).unwrap_or_default()
}

fn recommendations_for(
    total: &NutritionRecord,
    has_vegetable: bool,
    thresholds: &RecommendationThresholds,
) -> Vec<String> {
    let rules = [
        (total.protein < thresholds.low_protein_g, recommendations::ADD_PROTEIN),
        (total.fiber < thresholds.low_fiber_g, recommendations::ADD_FIBER),
        (total.sodium > thresholds.high_sodium_mg, recommendations::REDUCE_SODIUM),
        (total.vitamin_c < thresholds.low_vitamin_c_mg, recommendations::ADD_VITAMIN_C),
        (!has_vegetable, recommendations::ADD_VEGETABLES),
    ];
    rules
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, text)| text.to_owned())
        .collect()
}

fn warnings_for(
    total: &NutritionRecord,
    allergens: &[MatchedAllergen],
    thresholds: &DishWarningThresholds,
) -> Vec<String> {
    let mut warnings: Vec<String> = allergens
        .iter()
        .filter(|a| a.severity_default == Severity::Severe)
        .map(|a| {
            format!(
                "Contains {}, a common cause of severe allergic reactions",
                a.canonical_name
            )
        })
        .collect();

    if total.sodium > thresholds.high_sodium_mg {
        warnings.push(format!(
            "High sodium: {:.0} mg exceeds the {:.0} mg daily limit",
            total.sodium, thresholds.high_sodium_mg
        ));
    }
    if total.calories > thresholds.high_calories {
        warnings.push(format!(
            "High calorie portion: {:.0} kcal, consider sharing or a smaller serving",
            total.calories
        ));
    }
    warnings
}
