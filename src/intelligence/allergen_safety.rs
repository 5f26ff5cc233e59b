// ABOUTME: Allergen safety evaluation of a dish against a user's allergen profile
// ABOUTME: Severity-tiered warnings, aggregate risk level, substitutions, and parallel batch mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Allergen Safety Evaluator
//!
//! Profile entries are processed in profile order, so warnings come out in
//! the order the user declared their allergens. The user's declared severity
//! always drives the warning; the lexicon default is never consulted here.
//!
//! A profile entry that resolves to no lexicon allergen cannot be checked. It
//! never produces a warning; it is listed in
//! [`DishSafetyAnalysis::unchecked_allergens`] instead.

use crate::config::MatchingConfig;
use crate::lexicon::{matches_allergen, normalize, LexiconStore};
use karenderia_core::constants::{allergen_names, alternatives};
use karenderia_core::models::{
    AllergenWarning, BatchSafetyResult, DishIngredients, DishSafetyAnalysis, RiskLevel, Severity,
    UserAllergenEntry,
};
use rayon::prelude::*;
use std::collections::HashSet;
use tracing::{debug, info};

/// Dish name used in messages when the caller supplies none
const DEFAULT_DISH_NAME: &str = "This dish";

/// Cross-references dish ingredients with a user allergen profile
#[derive(Debug, Clone, Copy)]
pub struct SafetyEvaluator<'a> {
    lexicon: &'a LexiconStore,
    matching: &'a MatchingConfig,
}

impl<'a> SafetyEvaluator<'a> {
    /// Create an evaluator over a lexicon
    #[must_use]
    pub const fn new(lexicon: &'a LexiconStore, matching: &'a MatchingConfig) -> Self {
        Self { lexicon, matching }
    }

    /// Evaluate one dish
    #[must_use]
    pub fn evaluate<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        user_allergens: &[UserAllergenEntry],
        dish_name: Option<&str>,
    ) -> DishSafetyAnalysis {
        let dish_name = dish_name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_DISH_NAME);
        let normalized: Vec<String> = ingredients.iter().map(|i| normalize(i.as_ref())).collect();

        let mut warnings = Vec::new();
        let mut unchecked_allergens = Vec::new();
        let mut reported = HashSet::new();

        for entry in user_allergens {
            let Some(definition) = self.lexicon.resolve_allergen(&entry.name) else {
                debug!(allergen = %entry.name, "Allergen not in lexicon, skipping");
                unchecked_allergens.push(entry.name.clone());
                continue;
            };
            if !reported.insert(definition.canonical_name.to_lowercase()) {
                continue;
            }

            let found_in: Vec<String> = ingredients
                .iter()
                .zip(&normalized)
                .filter(|(_, text)| matches_allergen(definition, text, self.matching))
                .map(|(raw, _)| raw.as_ref().to_owned())
                .collect();

            if found_in.is_empty() {
                continue;
            }

            let message =
                warning_message(&definition.canonical_name, entry.severity, dish_name, &found_in);
            warnings.push(AllergenWarning {
                allergen: definition.canonical_name.clone(),
                severity: entry.severity,
                found_in,
                message,
            });
        }

        let risk_level = warnings
            .iter()
            .map(|w| w.severity.risk_level())
            .max()
            .unwrap_or(RiskLevel::Low);
        let safe_alternatives = safe_alternatives(warnings.iter().map(|w| w.allergen.as_str()));

        DishSafetyAnalysis {
            is_safe: warnings.is_empty(),
            warnings,
            risk_level,
            safe_alternatives,
            unchecked_allergens,
        }
    }

    /// Evaluate many dishes against one profile, preserving input order
    #[must_use]
    pub fn batch_evaluate(
        &self,
        dishes: &[DishIngredients],
        user_allergens: &[UserAllergenEntry],
    ) -> Vec<BatchSafetyResult> {
        info!(
            dishes = dishes.len(),
            profile = user_allergens.len(),
            "Batch safety evaluation"
        );
        dishes
            .par_iter()
            .map(|dish| BatchSafetyResult {
                name: dish.name.clone(),
                analysis: self.evaluate(&dish.ingredients, user_allergens, Some(&dish.name)),
            })
            .collect()
    }
}

fn warning_message(
    allergen: &str,
    severity: Severity,
    dish_name: &str,
    found_in: &[String],
) -> String {
    let sources = found_in.join(", ");
    match severity {
        Severity::Severe => format!(
            "DANGER: {dish_name} contains {allergen} ({sources}). \
             Do not eat this dish; severe allergic reaction risk."
        ),
        Severity::Moderate => format!(
            "WARNING: {dish_name} contains {allergen} ({sources}). \
             A moderate reaction is possible."
        ),
        Severity::Mild => format!(
            "NOTICE: {dish_name} contains {allergen} ({sources}). \
             Eat with caution if you are sensitive."
        ),
        Severity::Unrecognized => format!("{allergen} detected in {dish_name} ({sources})."),
    }
}

/// Substitution suggestions for the triggered allergens, deduplicated in
/// first-triggered order
#[must_use]
pub fn safe_alternatives<'n>(triggered: impl IntoIterator<Item = &'n str>) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();
    for name in triggered {
        let Some(suggestion) = alternative_for(name) else {
            continue;
        };
        if !suggestions.iter().any(|s| s == suggestion) {
            suggestions.push(suggestion.to_owned());
        }
    }
    suggestions
}

fn alternative_for(allergen: &str) -> Option<&'static str> {
    let is = |name: &str| allergen.eq_ignore_ascii_case(name);
    if is(allergen_names::DAIRY) {
        Some(alternatives::DAIRY)
    } else if is(allergen_names::EGGS) {
        Some(alternatives::EGGS)
    } else if is(allergen_names::FISH) || is(allergen_names::SHELLFISH) {
        Some(alternatives::SEAFOOD)
    } else if is(allergen_names::PEANUTS) || is(allergen_names::TREE_NUTS) {
        Some(alternatives::NUTS)
    } else if is(allergen_names::SOY) {
        Some(alternatives::SOY)
    } else if is(allergen_names::WHEAT) {
        Some(alternatives::WHEAT)
    } else {
        None
    }
}
