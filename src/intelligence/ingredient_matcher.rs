// ABOUTME: Single-ingredient analysis against the lexicon store
// ABOUTME: Resolves allergens, per-100g nutrition, food-group category, and derived tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::config::MatchingConfig;
use crate::lexicon::LexiconStore;
use karenderia_core::constants::{allergen_names, tags};
use karenderia_core::models::{IngredientAnalysis, IngredientCategory, MatchedAllergen, Severity};
use std::collections::BTreeSet;
use tracing::debug;

/// Produces one [`IngredientAnalysis`] per ingredient string
///
/// Pure function of the ingredient text and the lexicon: the same input
/// always yields the same analysis.
#[derive(Debug, Clone, Copy)]
pub struct IngredientMatcher<'a> {
    lexicon: &'a LexiconStore,
    matching: &'a MatchingConfig,
}

impl<'a> IngredientMatcher<'a> {
    /// Create a matcher over a lexicon
    #[must_use]
    pub const fn new(lexicon: &'a LexiconStore, matching: &'a MatchingConfig) -> Self {
        Self { lexicon, matching }
    }

    /// Analyze one ingredient string
    #[must_use]
    pub fn analyze(&self, raw: &str) -> IngredientAnalysis {
        let matched_allergens: Vec<MatchedAllergen> = self
            .lexicon
            .lookup_allergens(raw, self.matching)
            .into_iter()
            .map(|definition| MatchedAllergen {
                canonical_name: definition.canonical_name.clone(),
                severity_default: definition.severity_default,
            })
            .collect();
        let nutrition = self.lexicon.lookup_nutrition(raw, self.matching);
        let category = self.lexicon.categorize(raw);
        let tags = derive_tags(category, &matched_allergens);

        debug!(
            ingredient = raw,
            allergens = matched_allergens.len(),
            %category,
            "Ingredient analyzed"
        );

        IngredientAnalysis {
            ingredient: raw.to_owned(),
            matched_allergens,
            nutrition,
            category,
            tags,
        }
    }
}

fn derive_tags(category: IngredientCategory, allergens: &[MatchedAllergen]) -> BTreeSet<String> {
    let has = |name: &str| {
        allergens
            .iter()
            .any(|a| a.canonical_name.eq_ignore_ascii_case(name))
    };

    let mut derived = BTreeSet::new();
    if !has(allergen_names::DAIRY) && !has(allergen_names::EGGS) {
        derived.insert(tags::VEGAN_FRIENDLY.to_owned());
    }
    if !has(allergen_names::WHEAT) {
        derived.insert(tags::GLUTEN_FREE.to_owned());
    }
    if allergens
        .iter()
        .any(|a| a.severity_default == Severity::Severe)
    {
        derived.insert(tags::HIGH_ALLERGEN_RISK.to_owned());
    }
    match category {
        IngredientCategory::Vegetable => {
            derived.insert(tags::PLANT_BASED.to_owned());
        }
        IngredientCategory::Protein => {
            derived.insert(tags::PROTEIN_RICH.to_owned());
        }
        _ => {}
    }
    derived
}
