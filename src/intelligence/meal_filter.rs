// ABOUTME: Dish filtering and sorting by a filter specification
// ABOUTME: Sequential AND-chain of pass-through-when-unset stages followed by a stable sort
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Filter/Query Facade
//!
//! Stages run in a fixed order: search text, calories, price, category,
//! spice level, availability, vegetarian, vegan, allergen safety, specific
//! allergens, distance. Every stage passes dishes through unchanged when its
//! field is unset, except availability, which defaults to "available".
//!
//! Calorie, spice, and distance stages drop dishes whose value is unknown
//! once their bound is set. Sorting is stable; without a sort key the input
//! order is kept. Dishes missing the sort value go last in either direction.

use super::allergen_safety::SafetyEvaluator;
use crate::config::MatchingConfig;
use crate::lexicon::{matches_allergen, normalize, LexiconStore};
use karenderia_core::models::{
    AllergenDefinition, Dish, FilterSpec, Severity, SortKey, SortOrder, UserAllergenEntry,
};
use std::borrow::Cow;
use std::cmp::Ordering;
use tracing::debug;

/// Applies [`FilterSpec`] queries to dish collections
#[derive(Debug, Clone, Copy)]
pub struct MealFilter<'a> {
    lexicon: &'a LexiconStore,
    matching: &'a MatchingConfig,
}

impl<'a> MealFilter<'a> {
    /// Create a filter over a lexicon
    #[must_use]
    pub const fn new(lexicon: &'a LexiconStore, matching: &'a MatchingConfig) -> Self {
        Self { lexicon, matching }
    }

    /// Filter and sort `dishes`
    ///
    /// `user_allergens` is only consulted by the allergen-safety stage; with no
    /// profile every dish is safe.
    #[must_use]
    pub fn filter(
        &self,
        dishes: &[Dish],
        spec: &FilterSpec,
        user_allergens: Option<&[UserAllergenEntry]>,
    ) -> Vec<Dish> {
        let mut kept: Vec<&Dish> = dishes.iter().collect();

        retain_by_menu_fields(&mut kept, spec);
        retain_by_diet(&mut kept, spec);
        self.retain_by_allergens(&mut kept, spec, user_allergens);

        if let Some(max_distance) = spec.max_distance_km {
            kept.retain(|dish| dish.distance_km.is_some_and(|d| d <= max_distance));
        }

        if let Some(key) = spec.sort_by {
            let order = spec.sort_order.unwrap_or_default();
            kept.sort_by(|a, b| compare_dishes(a, b, key, order));
        }

        debug!(input = dishes.len(), kept = kept.len(), "Dishes filtered");
        kept.into_iter().cloned().collect()
    }

    /// Allergen-safety stage, then the specific-allergens stage
    fn retain_by_allergens(
        &self,
        kept: &mut Vec<&Dish>,
        spec: &FilterSpec,
        user_allergens: Option<&[UserAllergenEntry]>,
    ) {
        if spec.allergen_safe == Some(true) {
            let profile = user_allergens.unwrap_or_default();
            let evaluator = SafetyEvaluator::new(self.lexicon, self.matching);
            kept.retain(|dish| {
                evaluator
                    .evaluate(&dish.ingredients, profile, Some(&dish.name))
                    .is_safe
            });
        }

        let Some(avoid) = spec.specific_allergens_to_avoid.as_deref() else {
            return;
        };
        let definitions: Vec<Cow<'_, AllergenDefinition>> = avoid
            .iter()
            .filter_map(|name| self.avoid_definition(name))
            .collect();
        if !definitions.is_empty() {
            kept.retain(|dish| !self.contains_any(dish, &definitions));
        }
    }

    /// Lexicon definition for an avoid-list name, or an ad hoc definition
    /// using the raw name as its only keyword
    fn avoid_definition(&self, name: &str) -> Option<Cow<'a, AllergenDefinition>> {
        let keyword = normalize(name);
        if keyword.is_empty() {
            return None;
        }
        Some(self.lexicon.resolve_allergen(&keyword).map_or_else(
            || {
                Cow::Owned(AllergenDefinition {
                    canonical_name: keyword.clone(),
                    severity_default: Severity::Unrecognized,
                    keywords: vec![keyword],
                    exclusions: Vec::new(),
                    alternatives: Vec::new(),
                })
            },
            Cow::Borrowed,
        ))
    }

    fn contains_any(&self, dish: &Dish, definitions: &[Cow<'_, AllergenDefinition>]) -> bool {
        dish.ingredients.iter().any(|ingredient| {
            let text = normalize(ingredient);
            definitions
                .iter()
                .any(|definition| matches_allergen(definition, &text, self.matching))
        })
    }
}

/// Search, calorie, price, category, and spice-level stages
fn retain_by_menu_fields(kept: &mut Vec<&Dish>, spec: &FilterSpec) {
    if let Some(search) = spec.search.as_deref().map(normalize) {
        if !search.is_empty() {
            kept.retain(|dish| matches_search(dish, &search));
        }
    }

    if spec.min_calories.is_some() || spec.max_calories.is_some() {
        kept.retain(|dish| {
            dish.calories
                .is_some_and(|c| within(c, spec.min_calories, spec.max_calories))
        });
    }

    if spec.min_price.is_some() || spec.max_price.is_some() {
        kept.retain(|dish| within(dish.price, spec.min_price, spec.max_price));
    }

    if let Some(category) = spec.category.as_deref().map(str::trim) {
        if !category.is_empty() {
            kept.retain(|dish| {
                dish.category
                    .as_deref()
                    .is_some_and(|c| c.trim().eq_ignore_ascii_case(category))
            });
        }
    }

    if let Some(level) = spec.spice_level {
        kept.retain(|dish| dish.spice_level == Some(level));
    }
}

/// Availability, vegetarian, and vegan stages
fn retain_by_diet(kept: &mut Vec<&Dish>, spec: &FilterSpec) {
    let wanted_available = spec.available.unwrap_or(true);
    kept.retain(|dish| dish.is_available() == wanted_available);

    if spec.vegetarian == Some(true) {
        kept.retain(|dish| dish.is_vegetarian);
    }
    if spec.vegan == Some(true) {
        kept.retain(|dish| dish.is_vegan);
    }
}

fn matches_search(dish: &Dish, needle: &str) -> bool {
    let hit = |field: &str| field.to_lowercase().contains(needle);
    hit(&dish.name)
        || dish.description.as_deref().is_some_and(hit)
        || dish.category.as_deref().is_some_and(hit)
        || dish.ingredients.iter().any(|i| hit(i))
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|lo| value >= lo) && max.is_none_or(|hi| value <= hi)
}

fn compare_dishes(a: &Dish, b: &Dish, key: SortKey, order: SortOrder) -> Ordering {
    let directed = |ordering: Ordering| match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };
    let optional = |x: Option<f64>, y: Option<f64>| match (x, y) {
        (Some(x), Some(y)) => directed(x.total_cmp(&y)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    match key {
        SortKey::Name => directed(a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        SortKey::Price => directed(a.price.total_cmp(&b.price)),
        SortKey::Calories => optional(a.calories, b.calories),
        SortKey::SpiceLevel => optional(a.spice_level.map(f64::from), b.spice_level.map(f64::from)),
        SortKey::Distance => optional(a.distance_km, b.distance_km),
        SortKey::Rating => optional(a.rating, b.rating),
    }
}
