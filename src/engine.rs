// ABOUTME: Application composition layer exposing the engine's in-process entry points
// ABOUTME: Owns the shared lexicon, validated config, and the last-write-wins user profile cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! # Karenderia Engine
//!
//! [`KarenderiaEngine`] is the one object callers hold. It wires the lexicon
//! and configuration into the analysis components and keeps the optional
//! "current user allergens" snapshot pushed by
//! [`KarenderiaEngine::update_user_allergens`].
//!
//! The snapshot is a last-write-wins cache behind a `RwLock`. Prefer passing
//! the profile explicitly to [`KarenderiaEngine::evaluate_safety`] and
//! [`KarenderiaEngine::filter_dishes`]; the cache only backs
//! [`KarenderiaEngine::batch_evaluate`] and profile-less filtering.

use crate::config::EngineConfig;
use crate::intelligence::{
    allergen_alternatives, nutrition_label, DishAnalyzer, IngredientMatcher, MealFilter,
    SafetyEvaluator,
};
use crate::lexicon::LexiconStore;
use karenderia_core::errors::AppResult;
use karenderia_core::models::{
    AllergenDefinition, BatchSafetyResult, Dish, DishIngredients, DishNutritionAnalysis,
    DishSafetyAnalysis, FilterPreset, FilterSpec, IngredientAnalysis, NutritionRecord,
    UserAllergenEntry,
};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Ingredient, allergen, and nutrition matching engine
#[derive(Debug)]
pub struct KarenderiaEngine {
    lexicon: Arc<LexiconStore>,
    config: EngineConfig,
    current_profile: RwLock<Vec<UserAllergenEntry>>,
}

impl KarenderiaEngine {
    /// Engine over the built-in lexicon and the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_lexicon(Arc::new(LexiconStore::builtin()))
    }

    /// Engine over a caller-supplied lexicon and the global configuration
    #[must_use]
    pub fn with_lexicon(lexicon: Arc<LexiconStore>) -> Self {
        Self {
            lexicon,
            config: EngineConfig::global().clone(),
            current_profile: RwLock::new(Vec::new()),
        }
    }

    /// Engine with an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` if the configuration fails validation
    pub fn with_config(lexicon: Arc<LexiconStore>, config: EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            lexicon,
            config,
            current_profile: RwLock::new(Vec::new()),
        })
    }

    /// The lexicon in use
    #[must_use]
    pub fn lexicon(&self) -> &LexiconStore {
        &self.lexicon
    }

    /// The configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn matcher(&self) -> IngredientMatcher<'_> {
        IngredientMatcher::new(&self.lexicon, &self.config.matching)
    }

    fn evaluator(&self) -> SafetyEvaluator<'_> {
        SafetyEvaluator::new(&self.lexicon, &self.config.matching)
    }

    /// Analyze one ingredient string
    #[must_use]
    pub fn analyze_ingredient(&self, ingredient: &str) -> IngredientAnalysis {
        self.matcher().analyze(ingredient)
    }

    /// Aggregate nutrition, health score, and advice for a dish
    #[must_use]
    pub fn analyze_dish<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        portion_weight: f64,
    ) -> DishNutritionAnalysis {
        DishAnalyzer::new(self.matcher(), &self.config.nutrition)
            .analyze(ingredients, portion_weight)
    }

    /// Evaluate a dish against an explicit allergen profile
    #[must_use]
    pub fn evaluate_safety<S: AsRef<str>>(
        &self,
        ingredients: &[S],
        user_allergens: &[UserAllergenEntry],
        dish_name: Option<&str>,
    ) -> DishSafetyAnalysis {
        self.evaluator().evaluate(ingredients, user_allergens, dish_name)
    }

    /// Evaluate many dishes against the cached profile
    #[must_use]
    pub fn batch_evaluate(&self, dishes: &[DishIngredients]) -> Vec<BatchSafetyResult> {
        let profile = self.current_user_allergens();
        self.evaluator().batch_evaluate(dishes, &profile)
    }

    /// Filter and sort dishes
    ///
    /// When `user_allergens` is `None` the cached profile is used by the
    /// allergen-safety stage.
    #[must_use]
    pub fn filter_dishes(
        &self,
        dishes: &[Dish],
        spec: &FilterSpec,
        user_allergens: Option<&[UserAllergenEntry]>,
    ) -> Vec<Dish> {
        let filter = MealFilter::new(&self.lexicon, &self.config.matching);
        match user_allergens {
            Some(profile) => filter.filter(dishes, spec, Some(profile)),
            None => {
                let cached = self.current_user_allergens();
                filter.filter(dishes, spec, Some(cached.as_slice()))
            }
        }
    }

    /// Filter and sort dishes with a named preset
    #[must_use]
    pub fn filter_with_preset(
        &self,
        dishes: &[Dish],
        preset: FilterPreset,
        user_allergens: Option<&[UserAllergenEntry]>,
    ) -> Vec<Dish> {
        debug!(%preset, "Applying filter preset");
        self.filter_dishes(dishes, &preset.spec(), user_allergens)
    }

    /// Replace the cached user allergen profile
    pub fn update_user_allergens(&self, allergens: Vec<UserAllergenEntry>) {
        info!(count = allergens.len(), "User allergen profile updated");
        let mut profile = self
            .current_profile
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *profile = allergens;
    }

    /// Snapshot of the cached user allergen profile
    #[must_use]
    pub fn current_user_allergens(&self) -> Vec<UserAllergenEntry> {
        self.current_profile
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Substitute suggestions for each allergen detected in `ingredients`
    #[must_use]
    pub fn get_allergen_alternatives<S: AsRef<str>>(
        &self,
        ingredients: &[S],
    ) -> BTreeMap<String, Vec<String>> {
        allergen_alternatives(&self.lexicon, &self.config.matching, ingredients)
    }

    /// Display label for a nutrition record
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn get_nutrition_label(&self, record: &NutritionRecord) -> BTreeMap<String, String> {
        nutrition_label(record)
    }

    /// Every allergen the lexicon knows, in report order
    #[must_use]
    pub fn allergen_catalog(&self) -> &[AllergenDefinition] {
        self.lexicon.allergens()
    }
}

impl Default for KarenderiaEngine {
    fn default() -> Self {
        Self::new()
    }
}
