// ABOUTME: Nutrition analysis configuration for dish health scoring and recommendations
// ABOUTME: Configures score bonuses/penalties, recommendation and warning thresholds, portion scaling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Nutrition Analysis Configuration
//!
//! Thresholds used by the dish analyzer. Defaults reproduce the karenderia
//! app's heuristic health score exactly; they are tunable through
//! `KARENDERIA_*` environment variables (see [`super::EngineConfig::load`]).

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Nutrition Analysis Configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionAnalysisConfig {
    /// Health score bonuses and penalties
    pub health_scoring: HealthScoringConfig,
    /// Thresholds that trigger improvement suggestions
    pub recommendations: RecommendationThresholds,
    /// Thresholds that trigger dish warnings
    pub warnings: DishWarningThresholds,
    /// Portion scaling applied to per-100g lexicon values
    pub portion: PortionConfig,
}

/// Health score heuristic (0-100)
///
/// Starts at `base_score`, adds a bonus for every nutrient above its bonus
/// threshold, subtracts a penalty for every nutrient above its penalty
/// threshold, adds `category_bonus` per distinct food group, then clamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthScoringConfig {
    /// Starting score: 50
    pub base_score: i32,
    /// Lower clamp bound: 0
    pub min_score: i32,
    /// Upper clamp bound: 100
    pub max_score: i32,
    /// Protein above this (g) earns `protein_bonus`: 15
    pub protein_bonus_threshold_g: f64,
    /// Protein bonus: +10
    pub protein_bonus: i32,
    /// Fiber above this (g) earns `fiber_bonus`: 5
    pub fiber_bonus_threshold_g: f64,
    /// Fiber bonus: +10
    pub fiber_bonus: i32,
    /// Vitamin C above this (mg) earns `vitamin_c_bonus`: 10
    pub vitamin_c_bonus_threshold_mg: f64,
    /// Vitamin C bonus: +5
    pub vitamin_c_bonus: i32,
    /// Calcium above this (mg) earns `calcium_bonus`: 100
    pub calcium_bonus_threshold_mg: f64,
    /// Calcium bonus: +5
    pub calcium_bonus: i32,
    /// Iron above this (mg) earns `iron_bonus`: 2
    pub iron_bonus_threshold_mg: f64,
    /// Iron bonus: +5
    pub iron_bonus: i32,
    /// Sodium above this (mg) costs `sodium_penalty`: 2000
    pub sodium_penalty_threshold_mg: f64,
    /// Sodium penalty: -15
    pub sodium_penalty: i32,
    /// Sugar above this (g) costs `sugar_penalty`: 20
    pub sugar_penalty_threshold_g: f64,
    /// Sugar penalty: -10
    pub sugar_penalty: i32,
    /// Fat above this (g) costs `fat_penalty`: 30
    pub fat_penalty_threshold_g: f64,
    /// Fat penalty: -5
    pub fat_penalty: i32,
    /// More distinct allergens than this costs `allergen_penalty`: 2
    pub allergen_count_threshold: usize,
    /// Allergen penalty: -10
    pub allergen_penalty: i32,
    /// Bonus per distinct ingredient category (excluding "other"): +2
    pub category_bonus: i32,
}

impl Default for HealthScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            min_score: 0,
            max_score: 100,
            protein_bonus_threshold_g: 15.0,
            protein_bonus: 10,
            fiber_bonus_threshold_g: 5.0,
            fiber_bonus: 10,
            vitamin_c_bonus_threshold_mg: 10.0,
            vitamin_c_bonus: 5,
            calcium_bonus_threshold_mg: 100.0,
            calcium_bonus: 5,
            iron_bonus_threshold_mg: 2.0,
            iron_bonus: 5,
            sodium_penalty_threshold_mg: 2000.0,
            sodium_penalty: 15,
            sugar_penalty_threshold_g: 20.0,
            sugar_penalty: 10,
            fat_penalty_threshold_g: 30.0,
            fat_penalty: 5,
            allergen_count_threshold: 2,
            allergen_penalty: 10,
            category_bonus: 2,
        }
    }
}

impl HealthScoringConfig {
    /// Validate clamp bounds and sign of every weight
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the clamp bounds are inverted or the
    /// base score lies outside them, and `ConfigError::ValueOutOfRange` if any
    /// bonus, penalty, or threshold is negative or non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_score >= self.max_score {
            return Err(ConfigError::InvalidRange(
                "health score min_score must be < max_score",
            ));
        }
        if !(self.min_score..=self.max_score).contains(&self.base_score) {
            return Err(ConfigError::InvalidRange(
                "health score base_score must lie within [min_score, max_score]",
            ));
        }
        if self.min_score < 0 || self.max_score > i32::from(u8::MAX) {
            return Err(ConfigError::ValueOutOfRange(
                "health score bounds must fit within 0..=255",
            ));
        }

        let weights = [
            self.protein_bonus,
            self.fiber_bonus,
            self.vitamin_c_bonus,
            self.calcium_bonus,
            self.iron_bonus,
            self.sodium_penalty,
            self.sugar_penalty,
            self.fat_penalty,
            self.allergen_penalty,
            self.category_bonus,
        ];
        if weights.iter().any(|w| *w < 0) {
            return Err(ConfigError::ValueOutOfRange(
                "health score bonuses and penalties must be non-negative",
            ));
        }

        let thresholds = [
            self.protein_bonus_threshold_g,
            self.fiber_bonus_threshold_g,
            self.vitamin_c_bonus_threshold_mg,
            self.calcium_bonus_threshold_mg,
            self.iron_bonus_threshold_mg,
            self.sodium_penalty_threshold_mg,
            self.sugar_penalty_threshold_g,
            self.fat_penalty_threshold_g,
        ];
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "health score thresholds must be finite and non-negative",
            ));
        }

        Ok(())
    }
}

/// Nutrient levels below (or above, for sodium) which a suggestion is emitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Suggest protein sources below this (g): 15
    pub low_protein_g: f64,
    /// Suggest vegetables/whole grains below this fiber (g): 3
    pub low_fiber_g: f64,
    /// Suggest less salt above this sodium (mg): 2000
    pub high_sodium_mg: f64,
    /// Suggest vitamin C vegetables below this (mg): 5
    pub low_vitamin_c_mg: f64,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            low_protein_g: 15.0,
            low_fiber_g: 3.0,
            high_sodium_mg: 2000.0,
            low_vitamin_c_mg: 5.0,
        }
    }
}

/// Thresholds for dish-level warnings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishWarningThresholds {
    /// High-sodium warning above this (mg): 2300
    pub high_sodium_mg: f64,
    /// Portion-size warning above this many calories: 800
    pub high_calories: f64,
}

impl Default for DishWarningThresholds {
    fn default() -> Self {
        Self {
            high_sodium_mg: 2300.0,
            high_calories: 800.0,
        }
    }
}

/// Portion scaling
///
/// Each listed ingredient is treated as one roughly equal-weight component of
/// the portion: its per-100g record is multiplied by
/// `portion_weight * scale_factor`. This is an approximation kept for
/// compatibility with the karenderia app, not a recipe-weight calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortionConfig {
    /// Multiplier applied to the portion weight: 0.1
    pub scale_factor: f64,
    /// Portion weights below this (including negative and NaN) are raised to it: 0.01
    pub min_portion_weight: f64,
}

impl Default for PortionConfig {
    fn default() -> Self {
        Self {
            scale_factor: 0.1,
            min_portion_weight: 0.01,
        }
    }
}

impl PortionConfig {
    /// Per-ingredient multiplier for a caller-supplied portion weight
    #[must_use]
    pub fn factor_for(&self, portion_weight: f64) -> f64 {
        let weight = if portion_weight.is_nan() {
            self.min_portion_weight
        } else {
            portion_weight.max(self.min_portion_weight)
        };
        weight * self.scale_factor
    }

    /// Validate scale factor and minimum weight
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if either value is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale_factor.is_finite() || self.scale_factor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "portion scale_factor must be positive",
            ));
        }
        if !self.min_portion_weight.is_finite() || self.min_portion_weight <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "portion min_portion_weight must be positive",
            ));
        }
        Ok(())
    }
}
