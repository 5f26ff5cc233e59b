// ABOUTME: Engine configuration for ingredient matching and dish nutrition analysis
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Engine Configuration Module
//!
//! Provides type-safe, validated configuration for the matching engine.
//!
//! # Module Structure
//!
//! - `matching` - Allergen keyword matching behaviour
//! - `nutrition` - Health score heuristic, recommendation and warning thresholds, portion scaling
//! - `error` - Configuration error types

/// Configuration error types
pub mod error;
/// Allergen keyword matching settings
pub mod matching;
/// Health scoring, recommendation, warning, and portion settings
pub mod nutrition;

pub use error::ConfigError;
pub use matching::MatchingConfig;
pub use nutrition::{
    DishWarningThresholds, HealthScoringConfig, NutritionAnalysisConfig, PortionConfig,
    RecommendationThresholds,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Configuration for dish nutrition analysis
    pub nutrition: NutritionAnalysisConfig,
    /// Configuration for allergen keyword matching
    pub matching: MatchingConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus `KARENDERIA_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError` reported by a sub-configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.nutrition.health_scoring.validate()?;
        self.nutrition.portion.validate()?;
        self.matching.validate()?;

        let recs = &self.nutrition.recommendations;
        let warns = &self.nutrition.warnings;
        let thresholds = [
            recs.low_protein_g,
            recs.low_fiber_g,
            recs.high_sodium_mg,
            recs.low_vitamin_c_mg,
            warns.high_sodium_mg,
            warns.high_calories,
        ];
        if thresholds.iter().any(|t| !t.is_finite() || *t < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "recommendation and warning thresholds must be finite and non-negative",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let scoring = &mut self.nutrition.health_scoring;
        Self::apply_env_var("KARENDERIA_HEALTH_BASE_SCORE", &mut scoring.base_score)?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_CATEGORY_BONUS",
            &mut scoring.category_bonus,
        )?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_PROTEIN_THRESHOLD_G",
            &mut scoring.protein_bonus_threshold_g,
        )?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_FIBER_THRESHOLD_G",
            &mut scoring.fiber_bonus_threshold_g,
        )?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_SODIUM_PENALTY_THRESHOLD_MG",
            &mut scoring.sodium_penalty_threshold_mg,
        )?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_SUGAR_PENALTY_THRESHOLD_G",
            &mut scoring.sugar_penalty_threshold_g,
        )?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_FAT_PENALTY_THRESHOLD_G",
            &mut scoring.fat_penalty_threshold_g,
        )?;
        Self::apply_env_var(
            "KARENDERIA_HEALTH_ALLERGEN_COUNT_THRESHOLD",
            &mut scoring.allergen_count_threshold,
        )?;

        let recs = &mut self.nutrition.recommendations;
        Self::apply_env_var("KARENDERIA_REC_LOW_PROTEIN_G", &mut recs.low_protein_g)?;
        Self::apply_env_var("KARENDERIA_REC_LOW_FIBER_G", &mut recs.low_fiber_g)?;
        Self::apply_env_var("KARENDERIA_REC_HIGH_SODIUM_MG", &mut recs.high_sodium_mg)?;
        Self::apply_env_var(
            "KARENDERIA_REC_LOW_VITAMIN_C_MG",
            &mut recs.low_vitamin_c_mg,
        )?;

        let warns = &mut self.nutrition.warnings;
        Self::apply_env_var("KARENDERIA_WARN_HIGH_SODIUM_MG", &mut warns.high_sodium_mg)?;
        Self::apply_env_var("KARENDERIA_WARN_HIGH_CALORIES", &mut warns.high_calories)?;

        let portion = &mut self.nutrition.portion;
        Self::apply_env_var("KARENDERIA_PORTION_SCALE_FACTOR", &mut portion.scale_factor)?;
        Self::apply_env_var(
            "KARENDERIA_PORTION_MIN_WEIGHT",
            &mut portion.min_portion_weight,
        )?;

        Self::apply_env_var(
            "KARENDERIA_MIN_REVERSE_MATCH_LEN",
            &mut self.matching.min_reverse_match_len,
        )?;

        Ok(self)
    }
}
