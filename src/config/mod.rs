// ABOUTME: Configuration management module for engine thresholds and matching parameters
// ABOUTME: Re-exports the engine configuration and its domain sub-configurations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Configuration module for the Karenderia engine
//!
//! All tunables live under [`intelligence`]; the global instance is loaded
//! once with `KARENDERIA_*` environment overrides.

/// Engine analysis configuration
pub mod intelligence;

pub use intelligence::{
    ConfigError, DishWarningThresholds, EngineConfig, HealthScoringConfig, MatchingConfig,
    NutritionAnalysisConfig, PortionConfig, RecommendationThresholds,
};
