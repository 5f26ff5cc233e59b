// ABOUTME: Main library entry point for the karenderia allergen and nutrition engine
// ABOUTME: Matches free-text ingredients to allergens, nutrition, and categories for Filipino dishes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

// Crate-level attributes:
// - deny(unsafe_code): Zero-tolerance unsafe policy
#![deny(unsafe_code)]

//! # Karenderia Engine
//!
//! An ingredient, allergen, and nutrition matching engine for karenderia
//! (Filipino eatery) menus. It turns free-text ingredient lists into
//! structured analyses and cross-references them with a user's allergen
//! profile.
//!
//! ## Features
//!
//! - **Ingredient analysis**: Allergens, per-100g nutrition, food-group category, and tags
//! - **Dish analysis**: Portion-scaled nutrition totals, a 0-100 health score, and advice
//! - **Allergen safety**: Severity-tiered warnings and an aggregate risk level
//! - **Filtering**: Budget, calorie, dietary, allergen, and distance filters with sorting
//!
//! ## Architecture
//!
//! - **Lexicon**: Immutable keyword tables for allergens, nutrition, and categories
//! - **Intelligence**: Pure analysis components borrowing the lexicon
//! - **Engine**: Composition layer holding the lexicon, config, and profile cache
//! - **Config**: Validated thresholds and scoring weights with environment overrides
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use karenderia_engine::engine::KarenderiaEngine;
//! use karenderia_engine::models::{Severity, UserAllergenEntry};
//!
//! let engine = KarenderiaEngine::new();
//! let profile = vec![UserAllergenEntry::new("Peanuts", Severity::Severe)];
//! let analysis = engine.evaluate_safety(&["oxtail", "peanut sauce"], &profile, Some("Kare-Kare"));
//! assert!(!analysis.is_safe);
//! ```

/// Engine configuration: scoring weights, thresholds, and matching behaviour
pub mod config;

/// Composition layer and public entry points
pub mod engine;

/// Ingredient, dish, safety, and filter analysis components
pub mod intelligence;

/// Allergen, nutrition, and category keyword tables
pub mod lexicon;

/// Structured logging configuration
pub mod logging;

pub use karenderia_core::{constants, errors, models};
