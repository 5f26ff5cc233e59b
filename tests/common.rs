// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup, sample menus, and allergen profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `karenderia_engine`
//!
//! Fixture dishes mirror a typical karenderia menu board.

use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::models::{Dish, DishIngredients, Severity, UserAllergenEntry};
use std::env;
use std::sync::Once;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            Ok("WARN" | "ERROR") | _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Engine over the built-in lexicon with logging initialized
pub fn test_engine() -> KarenderiaEngine {
    init_test_logging();
    KarenderiaEngine::new()
}

/// Profile with a single severe peanut allergy
pub fn peanut_profile() -> Vec<UserAllergenEntry> {
    vec![UserAllergenEntry::new("Peanuts", Severity::Severe)]
}

pub fn kare_kare() -> Dish {
    Dish {
        id: Some("d1".into()),
        description: Some("Oxtail stew in peanut sauce".into()),
        price: 150.0,
        calories: Some(650.0),
        category: Some("ulam".into()),
        spice_level: Some(0),
        distance_km: Some(1.2),
        rating: Some(4.7),
        ..Dish::new(
            "Kare-Kare",
            ["oxtail", "peanut sauce", "eggplant", "string beans"],
        )
    }
}

pub fn sinigang() -> Dish {
    Dish {
        id: Some("d2".into()),
        description: Some("Sour tamarind soup".into()),
        price: 120.0,
        calories: Some(320.0),
        category: Some("soup".into()),
        spice_level: Some(1),
        distance_km: Some(0.5),
        rating: Some(4.5),
        ..Dish::new(
            "Sinigang na Baboy",
            ["pork", "tamarind", "tomatoes", "kangkong", "fish sauce"],
        )
    }
}

pub fn adobo() -> Dish {
    Dish {
        id: Some("d3".into()),
        price: 90.0,
        calories: Some(480.0),
        category: Some("ulam".into()),
        spice_level: Some(0),
        distance_km: Some(3.4),
        rating: Some(4.8),
        ..Dish::new(
            "Adobong Manok",
            ["chicken", "soy sauce", "vinegar", "garlic", "bay leaves"],
        )
    }
}

pub fn ginataang_gulay() -> Dish {
    Dish {
        id: Some("d4".into()),
        description: Some("Squash and string beans in coconut milk".into()),
        price: 70.0,
        category: Some("gulay".into()),
        spice_level: Some(2),
        is_vegetarian: true,
        is_vegan: true,
        distance_km: Some(0.8),
        ..Dish::new(
            "Ginataang Gulay",
            ["squash", "string beans", "coconut milk", "garlic", "onion"],
        )
    }
}

pub fn tortang_talong() -> Dish {
    Dish {
        id: Some("d5".into()),
        price: 60.0,
        calories: Some(210.0),
        category: Some("ulam".into()),
        spice_level: Some(0),
        is_vegetarian: true,
        rating: Some(4.1),
        ..Dish::new("Tortang Talong", ["eggplant", "egg", "onion", "salt"])
    }
}

pub fn halo_halo_sold_out() -> Dish {
    Dish {
        id: Some("d6".into()),
        price: 85.0,
        calories: Some(540.0),
        category: Some("merienda".into()),
        available: Some(false),
        is_vegetarian: true,
        ..Dish::new(
            "Halo-Halo",
            ["evaporated milk", "sugar", "sweet potato", "banana"],
        )
    }
}

/// Six dishes, one of them unavailable
pub fn sample_menu() -> Vec<Dish> {
    vec![
        kare_kare(),
        sinigang(),
        adobo(),
        ginataang_gulay(),
        tortang_talong(),
        halo_halo_sold_out(),
    ]
}

pub fn names(dishes: &[Dish]) -> Vec<&str> {
    dishes.iter().map(|d| d.name.as_str()).collect()
}

/// Name and ingredient lists for batch safety evaluation
pub fn batch_shape(dishes: &[Dish]) -> Vec<DishIngredients> {
    dishes
        .iter()
        .map(|d| DishIngredients {
            name: d.name.clone(),
            ingredients: d.ingredients.clone(),
        })
        .collect()
}
