// ABOUTME: Menu dish records and the filter specification used to query them
// ABOUTME: Dish, DishIngredients, FilterSpec, SortKey, SortOrder, and FilterPreset definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A dish as supplied by the menu/catalog store
///
/// Optional fields carry documented defaults: `available` is treated as
/// `true` when absent, dietary flags as `false`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    /// Catalog identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Dish name (e.g. "Kare-Kare")
    pub name: String,
    /// Free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ingredient strings as written by the eatery
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Price in pesos
    #[serde(default)]
    pub price: f64,
    /// Calories per serving, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    /// Menu category (e.g. "ulam", "merienda")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Spice level, 0 (none) to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<u8>,
    /// Availability; absent means available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// Vegetarian flag
    #[serde(default)]
    pub is_vegetarian: bool,
    /// Vegan flag
    #[serde(default)]
    pub is_vegan: bool,
    /// Distance from the user, in kilometres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Average customer rating (0-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Dish {
    /// Create a dish with a name and ingredients, all other fields defaulted
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ingredients: ingredients.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Availability with the `true` default applied
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available.unwrap_or(true)
    }
}

/// Minimal dish shape accepted by batch safety evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishIngredients {
    /// Dish name
    pub name: String,
    /// Ingredient strings
    pub ingredients: Vec<String>,
}

/// Field used to order filter results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Dish name, case-insensitive
    Name,
    /// Price
    Price,
    /// Calories per serving
    Calories,
    /// Spice level
    SpiceLevel,
    /// Distance from the user
    Distance,
    /// Customer rating
    Rating,
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Query over a dish collection
///
/// Every field is optional; an unset field disables its filter stage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Case-insensitive text matched against name, description, category, and ingredients
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Minimum calories (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_calories: Option<f64>,
    /// Maximum calories (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<f64>,
    /// Minimum price (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Maximum price (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Menu category, case-insensitive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Exact spice level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spice_level: Option<u8>,
    /// Availability wanted; defaults to available when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// Keep only vegetarian dishes when `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegetarian: Option<bool>,
    /// Keep only vegan dishes when `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vegan: Option<bool>,
    /// Keep only dishes safe for the user's allergen profile when `true`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergen_safe: Option<bool>,
    /// Exclude dishes containing any of these allergens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specific_allergens_to_avoid: Option<Vec<String>>,
    /// Maximum distance in kilometres (inclusive)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance_km: Option<f64>,
    /// Sort field; input order is kept when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortKey>,
    /// Sort direction, ascending when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

/// Named, static filter specifications offered to the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterPreset {
    /// Cheapest dishes first, capped at ₱100
    BudgetFriendly,
    /// Dishes at or under 400 kcal
    LowCalorie,
    /// Dishes safe for the current allergen profile
    AllergenSafe,
    /// Vegetarian dishes only
    Vegetarian,
    /// Dishes within 2 km, closest first
    Nearby,
}

/// Price ceiling for the budget-friendly preset (pesos)
const BUDGET_FRIENDLY_MAX_PRICE: f64 = 100.0;
/// Calorie ceiling for the low-calorie preset
const LOW_CALORIE_MAX: f64 = 400.0;
/// Distance ceiling for the nearby preset (km)
const NEARBY_MAX_DISTANCE_KM: f64 = 2.0;

impl FilterPreset {
    /// Every preset, in display order
    pub const ALL: [Self; 5] = [
        Self::BudgetFriendly,
        Self::LowCalorie,
        Self::AllergenSafe,
        Self::Vegetarian,
        Self::Nearby,
    ];

    /// Stable preset identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BudgetFriendly => "budget-friendly",
            Self::LowCalorie => "low-calorie",
            Self::AllergenSafe => "allergen-safe",
            Self::Vegetarian => "vegetarian",
            Self::Nearby => "nearby",
        }
    }

    /// The filter specification this preset stands for
    #[must_use]
    pub fn spec(&self) -> FilterSpec {
        match self {
            Self::BudgetFriendly => FilterSpec {
                max_price: Some(BUDGET_FRIENDLY_MAX_PRICE),
                sort_by: Some(SortKey::Price),
                sort_order: Some(SortOrder::Asc),
                ..FilterSpec::default()
            },
            Self::LowCalorie => FilterSpec {
                max_calories: Some(LOW_CALORIE_MAX),
                sort_by: Some(SortKey::Calories),
                sort_order: Some(SortOrder::Asc),
                ..FilterSpec::default()
            },
            Self::AllergenSafe => FilterSpec {
                allergen_safe: Some(true),
                ..FilterSpec::default()
            },
            Self::Vegetarian => FilterSpec {
                vegetarian: Some(true),
                ..FilterSpec::default()
            },
            Self::Nearby => FilterSpec {
                max_distance_km: Some(NEARBY_MAX_DISTANCE_KM),
                sort_by: Some(SortKey::Distance),
                sort_order: Some(SortOrder::Asc),
                ..FilterSpec::default()
            },
        }
    }
}

impl fmt::Display for FilterPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterPreset {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::not_found(format!("Filter preset '{wanted}'")))
    }
}
