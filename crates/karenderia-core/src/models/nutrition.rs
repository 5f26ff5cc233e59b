// ABOUTME: Nutrition record model shared by the lexicon and the dish analyzer
// ABOUTME: Eleven per-100g nutrient fields with scaling and aggregation helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::constants::trace_food;
use serde::{Deserialize, Serialize};

/// Nutrient content, per 100g when attached to a lexicon entry or as an
/// aggregate when produced by the dish analyzer.
///
/// All fields are non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionRecord {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbohydrates: f64,
    /// Fat (g)
    pub fat: f64,
    /// Dietary fiber (g)
    pub fiber: f64,
    /// Sugar (g)
    pub sugar: f64,
    /// Sodium (mg)
    pub sodium: f64,
    /// Calcium (mg)
    pub calcium: f64,
    /// Iron (mg)
    pub iron: f64,
    /// Vitamin C (mg)
    pub vitamin_c: f64,
    /// Vitamin A (IU)
    pub vitamin_a: f64,
}

impl NutritionRecord {
    /// Build a record from the macro fields, leaving micronutrients at zero
    #[must_use]
    pub const fn macros(calories: f64, protein: f64, carbohydrates: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbohydrates,
            fat,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 0.0,
            calcium: 0.0,
            iron: 0.0,
            vitamin_c: 0.0,
            vitamin_a: 0.0,
        }
    }

    /// Set fiber and sugar (g)
    #[must_use]
    pub const fn with_fiber_sugar(mut self, fiber: f64, sugar: f64) -> Self {
        self.fiber = fiber;
        self.sugar = sugar;
        self
    }

    /// Set sodium, calcium, and iron (mg)
    #[must_use]
    pub const fn with_minerals(mut self, sodium: f64, calcium: f64, iron: f64) -> Self {
        self.sodium = sodium;
        self.calcium = calcium;
        self.iron = iron;
        self
    }

    /// Set vitamin C (mg) and vitamin A (IU)
    #[must_use]
    pub const fn with_vitamins(mut self, vitamin_c: f64, vitamin_a: f64) -> Self {
        self.vitamin_c = vitamin_c;
        self.vitamin_a = vitamin_a;
        self
    }

    /// Fallback record for ingredients missing from the lexicon
    #[must_use]
    pub const fn trace_estimate() -> Self {
        Self::macros(
            trace_food::CALORIES,
            trace_food::PROTEIN_G,
            trace_food::CARBOHYDRATES_G,
            trace_food::FAT_G,
        )
        .with_fiber_sugar(trace_food::FIBER_G, trace_food::SUGAR_G)
        .with_minerals(
            trace_food::SODIUM_MG,
            trace_food::CALCIUM_MG,
            trace_food::IRON_MG,
        )
        .with_vitamins(trace_food::VITAMIN_C_MG, trace_food::VITAMIN_A_IU)
    }

    /// Field values in declaration order, paired with their label keys
    #[must_use]
    pub const fn fields(&self) -> [(&'static str, f64); 11] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbohydrates", self.carbohydrates),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
            ("sodium", self.sodium),
            ("calcium", self.calcium),
            ("iron", self.iron),
            ("vitaminC", self.vitamin_c),
            ("vitaminA", self.vitamin_a),
        ]
    }

    /// Add `other * factor` to every field
    pub fn add_scaled(&mut self, other: &Self, factor: f64) {
        self.calories += other.calories * factor;
        self.protein += other.protein * factor;
        self.carbohydrates += other.carbohydrates * factor;
        self.fat += other.fat * factor;
        self.fiber += other.fiber * factor;
        self.sugar += other.sugar * factor;
        self.sodium += other.sodium * factor;
        self.calcium += other.calcium * factor;
        self.iron += other.iron * factor;
        self.vitamin_c += other.vitamin_c * factor;
        self.vitamin_a += other.vitamin_a * factor;
    }

    /// Name of the first negative or non-finite field, if any
    #[must_use]
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
            .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_estimate_is_not_zero() {
        let trace = NutritionRecord::trace_estimate();
        assert!((trace.calories - 20.0).abs() < f64::EPSILON);
        assert!((trace.protein - 1.0).abs() < f64::EPSILON);
        assert!((trace.carbohydrates - 4.0).abs() < f64::EPSILON);
        assert!((trace.fat - 0.1).abs() < f64::EPSILON);
        assert!(trace.first_invalid_field().is_none());
    }

    #[test]
    fn test_add_scaled_accumulates_every_field() {
        let mut total = NutritionRecord::default();
        let rice = NutritionRecord::macros(130.0, 2.7, 28.0, 0.3)
            .with_fiber_sugar(0.4, 0.1)
            .with_minerals(1.0, 10.0, 0.2);
        total.add_scaled(&rice, 2.0);
        total.add_scaled(&rice, 0.5);
        assert!((total.calories - 325.0).abs() < 1e-9);
        assert!((total.sodium - 2.5).abs() < 1e-9);
        assert!((total.vitamin_a - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_first_invalid_field_detects_negative() {
        let mut record = NutritionRecord::default();
        record.iron = -1.0;
        assert_eq!(record.first_invalid_field(), Some("iron"));
    }
}
