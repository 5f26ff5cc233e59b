// ABOUTME: Display formatting of a nutrition record as a unit-suffixed label
// ABOUTME: Calories as whole kcal, masses to one decimal in g or mg, vitamin A in IU
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use karenderia_core::constants::label_units;
use karenderia_core::models::NutritionRecord;
use std::collections::BTreeMap;

/// Format every field of `record` as display text keyed by label name
#[must_use]
pub fn nutrition_label(record: &NutritionRecord) -> BTreeMap<String, String> {
    record
        .fields()
        .into_iter()
        .map(|(key, value)| (key.to_owned(), format_field(key, value)))
        .collect()
}

fn format_field(key: &str, value: f64) -> String {
    match unit_for(key) {
        label_units::KCAL => format!("{:.0} {}", value.round(), label_units::KCAL),
        unit => format!("{value:.1} {unit}"),
    }
}

fn unit_for(key: &str) -> &'static str {
    match key {
        "calories" => label_units::KCAL,
        "sodium" | "calcium" | "iron" | "vitaminC" => label_units::MILLIGRAMS,
        "vitaminA" => label_units::IU,
        _ => label_units::GRAMS,
    }
}
