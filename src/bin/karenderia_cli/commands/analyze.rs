// ABOUTME: Ingredient, dish, label, and alternatives commands for karenderia-cli
// ABOUTME: Thin wrappers that load input, call the engine, and print JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::helpers::display::print_json;
use crate::helpers::input::{ingredients_from, read_json};
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::{AppError, AppResult};
use karenderia_engine::models::NutritionRecord;
use std::path::Path;

pub fn ingredient(engine: &KarenderiaEngine, text: &str) -> AppResult<()> {
    print_json(&engine.analyze_ingredient(text))
}

pub fn dish(
    engine: &KarenderiaEngine,
    file: Option<&Path>,
    args: Vec<String>,
    portion_weight: f64,
) -> AppResult<()> {
    let ingredients = ingredients_from(file, args)?;
    print_json(&engine.analyze_dish(&ingredients, portion_weight))
}

pub fn label(
    engine: &KarenderiaEngine,
    file: Option<&Path>,
    ingredient: Option<&str>,
) -> AppResult<()> {
    let record: NutritionRecord = match (file, ingredient) {
        (Some(path), _) => read_json(path)?,
        (None, Some(text)) => engine.analyze_ingredient(text).nutrition,
        (None, None) => {
            return Err(AppError::invalid_input(
                "label needs either --file or --ingredient",
            ))
        }
    };
    if let Some(field) = record.first_invalid_field() {
        return Err(AppError::value_out_of_range(format!(
            "Nutrition field '{field}' must be a non-negative number"
        )));
    }
    print_json(&engine.get_nutrition_label(&record))
}

pub fn alternatives(engine: &KarenderiaEngine, ingredients: &[String]) -> AppResult<()> {
    print_json(&engine.get_allergen_alternatives(ingredients))
}
