// ABOUTME: Allergen safety commands for karenderia-cli
// ABOUTME: Single-dish evaluation and batch evaluation through the profile cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::helpers::display::print_json;
use crate::helpers::input::{profile_from, read_json};
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::AppResult;
use karenderia_engine::models::DishIngredients;
use std::path::Path;

pub fn evaluate(
    engine: &KarenderiaEngine,
    ingredients: &[String],
    inline_profile: &[String],
    profile_file: Option<&Path>,
    dish_name: Option<&str>,
) -> AppResult<()> {
    let profile = profile_from(engine, inline_profile, profile_file)?;
    print_json(&engine.evaluate_safety(ingredients, &profile, dish_name))
}

pub fn batch(
    engine: &KarenderiaEngine,
    dishes_file: &Path,
    inline_profile: &[String],
    profile_file: Option<&Path>,
) -> AppResult<()> {
    let dishes: Vec<DishIngredients> = read_json(dishes_file)?;
    engine.update_user_allergens(profile_from(engine, inline_profile, profile_file)?);
    print_json(&engine.batch_evaluate(&dishes))
}
