// ABOUTME: Menu filter command for karenderia-cli
// ABOUTME: Applies a filter spec file or a named preset to a dish list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::helpers::display::print_json;
use crate::helpers::input::{profile_from, read_json};
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::AppResult;
use karenderia_engine::models::{Dish, FilterPreset, FilterSpec};
use std::path::Path;

pub fn run(
    engine: &KarenderiaEngine,
    dishes_file: &Path,
    spec_file: Option<&Path>,
    preset: Option<&str>,
    inline_profile: &[String],
    profile_file: Option<&Path>,
) -> AppResult<()> {
    let dishes: Vec<Dish> = read_json(dishes_file)?;
    let spec: FilterSpec = match (spec_file, preset) {
        (Some(path), _) => read_json(path)?,
        (None, Some(name)) => name.parse::<FilterPreset>()?.spec(),
        (None, None) => FilterSpec::default(),
    };
    let profile = profile_from(engine, inline_profile, profile_file)?;
    print_json(&engine.filter_dishes(&dishes, &spec, Some(profile.as_slice())))
}
