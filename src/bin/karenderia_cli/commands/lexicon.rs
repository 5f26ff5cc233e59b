// ABOUTME: Lexicon inspection commands for karenderia-cli
// ABOUTME: Allergen catalog listing and full lexicon export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::helpers::display::print_json;
use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::{AppError, AppResult};
use karenderia_engine::models::UserAllergenEntry;
use std::fs;
use std::path::Path;
use tracing::info;

pub fn catalog(engine: &KarenderiaEngine) -> AppResult<()> {
    let entries: Vec<UserAllergenEntry> = engine
        .allergen_catalog()
        .iter()
        .map(UserAllergenEntry::from_definition)
        .collect();
    print_json(&entries)
}

pub fn export(engine: &KarenderiaEngine, output: Option<&Path>) -> AppResult<()> {
    let json = engine.lexicon().to_json()?;
    match output {
        Some(path) => {
            fs::write(path, json).map_err(|e| {
                AppError::storage(format!("Failed to write {}: {e}", path.display()))
                    .with_source(e)
            })?;
            info!(
                path = %path.display(),
                version = engine.lexicon().version(),
                "Lexicon exported"
            );
            Ok(())
        }
        None => print_json(&engine.lexicon().to_document()),
    }
}
