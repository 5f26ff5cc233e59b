// ABOUTME: Input loading helpers for karenderia-cli
// ABOUTME: Reads JSON files and parses inline `name[:severity]` allergen profile entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use karenderia_engine::engine::KarenderiaEngine;
use karenderia_engine::errors::{AppError, AppResult};
use karenderia_engine::models::{Severity, UserAllergenEntry};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::storage(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}

/// Ingredients from a JSON array file when given, otherwise from arguments
pub fn ingredients_from(file: Option<&Path>, args: Vec<String>) -> AppResult<Vec<String>> {
    file.map_or(Ok(args), read_json)
}

/// Build a profile from a JSON file followed by inline entries
///
/// Inline entries without a severity take the lexicon default when the name
/// resolves; otherwise the severity is unrecognized.
pub fn profile_from(
    engine: &KarenderiaEngine,
    inline: &[String],
    file: Option<&Path>,
) -> AppResult<Vec<UserAllergenEntry>> {
    let mut profile: Vec<UserAllergenEntry> = match file {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    profile.extend(inline.iter().map(|raw| parse_entry(engine, raw)));
    Ok(profile)
}

fn parse_entry(engine: &KarenderiaEngine, raw: &str) -> UserAllergenEntry {
    match raw.split_once(':') {
        Some((name, severity)) => {
            UserAllergenEntry::new(name.trim(), Severity::from_str_lossy(severity))
        }
        None => engine
            .lexicon()
            .resolve_allergen(raw.trim())
            .map_or_else(
                || UserAllergenEntry::new(raw.trim(), Severity::Unrecognized),
                |definition| UserAllergenEntry {
                    name: raw.trim().to_owned(),
                    severity: definition.severity_default,
                },
            ),
    }
}
