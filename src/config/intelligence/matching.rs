// ABOUTME: Ingredient matching configuration for allergen keyword comparison
// ABOUTME: Controls the minimum length for reverse (keyword-contains-ingredient) matches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Allergen keyword matching configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum ingredient length (in characters) for the ingredient to match
    /// by being contained in a keyword, e.g. "tuyo" inside "tuyo flakes"
    pub min_reverse_match_len: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_reverse_match_len: 4,
        }
    }
}

impl MatchingConfig {
    /// Validate matching configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if `min_reverse_match_len` is zero,
    /// which would let the empty string match every keyword.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.min_reverse_match_len == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_reverse_match_len must be at least 1",
            ));
        }
        Ok(())
    }
}
