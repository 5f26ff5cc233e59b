// ABOUTME: Lexicon store holding the allergen, nutrition, and category tables
// ABOUTME: Keyword lookups with bidirectional matching, exclusions, aliases, and trace fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Lexicon Store
//!
//! Three immutable tables loaded once at startup: allergen definitions,
//! per-100g nutrition entries, and category keyword groups. The embedded
//! tables are tagged with [`LEXICON_VERSION`]; a caller-supplied lexicon can
//! be loaded from JSON and is validated before use.
//!
//! Lookups never fail. Unknown ingredients produce an empty allergen list,
//! the trace nutrition estimate, and the `other` category.

mod allergens;
mod categories;
mod nutrition;

use crate::config::MatchingConfig;
use karenderia_core::constants::lexicon::LEXICON_VERSION;
use karenderia_core::errors::{AppError, AppResult};
use karenderia_core::models::{AllergenDefinition, IngredientCategory, NutritionRecord};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::iter;
use std::path::Path;

/// Nutrition table row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionEntry {
    /// Lowercase lookup key (e.g. "water spinach")
    pub key: String,
    /// Alternative names, typically Filipino (e.g. "kangkong")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Per-100g values
    pub nutrition: NutritionRecord,
}

impl NutritionEntry {
    fn terms(&self) -> impl Iterator<Item = &str> {
        iter::once(self.key.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Keyword group for one ingredient category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Category assigned when a keyword matches
    pub category: IngredientCategory,
    /// Lowercase terms matched on word boundaries
    pub keywords: Vec<String>,
}

/// Serialized lexicon, as exported by [`LexiconStore::to_json`]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconDocument {
    /// Free-form version tag
    pub version: String,
    /// Allergen table, in reporting order
    pub allergens: Vec<AllergenDefinition>,
    /// Nutrition table, in partial-match order
    pub nutrition: Vec<NutritionEntry>,
    /// Category groups, in classification priority order
    pub categories: Vec<CategoryGroup>,
}

/// Immutable lookup tables shared by every analyzer
#[derive(Debug, Clone)]
pub struct LexiconStore {
    version: String,
    allergens: Vec<AllergenDefinition>,
    nutrition: Vec<NutritionEntry>,
    categories: Vec<CategoryGroup>,
}

impl LexiconStore {
    /// Store backed by the embedded tables
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            version: LEXICON_VERSION.to_owned(),
            allergens: allergens::builtin_allergens(),
            nutrition: nutrition::builtin_nutrition(),
            categories: categories::builtin_categories(),
        }
    }

    /// Parse and validate a lexicon document
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for malformed JSON and `InvalidInput` when the
    /// document fails validation (see [`Self::from_document`]).
    pub fn from_json(json: &str) -> AppResult<Self> {
        let document: LexiconDocument = serde_json::from_str(json).map_err(|e| {
            AppError::invalid_format(format!("Malformed lexicon document: {e}")).with_source(e)
        })?;
        Self::from_document(document)
    }

    /// Read a lexicon document from disk
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be read, otherwise the errors
    /// of [`Self::from_json`].
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Cannot read lexicon file {}", path.display()))
                .with_source(e)
        })?;
        Self::from_json(&json)
    }

    /// Validate a document and build a store from it
    ///
    /// Keywords, aliases, and keys are normalized to trimmed lowercase.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if an allergen name is empty or duplicated, an
    /// allergen has no keywords, a nutrition key is empty, or a nutrition
    /// value is negative or non-finite.
    pub fn from_document(document: LexiconDocument) -> AppResult<Self> {
        let mut seen = HashSet::new();
        let mut allergens = Vec::with_capacity(document.allergens.len());
        for mut definition in document.allergens {
            definition.canonical_name = definition.canonical_name.trim().to_owned();
            if definition.canonical_name.is_empty() {
                return Err(AppError::invalid_input("Allergen with empty canonical name"));
            }
            if !seen.insert(definition.canonical_name.to_lowercase()) {
                return Err(AppError::invalid_input(format!(
                    "Duplicate allergen '{}'",
                    definition.canonical_name
                )));
            }
            definition.keywords = normalize_terms(definition.keywords);
            definition.exclusions = normalize_terms(definition.exclusions);
            if definition.keywords.is_empty() {
                return Err(AppError::invalid_input(format!(
                    "Allergen '{}' has no keywords",
                    definition.canonical_name
                )));
            }
            allergens.push(definition);
        }

        let mut nutrition = Vec::with_capacity(document.nutrition.len());
        for mut entry in document.nutrition {
            entry.key = normalize(&entry.key);
            if entry.key.is_empty() {
                return Err(AppError::invalid_input("Nutrition entry with empty key"));
            }
            if let Some(field) = entry.nutrition.first_invalid_field() {
                return Err(AppError::invalid_input(format!(
                    "Nutrition entry '{}' has invalid {field}",
                    entry.key
                )));
            }
            entry.aliases = normalize_terms(entry.aliases);
            nutrition.push(entry);
        }

        let categories = document
            .categories
            .into_iter()
            .map(|group| CategoryGroup {
                category: group.category,
                keywords: normalize_terms(group.keywords),
            })
            .collect();

        Ok(Self {
            version: document.version,
            allergens,
            nutrition,
            categories,
        })
    }

    /// Export the active tables
    #[must_use]
    pub fn to_document(&self) -> LexiconDocument {
        LexiconDocument {
            version: self.version.clone(),
            allergens: self.allergens.clone(),
            nutrition: self.nutrition.clone(),
            categories: self.categories.clone(),
        }
    }

    /// Export the active tables as pretty JSON
    ///
    /// # Errors
    ///
    /// Returns `SerializationError` if serialization fails
    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_document())?)
    }

    /// Version tag of the loaded tables
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Every allergen definition, in reporting order
    #[must_use]
    pub fn allergens(&self) -> &[AllergenDefinition] {
        &self.allergens
    }

    /// Every nutrition entry, in partial-match order
    #[must_use]
    pub fn nutrition_entries(&self) -> &[NutritionEntry] {
        &self.nutrition
    }

    /// Every allergen definition the ingredient text may trigger
    #[must_use]
    pub fn lookup_allergens(
        &self,
        ingredient: &str,
        matching: &MatchingConfig,
    ) -> Vec<&AllergenDefinition> {
        let normalized = normalize(ingredient);
        self.allergens
            .iter()
            .filter(|definition| matches_allergen(definition, &normalized, matching))
            .collect()
    }

    /// Per-100g nutrition for the ingredient text
    ///
    /// Exact key, then exact alias, then the longest key or alias contained
    /// in the text (earlier table entries win ties), then the first entry
    /// whose key or alias contains the text, then the trace estimate.
    #[must_use]
    pub fn lookup_nutrition(&self, ingredient: &str, matching: &MatchingConfig) -> NutritionRecord {
        let normalized = normalize(ingredient);
        if normalized.is_empty() {
            return NutritionRecord::trace_estimate();
        }

        if let Some(entry) = self.nutrition.iter().find(|e| e.key == normalized) {
            return entry.nutrition;
        }

        if let Some(entry) = self
            .nutrition
            .iter()
            .find(|e| e.aliases.iter().any(|a| *a == normalized))
        {
            return entry.nutrition;
        }

        if let Some(entry) = self.longest_contained_term(&normalized) {
            return entry.nutrition;
        }

        if normalized.chars().count() < matching.min_reverse_match_len {
            return NutritionRecord::trace_estimate();
        }
        self.nutrition
            .iter()
            .find(|e| e.terms().any(|term| term.contains(normalized.as_str())))
            .map_or_else(NutritionRecord::trace_estimate, |e| e.nutrition)
    }

    /// Entry owning the longest key or alias that occurs inside `normalized`
    fn longest_contained_term(&self, normalized: &str) -> Option<&NutritionEntry> {
        let mut best: Option<(usize, &NutritionEntry)> = None;
        for entry in &self.nutrition {
            for term in entry.terms().filter(|t| normalized.contains(*t)) {
                let len = term.chars().count();
                if best.is_none_or(|(best_len, _)| len > best_len) {
                    best = Some((len, entry));
                }
            }
        }
        best.map(|(_, entry)| entry)
    }

    /// Food-group classification; the first group with a whole-word match wins
    #[must_use]
    pub fn categorize(&self, ingredient: &str) -> IngredientCategory {
        let normalized = normalize(ingredient);
        IngredientCategory::PRIORITY
            .into_iter()
            .find(|category| {
                self.categories
                    .iter()
                    .filter(|group| group.category == *category)
                    .flat_map(|group| &group.keywords)
                    .any(|keyword| contains_word(&normalized, keyword))
            })
            .unwrap_or(IngredientCategory::Other)
    }

    /// Definition whose canonical name equals `name`, case-insensitively
    #[must_use]
    pub fn find_allergen(&self, name: &str) -> Option<&AllergenDefinition> {
        self.allergens.iter().find(|d| d.is_named(name))
    }

    /// Definition for a user-supplied allergen name
    ///
    /// Canonical name first, then exact keyword (e.g. "gluten" resolves to
    /// Wheat, "mani" to Peanuts).
    #[must_use]
    pub fn resolve_allergen(&self, name: &str) -> Option<&AllergenDefinition> {
        self.find_allergen(name)
            .or_else(|| self.allergens.iter().find(|d| d.has_keyword(name)))
    }
}

impl Default for LexiconStore {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Whether normalized ingredient text triggers an allergen definition
///
/// The allergen's exclusion phrases are removed first. The text matches if
/// it contains a keyword or the canonical name, or if it is at least
/// `min_reverse_match_len` characters long and occurs as whole words inside
/// a keyword.
#[must_use]
pub fn matches_allergen(
    definition: &AllergenDefinition,
    normalized: &str,
    matching: &MatchingConfig,
) -> bool {
    let text = definition
        .exclusions
        .iter()
        .fold(normalized.to_owned(), |acc, phrase| strip_phrase(&acc, phrase));
    let text = text.trim();
    if text.is_empty() {
        return false;
    }

    let canonical = definition.canonical_name.to_lowercase();
    if text.contains(canonical.as_str()) {
        return true;
    }

    let reverse_allowed = text.chars().count() >= matching.min_reverse_match_len;
    definition.keywords.iter().any(|keyword| {
        !keyword.is_empty()
            && (text.contains(keyword.as_str())
                || (reverse_allowed && contains_word(keyword, text)))
    })
}

/// Lowercase and trim
#[must_use]
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    terms
        .into_iter()
        .map(|t| normalize(&t))
        .filter(|t| !t.is_empty())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

/// Whether `needle` occurs in `haystack` bounded by non-word characters
#[must_use]
pub fn contains_word(haystack: &str, needle: &str) -> bool {
    !needle.is_empty()
        && haystack
            .match_indices(needle)
            .any(|(start, _)| at_word_boundaries(haystack, start, needle.len()))
}

fn at_word_boundaries(haystack: &str, start: usize, len: usize) -> bool {
    let before_ok = haystack[..start]
        .chars()
        .next_back()
        .is_none_or(|c| !is_word_char(c));
    let after_ok = haystack[start + len..]
        .chars()
        .next()
        .is_none_or(|c| !is_word_char(c));
    before_ok && after_ok
}

/// Replace whole-word occurrences of `phrase` with a space
fn strip_phrase(text: &str, phrase: &str) -> String {
    if phrase.is_empty() {
        return text.to_owned();
    }
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, _) in text.match_indices(phrase) {
        if start < cursor || !at_word_boundaries(text, start, phrase.len()) {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push(' ');
        cursor = start + phrase.len();
    }
    out.push_str(&text[cursor..]);
    out
}
