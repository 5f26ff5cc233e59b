// ABOUTME: Substitute suggestions for the allergens found in an ingredient list
// ABOUTME: Keys each detected allergen to the alternatives listed in its lexicon definition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use crate::config::MatchingConfig;
use crate::lexicon::LexiconStore;
use std::collections::BTreeMap;

/// Map of detected allergen canonical name to its suggested alternatives
///
/// Only allergens present in at least one ingredient appear; an allergen
/// whose definition lists no alternatives maps to an empty list.
#[must_use]
pub fn allergen_alternatives<S: AsRef<str>>(
    lexicon: &LexiconStore,
    matching: &MatchingConfig,
    ingredients: &[S],
) -> BTreeMap<String, Vec<String>> {
    let mut found = BTreeMap::new();
    for ingredient in ingredients {
        for definition in lexicon.lookup_allergens(ingredient.as_ref(), matching) {
            found
                .entry(definition.canonical_name.clone())
                .or_insert_with(|| definition.alternatives.clone());
        }
    }
    found
}
