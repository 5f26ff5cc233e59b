// ABOUTME: Allergen models for lexicon definitions and user allergen profiles
// ABOUTME: Severity, RiskLevel, AllergenDefinition, and UserAllergenEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of an allergic reaction as declared by a user or a lexicon default
///
/// Parsing is lossy: any value other than mild/moderate/severe becomes
/// `Unrecognized` instead of failing, so a malformed profile never blocks
/// analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum Severity {
    /// Value outside the known tiers
    Unrecognized,
    /// Mild reaction
    Mild,
    /// Moderate reaction
    Moderate,
    /// Severe reaction (anaphylaxis risk)
    Severe,
}

impl Severity {
    /// Parse severity from string, mapping unknown values to `Unrecognized`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "mild" => Self::Mild,
            "moderate" => Self::Moderate,
            "severe" => Self::Severe,
            _ => Self::Unrecognized,
        }
    }

    /// Wire name of this severity
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unrecognized => "unrecognized",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }

    /// Risk level a single warning of this severity implies
    #[must_use]
    pub const fn risk_level(&self) -> RiskLevel {
        match self {
            Self::Severe => RiskLevel::High,
            Self::Moderate => RiskLevel::Medium,
            Self::Mild | Self::Unrecognized => RiskLevel::Low,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

impl From<Severity> for &'static str {
    fn from(value: Severity) -> Self {
        value.as_str()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate risk classification for a dish evaluated against a profile
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No warnings, or only mild ones
    #[default]
    Low,
    /// At least one moderate warning
    Medium,
    /// At least one severe warning
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Lexicon entry describing one allergen and every term that signals it
///
/// `keywords` is the union of English terms and Filipino/bilingual terms.
/// Keyword sets of different definitions may overlap; a single ingredient can
/// be attributed to several allergens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenDefinition {
    /// Unique display name (e.g. "Peanuts")
    pub canonical_name: String,
    /// Severity used when building a new profile entry from the catalog
    pub severity_default: Severity,
    /// Lowercase match terms
    pub keywords: Vec<String>,
    /// Phrases removed from ingredient text before keyword matching
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclusions: Vec<String>,
    /// Suggested substitutes, in preference order
    #[serde(default)]
    pub alternatives: Vec<String>,
}

impl AllergenDefinition {
    /// Case-insensitive comparison against the canonical name
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.canonical_name.eq_ignore_ascii_case(name.trim())
    }

    /// Case-insensitive exact comparison against any keyword
    #[must_use]
    pub fn has_keyword(&self, term: &str) -> bool {
        let term = term.trim();
        self.keywords.iter().any(|k| k.eq_ignore_ascii_case(term))
    }
}

/// One allergen declared in a user's profile
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserAllergenEntry {
    /// Allergen name, matched against canonical names then keywords
    pub name: String,
    /// User-declared severity; always wins over the lexicon default
    pub severity: Severity,
}

impl UserAllergenEntry {
    /// Create an entry with an explicit severity
    #[must_use]
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }

    /// Create an entry from a catalog pick, seeded with the lexicon default severity
    #[must_use]
    pub fn from_definition(definition: &AllergenDefinition) -> Self {
        Self {
            name: definition.canonical_name.clone(),
            severity: definition.severity_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parsing_is_lossy() {
        assert_eq!(Severity::from_str_lossy("SEVERE"), Severity::Severe);
        assert_eq!(Severity::from_str_lossy(" mild "), Severity::Mild);
        assert_eq!(
            Severity::from_str_lossy("life-threatening"),
            Severity::Unrecognized
        );
    }

    #[test]
    fn test_severity_deserializes_unknown_values() {
        let entry: UserAllergenEntry =
            serde_json::from_str(r#"{"name":"Peanuts","severity":"extreme"}"#).unwrap();
        assert_eq!(entry.severity, Severity::Unrecognized);

        let entry: UserAllergenEntry =
            serde_json::from_str(r#"{"name":"Fish","severity":"moderate"}"#).unwrap();
        assert_eq!(entry.severity, Severity::Moderate);
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"name":"Fish","severity":"moderate"}"#
        );
    }

    #[test]
    fn test_risk_level_ordering() {
        assert!(RiskLevel::High > RiskLevel::Medium);
        assert!(RiskLevel::Medium > RiskLevel::Low);
        assert_eq!(Severity::Unrecognized.risk_level(), RiskLevel::Low);
    }
}
