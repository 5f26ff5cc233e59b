// ABOUTME: Built-in allergen table with English and Filipino keyword sets
// ABOUTME: Nine canonical allergens with default severities, false-positive exclusions, and substitutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use karenderia_core::constants::allergen_names;
use karenderia_core::models::{AllergenDefinition, Severity};

/// Compile-time seed for one allergen definition
struct AllergenSeed {
    name: &'static str,
    severity: Severity,
    keywords: &'static [&'static str],
    exclusions: &'static [&'static str],
    alternatives: &'static [&'static str],
}

impl AllergenSeed {
    const fn new(name: &'static str, severity: Severity) -> Self {
        Self {
            name,
            severity,
            keywords: &[],
            exclusions: &[],
            alternatives: &[],
        }
    }

    const fn keywords(mut self, keywords: &'static [&'static str]) -> Self {
        self.keywords = keywords;
        self
    }

    const fn exclusions(mut self, exclusions: &'static [&'static str]) -> Self {
        self.exclusions = exclusions;
        self
    }

    const fn alternatives(mut self, alternatives: &'static [&'static str]) -> Self {
        self.alternatives = alternatives;
        self
    }

    fn to_definition(&self) -> AllergenDefinition {
        let owned = |items: &[&str]| -> Vec<String> { items.iter().map(|s| (*s).to_owned()).collect() };
        AllergenDefinition {
            canonical_name: self.name.to_owned(),
            severity_default: self.severity,
            keywords: owned(self.keywords),
            exclusions: owned(self.exclusions),
            alternatives: owned(self.alternatives),
        }
    }
}

/// Keyword sets merge the English terms with Filipino market and dish names.
/// Order is significant: it is the order allergens are reported in.
const ALLERGEN_SEEDS: &[AllergenSeed] = &[
    AllergenSeed::new(allergen_names::PEANUTS, Severity::Severe)
        .keywords(&[
            "peanut",
            "peanuts",
            "groundnut",
            "peanut sauce",
            "peanut oil",
            "mani",
            "kare-kare",
            "kare kare",
        ])
        .exclusions(&["manila", "manicotti"])
        .alternatives(&[
            "Toasted pumpkin seeds",
            "Sunflower seed butter",
            "Toasted rice powder (for kare-kare sauce)",
        ]),
    AllergenSeed::new(allergen_names::TREE_NUTS, Severity::Severe)
        .keywords(&[
            "almond",
            "almonds",
            "cashew",
            "cashews",
            "walnut",
            "pecan",
            "hazelnut",
            "macadamia",
            "pistachio",
            "brazil nut",
            "tree nut",
            "kasoy",
            "pili",
            "pili nut",
        ])
        .exclusions(&["pilipino", "pilit"])
        .alternatives(&["Toasted coconut flakes", "Roasted seeds", "Crispy garlic"]),
    AllergenSeed::new(allergen_names::DAIRY, Severity::Moderate)
        .keywords(&[
            "milk",
            "cheese",
            "butter",
            "cream",
            "yogurt",
            "whey",
            "casein",
            "ghee",
            "evaporated milk",
            "condensed milk",
            "gatas",
            "keso",
            "kesong puti",
            "leche",
            "mantikilya",
        ])
        .exclusions(&[
            "peanut butter",
            "cocoa butter",
            "butternut",
            "coconut milk",
            "coconut cream",
            "soy milk",
            "almond milk",
            "oat milk",
            "milkfish",
        ])
        .alternatives(&["Coconut milk (gata)", "Soy milk", "Dairy-free margarine"]),
    AllergenSeed::new(allergen_names::EGGS, Severity::Moderate)
        .keywords(&[
            "egg",
            "eggs",
            "egg white",
            "egg yolk",
            "mayonnaise",
            "mayo",
            "meringue",
            "itlog",
            "balut",
            "penoy",
            "leche flan",
            "kwek-kwek",
        ])
        .exclusions(&["eggplant"])
        .alternatives(&["Mashed banana", "Flaxseed egg", "Tokwa scramble"]),
    AllergenSeed::new(allergen_names::FISH, Severity::Moderate)
        .keywords(&[
            "fish",
            "fish sauce",
            "dried fish",
            "anchovy",
            "anchovies",
            "tuna",
            "salmon",
            "sardines",
            "mackerel",
            "milkfish",
            "patis",
            "bagoong",
            "tuyo",
            "daing",
            "tinapa",
            "bangus",
            "tilapia",
            "dilis",
            "galunggong",
            "lapu-lapu",
        ])
        .exclusions(&["shellfish"])
        .alternatives(&["Chicken", "Pork", "Salt or soy-free seasoning instead of patis"]),
    AllergenSeed::new(allergen_names::SHELLFISH, Severity::Severe)
        .keywords(&[
            "shellfish",
            "shrimp",
            "prawn",
            "prawns",
            "crab",
            "lobster",
            "squid",
            "calamari",
            "clam",
            "clams",
            "mussel",
            "mussels",
            "oyster",
            "scallop",
            "shrimp paste",
            "hipon",
            "alamang",
            "bagoong alamang",
            "alimango",
            "alimasag",
            "pusit",
            "tahong",
            "talaba",
            "sugpo",
            "halaan",
            "tulya",
        ])
        .alternatives(&["Chicken", "Tokwa (tofu)", "Mushrooms"]),
    AllergenSeed::new(allergen_names::SOY, Severity::Mild)
        .keywords(&[
            "soy",
            "soya",
            "soybean",
            "soy sauce",
            "soy milk",
            "tofu",
            "tempeh",
            "miso",
            "edamame",
            "toyo",
            "tokwa",
            "taho",
            "tausi",
        ])
        .alternatives(&["Coconut aminos", "Salt and calamansi", "Patis (if fish is tolerated)"]),
    AllergenSeed::new(allergen_names::WHEAT, Severity::Moderate)
        .keywords(&[
            "wheat",
            "flour",
            "gluten",
            "bread",
            "breadcrumbs",
            "pasta",
            "spaghetti",
            "macaroni",
            "noodles",
            "soy sauce",
            "harina",
            "pandesal",
            "miki",
            "pancit canton",
            "lumpia wrapper",
            "siopao",
        ])
        .exclusions(&["buckwheat", "rice noodles", "rice flour"])
        .alternatives(&["Rice", "Bihon (rice noodles)", "Rice flour"]),
    AllergenSeed::new(allergen_names::SESAME, Severity::Moderate)
        .keywords(&["sesame", "sesame oil", "sesame seeds", "tahini", "linga"])
        .alternatives(&["Toasted garlic", "Sunflower seeds"]),
];

/// Build the embedded allergen table
pub(crate) fn builtin_allergens() -> Vec<AllergenDefinition> {
    ALLERGEN_SEEDS.iter().map(AllergenSeed::to_definition).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_are_unique() {
        let table = builtin_allergens();
        for (i, a) in table.iter().enumerate() {
            assert!(!a.keywords.is_empty(), "{} has no keywords", a.canonical_name);
            assert!(
                table[i + 1..]
                    .iter()
                    .all(|b| !b.canonical_name.eq_ignore_ascii_case(&a.canonical_name)),
                "duplicate allergen {}",
                a.canonical_name
            );
        }
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for allergen in builtin_allergens() {
            for keyword in &allergen.keywords {
                assert_eq!(keyword, &keyword.to_lowercase());
            }
        }
    }
}
