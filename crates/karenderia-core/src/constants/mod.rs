// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Lexicon versioning, trace-food defaults, label units, and analysis message text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large block. Tunable thresholds live in the engine configuration instead.

/// Lexicon metadata
pub mod lexicon {
    /// Version tag of the embedded lexicon tables
    pub const LEXICON_VERSION: &str = "2025.1";
}

/// Fallback nutrition estimate used when an ingredient is not in the lexicon.
///
/// A small "trace food" record rather than zeros, so unknown ingredients never
/// produce a misleading zero-calorie result.
pub mod trace_food {
    /// Calories per 100g
    pub const CALORIES: f64 = 20.0;
    /// Protein (g) per 100g
    pub const PROTEIN_G: f64 = 1.0;
    /// Carbohydrates (g) per 100g
    pub const CARBOHYDRATES_G: f64 = 4.0;
    /// Fat (g) per 100g
    pub const FAT_G: f64 = 0.1;
    /// Fiber (g) per 100g
    pub const FIBER_G: f64 = 0.5;
    /// Sugar (g) per 100g
    pub const SUGAR_G: f64 = 0.5;
    /// Sodium (mg) per 100g
    pub const SODIUM_MG: f64 = 5.0;
    /// Calcium (mg) per 100g
    pub const CALCIUM_MG: f64 = 10.0;
    /// Iron (mg) per 100g
    pub const IRON_MG: f64 = 0.2;
    /// Vitamin C (mg) per 100g
    pub const VITAMIN_C_MG: f64 = 1.0;
    /// Vitamin A (IU) per 100g
    pub const VITAMIN_A_IU: f64 = 50.0;
}

/// Unit suffixes used by the nutrition label formatter
pub mod label_units {
    /// Energy
    pub const KCAL: &str = "kcal";
    /// Grams
    pub const GRAMS: &str = "g";
    /// Milligrams
    pub const MILLIGRAMS: &str = "mg";
    /// International units
    pub const IU: &str = "IU";
}

/// Canonical allergen names shared by the lexicon and alternative suggestions
pub mod allergen_names {
    /// Peanuts
    pub const PEANUTS: &str = "Peanuts";
    /// Tree nuts
    pub const TREE_NUTS: &str = "Tree Nuts";
    /// Dairy
    pub const DAIRY: &str = "Dairy";
    /// Eggs
    pub const EGGS: &str = "Eggs";
    /// Fish
    pub const FISH: &str = "Fish";
    /// Shellfish
    pub const SHELLFISH: &str = "Shellfish";
    /// Soy
    pub const SOY: &str = "Soy";
    /// Wheat (gluten)
    pub const WHEAT: &str = "Wheat";
    /// Sesame
    pub const SESAME: &str = "Sesame";
}

/// Derived ingredient tags
pub mod tags {
    /// No dairy or egg allergen matched
    pub const VEGAN_FRIENDLY: &str = "vegan-friendly";
    /// No wheat/gluten allergen matched
    pub const GLUTEN_FREE: &str = "gluten-free";
    /// At least one matched allergen defaults to severe
    pub const HIGH_ALLERGEN_RISK: &str = "high-allergen-risk";
    /// Ingredient classified as a vegetable
    pub const PLANT_BASED: &str = "plant-based";
    /// Ingredient classified as a protein source
    pub const PROTEIN_RICH: &str = "protein-rich";
}

/// Recommendation text produced by the dish analyzer
pub mod recommendations {
    /// Protein below threshold
    pub const ADD_PROTEIN: &str =
        "Add a protein source such as chicken, fish, tokwa (tofu), or eggs";
    /// Fiber below threshold
    pub const ADD_FIBER: &str = "Add vegetables or whole grains for more fiber";
    /// Sodium above threshold
    pub const REDUCE_SODIUM: &str = "Reduce salt, soy sauce, patis, or bagoong to lower sodium";
    /// Vitamin C below threshold
    pub const ADD_VITAMIN_C: &str =
        "Add vitamin C-rich vegetables like malunggay, tomatoes, or calamansi";
    /// No vegetable ingredient present
    pub const ADD_VEGETABLES: &str = "Add vegetables such as kangkong, pechay, or sitaw";
}

/// Fixed substitution suggestions keyed by allergen group
pub mod alternatives {
    /// Dairy substitute
    pub const DAIRY: &str = "Use plant-based milk such as coconut, soy, or oat milk";
    /// Egg substitute
    pub const EGGS: &str = "Use an egg substitute such as flaxseed or mashed banana";
    /// Fish/shellfish substitute
    pub const SEAFOOD: &str = "Choose a meat-based or vegetarian dish instead of seafood";
    /// Peanut/tree-nut substitute
    pub const NUTS: &str = "Ask for nut-free preparation or skip nut-based sauces";
    /// Soy substitute
    pub const SOY: &str = "Use coconut aminos or a soy-free seasoning";
    /// Wheat substitute
    pub const WHEAT: &str = "Choose rice-based or gluten-free alternatives";
}
