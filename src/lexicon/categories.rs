// ABOUTME: Built-in ingredient category keyword groups
// ABOUTME: Protein, carbohydrate, vegetable, fat, and seasoning terms in English and Filipino
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use super::CategoryGroup;
use karenderia_core::models::IngredientCategory;

const PROTEIN: &[&str] = &[
    "chicken", "manok", "pork", "baboy", "liempo", "beef", "baka", "oxtail", "meat", "karne",
    "fish", "isda", "bangus", "milkfish", "tilapia", "tuna", "sardines", "galunggong", "tuyo",
    "daing", "dilis", "shrimp", "hipon", "sugpo", "squid", "pusit", "crab", "alimango", "mussels",
    "tahong", "egg", "eggs", "itlog", "tofu", "tokwa", "mung beans", "monggo", "peanut", "peanuts",
    "mani", "longganisa", "tocino", "chicharon", "liver", "atay", "tripe", "tuwalya",
];

const CARBOHYDRATE: &[&str] = &[
    "rice", "kanin", "sinangag", "noodles", "pancit", "bihon", "sotanghon", "miki", "canton",
    "bread", "pandesal", "tinapay", "flour", "harina", "potato", "potatoes", "patatas",
    "sweet potato", "kamote", "taro", "gabi", "corn", "mais", "pasta", "spaghetti", "macaroni",
    "sugar", "asukal", "saba",
];

const VEGETABLE: &[&str] = &[
    "eggplant", "talong", "string beans", "sitaw", "green beans", "kangkong", "water spinach",
    "pechay", "petsay", "bok choy", "malunggay", "moringa", "tomato", "tomatoes", "kamatis",
    "onion", "onions", "sibuyas", "cabbage", "repolyo", "carrot", "carrots", "squash", "kalabasa",
    "ampalaya", "bitter melon", "okra", "radish", "labanos", "spinach", "lettuce", "bell pepper",
    "sayote", "upo", "banana blossom", "puso ng saging", "bamboo shoots", "labong",
    "bean sprouts", "togue", "mushroom", "mushrooms",
];

const FAT: &[&str] = &[
    "oil", "cooking oil", "mantika", "butter", "mantikilya", "margarine", "lard", "coconut milk",
    "gata", "coconut cream", "mayonnaise",
];

const SEASONING: &[&str] = &[
    "salt", "asin", "pepper", "paminta", "soy sauce", "toyo", "fish sauce", "patis", "vinegar",
    "suka", "garlic", "bawang", "ginger", "luya", "bay leaves", "laurel", "bagoong", "calamansi",
    "tamarind", "sampalok", "sauce", "oyster sauce", "ketchup", "chili", "sili", "lemongrass",
    "tanglad", "annatto", "atsuete", "msg", "vetsin",
];

/// Build the embedded category groups in classification priority order
pub(crate) fn builtin_categories() -> Vec<CategoryGroup> {
    let group = |category, keywords: &[&str]| CategoryGroup {
        category,
        keywords: keywords.iter().map(|k| (*k).to_owned()).collect(),
    };

    vec![
        group(IngredientCategory::Protein, PROTEIN),
        group(IngredientCategory::Carbohydrate, CARBOHYDRATE),
        group(IngredientCategory::Vegetable, VEGETABLE),
        group(IngredientCategory::Fat, FAT),
        group(IngredientCategory::Seasoning, SEASONING),
    ]
}
