// ABOUTME: Built-in per-100g nutrition table for common karenderia ingredients
// ABOUTME: Ordered entries with English keys and Filipino aliases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Karenderia Engine Contributors

use super::NutritionEntry;
use karenderia_core::models::NutritionRecord;

/// Compile-time seed for one nutrition entry
struct NutritionSeed {
    key: &'static str,
    aliases: &'static [&'static str],
    record: NutritionRecord,
}

impl NutritionSeed {
    const fn new(key: &'static str, record: NutritionRecord) -> Self {
        Self {
            key,
            aliases: &[],
            record,
        }
    }

    const fn with_aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }
}

/// Shorthand for the macro-only constructor
const fn m(calories: f64, protein: f64, carbohydrates: f64, fat: f64) -> NutritionRecord {
    NutritionRecord::macros(calories, protein, carbohydrates, fat)
}

/// Approximate per-100g values (raw weight unless noted). Partial matches
/// take the first hit in this order, so specific phrases precede the
/// generic words they contain.
const NUTRITION_SEEDS: &[NutritionSeed] = &[
    // === Proteins ===
    NutritionSeed::new(
        "chicken",
        m(239.0, 27.0, 0.0, 14.0)
            .with_minerals(82.0, 15.0, 1.3)
            .with_vitamins(0.0, 161.0),
    )
    .with_aliases(&["manok", "chicken thigh", "chicken breast"]),
    NutritionSeed::new(
        "pork belly",
        m(518.0, 9.3, 0.0, 53.0)
            .with_minerals(32.0, 5.0, 0.5)
            .with_vitamins(0.3, 10.0),
    )
    .with_aliases(&["liempo"]),
    NutritionSeed::new(
        "pork",
        m(242.0, 27.0, 0.0, 14.0)
            .with_minerals(62.0, 19.0, 0.9)
            .with_vitamins(0.6, 7.0),
    )
    .with_aliases(&["baboy", "kasim", "pork shoulder"]),
    NutritionSeed::new(
        "oxtail",
        m(262.0, 30.0, 0.0, 14.0)
            .with_minerals(75.0, 12.0, 2.4)
            .with_vitamins(0.0, 0.0),
    )
    .with_aliases(&["buntot ng baka"]),
    NutritionSeed::new(
        "beef",
        m(250.0, 26.0, 0.0, 15.0)
            .with_minerals(72.0, 18.0, 2.6)
            .with_vitamins(0.0, 0.0),
    )
    .with_aliases(&["baka"]),
    NutritionSeed::new(
        "milkfish",
        m(190.0, 20.5, 0.0, 6.7)
            .with_minerals(72.0, 51.0, 0.3)
            .with_vitamins(0.0, 100.0),
    )
    .with_aliases(&["bangus"]),
    NutritionSeed::new(
        "tilapia",
        m(96.0, 20.0, 0.0, 1.7)
            .with_minerals(52.0, 10.0, 0.6)
            .with_vitamins(0.0, 0.0),
    ),
    NutritionSeed::new(
        "dried fish",
        m(290.0, 62.0, 0.0, 3.5)
            .with_minerals(3600.0, 1500.0, 4.8)
            .with_vitamins(0.0, 50.0),
    )
    .with_aliases(&["tuyo", "daing", "dilis"]),
    NutritionSeed::new(
        "fish sauce",
        m(35.0, 5.1, 3.6, 0.0)
            .with_fiber_sugar(0.0, 3.6)
            .with_minerals(7850.0, 43.0, 0.8),
    )
    .with_aliases(&["patis"]),
    NutritionSeed::new(
        "fish",
        m(128.0, 26.0, 0.0, 2.7)
            .with_minerals(60.0, 20.0, 0.5)
            .with_vitamins(0.0, 40.0),
    )
    .with_aliases(&["isda", "galunggong", "lapu-lapu"]),
    NutritionSeed::new(
        "shrimp paste",
        m(100.0, 16.0, 3.0, 1.5)
            .with_minerals(7000.0, 900.0, 3.0),
    )
    .with_aliases(&["bagoong", "bagoong alamang", "alamang"]),
    NutritionSeed::new(
        "shrimp",
        m(99.0, 24.0, 0.2, 0.3)
            .with_minerals(111.0, 70.0, 0.5)
            .with_vitamins(0.0, 0.0),
    )
    .with_aliases(&["hipon", "sugpo", "prawn", "prawns"]),
    NutritionSeed::new(
        "squid",
        m(92.0, 15.6, 3.1, 1.4)
            .with_minerals(44.0, 32.0, 0.7)
            .with_vitamins(4.7, 33.0),
    )
    .with_aliases(&["pusit", "calamari"]),
    NutritionSeed::new(
        "mussels",
        m(86.0, 11.9, 3.7, 2.2)
            .with_minerals(286.0, 26.0, 4.0)
            .with_vitamins(8.0, 160.0),
    )
    .with_aliases(&["tahong"]),
    NutritionSeed::new(
        "egg",
        m(155.0, 13.0, 1.1, 11.0)
            .with_fiber_sugar(0.0, 1.1)
            .with_minerals(124.0, 50.0, 1.2)
            .with_vitamins(0.0, 520.0),
    )
    .with_aliases(&["eggs", "itlog", "boiled egg"]),
    NutritionSeed::new(
        "tofu",
        m(76.0, 8.0, 1.9, 4.8)
            .with_fiber_sugar(0.3, 0.6)
            .with_minerals(7.0, 350.0, 5.4)
            .with_vitamins(0.1, 85.0),
    )
    .with_aliases(&["tokwa"]),
    NutritionSeed::new(
        "mung beans",
        m(105.0, 7.0, 19.0, 0.4)
            .with_fiber_sugar(7.6, 2.0)
            .with_minerals(2.0, 27.0, 1.4)
            .with_vitamins(1.0, 24.0),
    )
    .with_aliases(&["monggo", "munggo"]),
    NutritionSeed::new(
        "peanut sauce",
        m(300.0, 11.0, 15.0, 23.0)
            .with_fiber_sugar(3.0, 8.0)
            .with_minerals(600.0, 40.0, 1.5)
            .with_vitamins(0.5, 10.0),
    )
    .with_aliases(&["kare-kare sauce"]),
    NutritionSeed::new(
        "peanuts",
        m(567.0, 26.0, 16.0, 49.0)
            .with_fiber_sugar(8.5, 4.7)
            .with_minerals(18.0, 92.0, 4.6)
            .with_vitamins(0.0, 0.0),
    )
    .with_aliases(&["peanut", "mani"]),
    // === Carbohydrates ===
    NutritionSeed::new(
        "rice",
        m(130.0, 2.7, 28.0, 0.3)
            .with_fiber_sugar(0.4, 0.1)
            .with_minerals(1.0, 10.0, 0.2),
    )
    .with_aliases(&["kanin", "steamed rice", "sinangag"]),
    NutritionSeed::new(
        "rice noodles",
        m(109.0, 0.9, 25.0, 0.2)
            .with_fiber_sugar(1.0, 0.1)
            .with_minerals(19.0, 4.0, 0.1),
    )
    .with_aliases(&["bihon", "sotanghon"]),
    NutritionSeed::new(
        "egg noodles",
        m(138.0, 4.5, 25.0, 2.1)
            .with_fiber_sugar(1.2, 0.4)
            .with_minerals(5.0, 12.0, 0.6),
    )
    .with_aliases(&["miki", "pancit canton", "canton"]),
    NutritionSeed::new(
        "bread",
        m(265.0, 9.0, 49.0, 3.2)
            .with_fiber_sugar(2.7, 5.0)
            .with_minerals(491.0, 260.0, 3.6),
    )
    .with_aliases(&["pandesal", "tinapay"]),
    NutritionSeed::new(
        "flour",
        m(364.0, 10.0, 76.0, 1.0)
            .with_fiber_sugar(2.7, 0.3)
            .with_minerals(2.0, 15.0, 4.6),
    )
    .with_aliases(&["harina", "all-purpose flour"]),
    NutritionSeed::new(
        "sweet potato",
        m(86.0, 1.6, 20.0, 0.1)
            .with_fiber_sugar(3.0, 4.2)
            .with_minerals(55.0, 30.0, 0.6)
            .with_vitamins(2.4, 14187.0),
    )
    .with_aliases(&["kamote"]),
    NutritionSeed::new(
        "potato",
        m(77.0, 2.0, 17.0, 0.1)
            .with_fiber_sugar(2.2, 0.8)
            .with_minerals(6.0, 12.0, 0.8)
            .with_vitamins(19.7, 2.0),
    )
    .with_aliases(&["potatoes", "patatas"]),
    NutritionSeed::new(
        "taro",
        m(112.0, 1.5, 26.0, 0.2)
            .with_fiber_sugar(4.1, 0.4)
            .with_minerals(11.0, 43.0, 0.6)
            .with_vitamins(4.5, 76.0),
    )
    .with_aliases(&["gabi"]),
    NutritionSeed::new(
        "sugar",
        m(387.0, 0.0, 100.0, 0.0).with_fiber_sugar(0.0, 100.0),
    )
    .with_aliases(&["asukal", "brown sugar"]),
    // === Vegetables ===
    NutritionSeed::new(
        "eggplant",
        m(25.0, 1.0, 6.0, 0.2)
            .with_fiber_sugar(3.0, 3.5)
            .with_minerals(2.0, 9.0, 0.2)
            .with_vitamins(2.2, 23.0),
    )
    .with_aliases(&["talong", "aubergine"]),
    NutritionSeed::new(
        "string beans",
        m(47.0, 2.8, 8.4, 0.4)
            .with_fiber_sugar(3.6, 1.4)
            .with_minerals(4.0, 50.0, 0.5)
            .with_vitamins(18.8, 865.0),
    )
    .with_aliases(&["sitaw", "yardlong beans", "green beans"]),
    NutritionSeed::new(
        "water spinach",
        m(19.0, 2.6, 3.1, 0.2)
            .with_fiber_sugar(2.1, 0.0)
            .with_minerals(113.0, 77.0, 1.7)
            .with_vitamins(55.0, 6300.0),
    )
    .with_aliases(&["kangkong"]),
    NutritionSeed::new(
        "bok choy",
        m(13.0, 1.5, 2.2, 0.2)
            .with_fiber_sugar(1.0, 1.2)
            .with_minerals(65.0, 105.0, 0.8)
            .with_vitamins(45.0, 4468.0),
    )
    .with_aliases(&["pechay", "petsay"]),
    NutritionSeed::new(
        "moringa",
        m(64.0, 9.4, 8.3, 1.4)
            .with_fiber_sugar(2.0, 0.0)
            .with_minerals(9.0, 185.0, 4.0)
            .with_vitamins(51.7, 7564.0),
    )
    .with_aliases(&["malunggay", "moringa leaves"]),
    NutritionSeed::new(
        "tomato",
        m(18.0, 0.9, 3.9, 0.2)
            .with_fiber_sugar(1.2, 2.6)
            .with_minerals(5.0, 10.0, 0.3)
            .with_vitamins(13.7, 833.0),
    )
    .with_aliases(&["tomatoes", "kamatis"]),
    NutritionSeed::new(
        "onion",
        m(40.0, 1.1, 9.3, 0.1)
            .with_fiber_sugar(1.7, 4.2)
            .with_minerals(4.0, 23.0, 0.2)
            .with_vitamins(7.4, 2.0),
    )
    .with_aliases(&["onions", "sibuyas", "shallots"]),
    NutritionSeed::new(
        "cabbage",
        m(25.0, 1.3, 5.8, 0.1)
            .with_fiber_sugar(2.5, 3.2)
            .with_minerals(18.0, 40.0, 0.5)
            .with_vitamins(36.6, 98.0),
    )
    .with_aliases(&["repolyo"]),
    NutritionSeed::new(
        "carrot",
        m(41.0, 0.9, 9.6, 0.2)
            .with_fiber_sugar(2.8, 4.7)
            .with_minerals(69.0, 33.0, 0.3)
            .with_vitamins(5.9, 16706.0),
    )
    .with_aliases(&["carrots", "karot"]),
    NutritionSeed::new(
        "squash",
        m(45.0, 1.0, 12.0, 0.1)
            .with_fiber_sugar(2.0, 2.2)
            .with_minerals(4.0, 48.0, 0.7)
            .with_vitamins(21.0, 10630.0),
    )
    .with_aliases(&["kalabasa", "pumpkin"]),
    NutritionSeed::new(
        "bitter melon",
        m(17.0, 1.0, 3.7, 0.2)
            .with_fiber_sugar(2.8, 0.0)
            .with_minerals(5.0, 19.0, 0.4)
            .with_vitamins(84.0, 471.0),
    )
    .with_aliases(&["ampalaya", "bitter gourd"]),
    NutritionSeed::new(
        "okra",
        m(33.0, 1.9, 7.5, 0.2)
            .with_fiber_sugar(3.2, 1.5)
            .with_minerals(7.0, 82.0, 0.6)
            .with_vitamins(23.0, 716.0),
    ),
    NutritionSeed::new(
        "radish",
        m(18.0, 0.6, 4.1, 0.1)
            .with_fiber_sugar(1.6, 2.5)
            .with_minerals(21.0, 27.0, 0.4)
            .with_vitamins(22.0, 0.0),
    )
    .with_aliases(&["labanos", "daikon"]),
    NutritionSeed::new(
        "banana blossom",
        m(51.0, 1.6, 9.9, 0.6)
            .with_fiber_sugar(5.7, 0.0)
            .with_minerals(13.0, 56.0, 56.4)
            .with_vitamins(1.0, 0.0),
    )
    .with_aliases(&["puso ng saging"]),
    // === Fruits and souring agents ===
    NutritionSeed::new(
        "tamarind",
        m(239.0, 2.8, 62.5, 0.6)
            .with_fiber_sugar(5.1, 57.4)
            .with_minerals(28.0, 74.0, 2.8)
            .with_vitamins(3.5, 30.0),
    )
    .with_aliases(&["sampalok", "sampaloc"]),
    NutritionSeed::new(
        "calamansi",
        m(37.0, 0.8, 9.0, 0.2)
            .with_fiber_sugar(2.8, 1.7)
            .with_minerals(2.0, 33.0, 0.3)
            .with_vitamins(37.0, 79.0),
    )
    .with_aliases(&["kalamansi", "calamondin"]),
    NutritionSeed::new(
        "banana",
        m(89.0, 1.1, 23.0, 0.3)
            .with_fiber_sugar(2.6, 12.0)
            .with_minerals(1.0, 5.0, 0.3)
            .with_vitamins(8.7, 64.0),
    )
    .with_aliases(&["saging", "saba"]),
    // === Fats ===
    NutritionSeed::new(
        "coconut milk",
        m(230.0, 2.3, 6.0, 24.0)
            .with_fiber_sugar(2.2, 3.3)
            .with_minerals(15.0, 16.0, 1.6)
            .with_vitamins(2.8, 0.0),
    )
    .with_aliases(&["gata", "coconut cream", "kakang gata"]),
    NutritionSeed::new("cooking oil", m(884.0, 0.0, 0.0, 100.0))
        .with_aliases(&["oil", "vegetable oil", "mantika", "canola oil"]),
    NutritionSeed::new(
        "butter",
        m(717.0, 0.9, 0.1, 81.0)
            .with_minerals(11.0, 24.0, 0.0)
            .with_vitamins(0.0, 2499.0),
    )
    .with_aliases(&["mantikilya"]),
    // === Dairy ===
    NutritionSeed::new(
        "evaporated milk",
        m(134.0, 6.8, 10.0, 7.6)
            .with_fiber_sugar(0.0, 10.0)
            .with_minerals(106.0, 261.0, 0.2)
            .with_vitamins(1.9, 397.0),
    ),
    NutritionSeed::new(
        "milk",
        m(61.0, 3.2, 4.8, 3.3)
            .with_fiber_sugar(0.0, 5.1)
            .with_minerals(43.0, 113.0, 0.0)
            .with_vitamins(0.0, 162.0),
    )
    .with_aliases(&["gatas", "fresh milk"]),
    NutritionSeed::new(
        "cheese",
        m(402.0, 25.0, 1.3, 33.0)
            .with_fiber_sugar(0.0, 0.5)
            .with_minerals(621.0, 721.0, 0.7)
            .with_vitamins(0.0, 1242.0),
    )
    .with_aliases(&["keso", "kesong puti"]),
    // === Seasonings ===
    NutritionSeed::new(
        "soy sauce",
        m(53.0, 8.1, 4.9, 0.6)
            .with_fiber_sugar(0.8, 0.4)
            .with_minerals(5493.0, 33.0, 1.5),
    )
    .with_aliases(&["toyo"]),
    NutritionSeed::new(
        "vinegar",
        m(18.0, 0.0, 0.04, 0.0).with_minerals(2.0, 6.0, 0.0),
    )
    .with_aliases(&["suka", "cane vinegar", "sukang iloko"]),
    NutritionSeed::new(
        "garlic",
        m(149.0, 6.4, 33.0, 0.5)
            .with_fiber_sugar(2.1, 1.0)
            .with_minerals(17.0, 181.0, 1.7)
            .with_vitamins(31.2, 9.0),
    )
    .with_aliases(&["bawang"]),
    NutritionSeed::new(
        "ginger",
        m(80.0, 1.8, 18.0, 0.8)
            .with_fiber_sugar(2.0, 1.7)
            .with_minerals(13.0, 16.0, 0.6)
            .with_vitamins(5.0, 0.0),
    )
    .with_aliases(&["luya"]),
    NutritionSeed::new(
        "bay leaves",
        m(313.0, 7.6, 75.0, 8.4)
            .with_fiber_sugar(26.3, 0.0)
            .with_minerals(23.0, 834.0, 43.0)
            .with_vitamins(46.5, 6185.0),
    )
    .with_aliases(&["laurel", "bay leaf"]),
    NutritionSeed::new(
        "black pepper",
        m(251.0, 10.4, 64.0, 3.3)
            .with_fiber_sugar(25.3, 0.6)
            .with_minerals(20.0, 443.0, 9.7)
            .with_vitamins(0.0, 547.0),
    )
    .with_aliases(&["pepper", "paminta", "peppercorns"]),
    NutritionSeed::new(
        "salt",
        m(0.0, 0.0, 0.0, 0.0).with_minerals(38758.0, 24.0, 0.3),
    )
    .with_aliases(&["asin", "rock salt"]),
];

/// Build the embedded nutrition table
pub(crate) fn builtin_nutrition() -> Vec<NutritionEntry> {
    NUTRITION_SEEDS
        .iter()
        .map(|seed| NutritionEntry {
            key: seed.key.to_owned(),
            aliases: seed.aliases.iter().map(|a| (*a).to_owned()).collect(),
            nutrition: seed.record,
        })
        .collect()
}
