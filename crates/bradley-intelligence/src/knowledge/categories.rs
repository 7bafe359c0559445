// ABOUTME: Category nutrient profiles and substring patterns for fuzzy classification
// ABOUTME: Tokens missing from the exact table are matched here in fixed category order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use bradley_core::models::FoodCategory;

/// `(category, cholesterol mg, kcal, fat g, alternatives)` per 100 g
pub(super) type CategoryRow = (FoodCategory, f64, f64, f64, &'static [&'static str]);

pub(super) const CATEGORY_ROWS: &[CategoryRow] = &[
    (FoodCategory::Meat, 60.0, 200.0, 12.0, &["fish", "tofu", "legumes"]),
    (FoodCategory::Fish, 50.0, 150.0, 5.0, &["tofu", "legumes", "nuts"]),
    (FoodCategory::Dairy, 80.0, 250.0, 15.0, &["plant-based alternatives", "nuts", "seeds"]),
    (FoodCategory::Vegetable, 0.0, 30.0, 0.3, &["other vegetables", "fruits", "grains"]),
    (FoodCategory::Fruit, 0.0, 50.0, 0.2, &["other fruits", "vegetables", "nuts"]),
    (FoodCategory::Grain, 0.0, 120.0, 1.0, &["other grains", "legumes", "vegetables"]),
    (FoodCategory::Nut, 0.0, 600.0, 50.0, &["other nuts", "seeds", "legumes"]),
    (FoodCategory::Dessert, 20.0, 300.0, 15.0, &["fruit", "yogurt", "nuts"]),
    (FoodCategory::Beverage, 0.0, 50.0, 0.0, &["water", "tea", "herbal drinks"]),
];

/// Substring patterns for a category
///
/// A token matches when it contains a pattern or a pattern contains it.
#[must_use]
pub(super) const fn patterns_for(category: FoodCategory) -> &'static [&'static str] {
    match category {
        FoodCategory::Meat => MEAT_PATTERNS,
        FoodCategory::Fish => FISH_PATTERNS,
        FoodCategory::Dairy => DAIRY_PATTERNS,
        FoodCategory::Vegetable => VEGETABLE_PATTERNS,
        FoodCategory::Fruit => FRUIT_PATTERNS,
        FoodCategory::Grain => GRAIN_PATTERNS,
        FoodCategory::Nut => NUT_PATTERNS,
        FoodCategory::Dessert => DESSERT_PATTERNS,
        FoodCategory::Beverage => BEVERAGE_PATTERNS,
    }
}

const MEAT_PATTERNS: &[&str] = &[
    "steak", "chop", "roast", "loin", "tenderloin", "sirloin", "ribeye", "filet", "brisket",
    "shank", "shoulder", "belly", "leg", "wing", "drumstick", "breast", "thigh", "cutlet", "patty",
    "meatball", "sausage", "hot dog", "bacon", "ham", "pepperoni", "salami", "pastrami",
    "corned beef", "jerky", "deli meat", "cold cut",
];

const FISH_PATTERNS: &[&str] = &[
    "fish", "salmon", "tuna", "cod", "tilapia", "halibut", "mackerel", "sardine", "anchovy",
    "trout", "bass", "perch", "snapper", "grouper", "swordfish", "mahi mahi", "sea bass",
    "flounder", "sole", "catfish", "carp", "eel", "herring", "whitefish", "rockfish", "pollock",
    "whiting", "bluefish", "pike", "walleye",
];

const DAIRY_PATTERNS: &[&str] = &[
    "milk", "cheese", "yogurt", "cream", "butter", "sour cream", "cottage cheese", "ricotta",
    "feta", "parmesan", "provolone", "gouda", "brie", "camembert", "blue cheese", "cheddar",
    "mozzarella", "swiss", "american cheese", "cream cheese", "mascarpone", "quark", "kefir",
    "buttermilk", "half and half", "heavy cream", "whipping cream",
];

const VEGETABLE_PATTERNS: &[&str] = &[
    "vegetable", "broccoli", "cauliflower", "carrot", "celery", "cucumber", "lettuce", "spinach",
    "kale", "arugula", "watercress", "endive", "radicchio", "bok choy", "cabbage",
    "brussels sprout", "asparagus", "green bean", "pea", "corn", "bell pepper", "jalapeno",
    "habanero", "chili pepper", "onion", "garlic", "shallot", "leek", "scallion", "chive",
    "mushroom", "eggplant", "zucchini", "squash", "pumpkin", "butternut squash", "acorn squash",
    "spaghetti squash", "tomato", "potato", "sweet potato", "yam", "turnip", "rutabaga", "parsnip",
    "beet", "radish", "daikon", "jicama", "kohlrabi", "fennel", "artichoke", "okra", "bamboo shoot",
    "water chestnut", "lotus root", "taro", "cassava", "plantain",
];

const FRUIT_PATTERNS: &[&str] = &[
    "fruit", "apple", "banana", "orange", "grape", "strawberry", "blueberry", "raspberry",
    "blackberry", "cranberry", "cherry", "peach", "nectarine", "apricot", "plum", "prune", "pear",
    "pineapple", "mango", "papaya", "kiwi", "guava", "lychee", "longan", "rambutan", "durian",
    "jackfruit", "breadfruit", "fig", "date", "raisin", "currant", "gooseberry", "elderberry",
    "mulberry", "boysenberry", "loganberry", "tayberry", "olive", "avocado", "coconut",
    "pomegranate", "persimmon", "quince", "medlar", "loquat", "kumquat", "calamondin", "yuzu",
    "buddha hand", "citron", "lime", "lemon", "grapefruit", "tangerine", "clementine", "mandarin",
    "satsuma", "ugli fruit", "tangelo", "minneola", "oroblanco", "melogold", "pomelo", "shaddock",
];

const GRAIN_PATTERNS: &[&str] = &[
    "grain", "rice", "wheat", "oats", "barley", "rye", "corn", "millet", "sorghum", "quinoa",
    "amaranth", "buckwheat", "teff", "spelt", "kamut", "farro", "freekeh", "bulgur", "couscous",
    "polenta", "grits", "bread", "pasta", "noodle", "cereal", "oatmeal", "porridge", "muesli",
    "granola", "cracker", "pretzel", "tortilla", "pita", "naan", "flatbread", "matzo", "challah",
    "brioche", "croissant", "bagel", "muffin", "biscuit", "scone", "pancake", "waffle", "crepe",
    "dumpling", "ravioli", "lasagna", "macaroni", "spaghetti", "fettuccine", "linguine", "penne",
    "rigatoni", "fusilli", "rotini", "ziti", "manicotti", "cannelloni", "tortellini", "gnocchi",
    "orzo", "risotto",
];

const NUT_PATTERNS: &[&str] = &[
    "nut", "almond", "walnut", "cashew", "pistachio", "pecan", "hazelnut", "macadamia",
    "brazil nut", "pine nut", "chestnut", "peanut", "sunflower seed", "pumpkin seed", "sesame seed",
    "chia seed", "flaxseed", "hemp seed", "poppy seed", "caraway seed", "fennel seed", "cumin seed",
    "coriander seed", "mustard seed", "celery seed", "dill seed", "anise seed", "cardamom seed",
    "nutmeg", "mace", "allspice", "clove", "cinnamon", "ginger", "turmeric", "saffron", "vanilla",
    "cocoa", "chocolate",
];

const DESSERT_PATTERNS: &[&str] = &[
    "dessert", "cake", "cookie", "pie", "pastry", "donut", "muffin", "brownie", "fudge", "candy",
    "chocolate", "ice cream", "sorbet", "gelato", "pudding", "custard", "flan", "creme brulee",
    "tiramisu", "cheesecake", "trifle", "parfait", "sundae", "milkshake", "smoothie", "shake",
    "float", "soda", "pop", "cola", "lemonade", "juice", "nectar", "syrup", "honey", "jam", "jelly",
    "marmalade", "preserve", "compote", "chutney", "relish", "pickle",
];

// "drink" is left out: it is a filtered verb and would never reach this table
const BEVERAGE_PATTERNS: &[&str] = &[
    "beverage", "coffee", "espresso", "latte", "cappuccino", "mocha", "tea", "kombucha", "beer",
    "wine", "cocktail", "liquor", "whiskey", "vodka", "rum", "cider",
];
