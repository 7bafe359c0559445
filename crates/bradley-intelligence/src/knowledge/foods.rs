// ABOUTME: Built-in exact-match food profiles and default portion sizes
// ABOUTME: Per-100g cholesterol, calories, fat, and substitutes for common foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

//! Exact-match food table.
//!
//! Values are per 100 g. Multi-word entries never match a single token but
//! are still used when listing substitutes for a food.

/// `(name, cholesterol mg, kcal, fat g, alternatives)` per 100 g
pub(super) type FoodRow = (&'static str, f64, f64, f64, &'static [&'static str]);

pub(super) const FOOD_ROWS: &[FoodRow] = &[
    ("whole milk", 14.0, 61.0, 3.3, &["skim milk", "almond milk", "oat milk"]),
    ("skim milk", 5.0, 42.0, 0.1, &["almond milk", "oat milk", "soy milk"]),
    (
        "cheddar cheese",
        105.0,
        403.0,
        33.1,
        &["low-fat cheese", "cottage cheese", "nutritional yeast"],
    ),
    ("cheese", 105.0, 403.0, 33.1, &["low-fat cheese", "cottage cheese", "nutritional yeast"]),
    (
        "mozzarella",
        89.0,
        280.0,
        22.0,
        &["low-fat mozzarella", "cottage cheese", "nutritional yeast"],
    ),
    ("swiss cheese", 92.0, 380.0, 28.0, &["low-fat swiss", "cottage cheese", "nutritional yeast"]),
    ("eggs", 373.0, 155.0, 11.3, &["egg whites", "tofu scramble", "chickpea scramble"]),
    ("egg", 373.0, 155.0, 11.3, &["egg whites", "tofu scramble", "chickpea scramble"]),
    ("yogurt", 13.0, 59.0, 0.4, &["greek yogurt", "plant-based yogurt"]),
    ("greek yogurt", 10.0, 59.0, 0.4, &["plant-based yogurt", "cottage cheese"]),
    ("butter", 215.0, 717.0, 81.1, &["olive oil", "avocado", "nut butter"]),
    ("cream", 110.0, 340.0, 36.0, &["coconut cream", "cashew cream", "oat cream"]),
    ("ice cream", 44.0, 207.0, 11.0, &["frozen yogurt", "sorbet", "nice cream"]),
    ("beef", 62.0, 250.0, 15.4, &["lean beef", "turkey", "fish", "tofu"]),
    ("steak", 62.0, 250.0, 15.4, &["lean beef", "turkey", "fish", "tofu"]),
    ("ground beef", 62.0, 250.0, 15.4, &["lean beef", "turkey", "fish", "tofu"]),
    ("pork", 62.0, 242.0, 14.0, &["lean pork", "chicken", "fish"]),
    ("pork chop", 62.0, 242.0, 14.0, &["lean pork", "chicken", "fish"]),
    ("chicken breast", 73.0, 165.0, 3.6, &["skinless chicken", "turkey", "fish"]),
    ("chicken", 73.0, 165.0, 3.6, &["skinless chicken", "turkey", "fish"]),
    ("chicken thigh", 82.0, 177.0, 9.3, &["chicken breast", "turkey", "fish"]),
    ("turkey", 49.0, 135.0, 3.6, &["chicken", "fish", "tofu"]),
    ("lamb", 78.0, 294.0, 21.0, &["lean beef", "chicken", "fish"]),
    ("duck", 84.0, 337.0, 28.0, &["chicken", "turkey", "fish"]),
    ("salmon", 55.0, 208.0, 12.4, &["cod", "tilapia", "tofu"]),
    ("tuna", 38.0, 144.0, 0.5, &["salmon", "cod", "tofu"]),
    ("cod", 43.0, 105.0, 0.9, &["tilapia", "salmon", "tofu"]),
    ("tilapia", 50.0, 96.0, 2.3, &["cod", "salmon", "tofu"]),
    ("shrimp", 195.0, 99.0, 0.3, &["cod", "tilapia", "tofu"]),
    ("crab", 97.0, 97.0, 1.5, &["cod", "tilapia", "tofu"]),
    ("lobster", 95.0, 89.0, 0.5, &["cod", "tilapia", "tofu"]),
    ("oysters", 50.0, 69.0, 2.0, &["mussels", "clams", "tofu"]),
    ("bacon", 97.0, 541.0, 42.0, &["turkey bacon", "tempeh bacon", "mushroom bacon"]),
    ("sausage", 80.0, 296.0, 26.0, &["turkey sausage", "vegetarian sausage", "tempeh"]),
    ("hot dog", 77.0, 290.0, 26.0, &["turkey hot dog", "vegetarian hot dog", "tofu dog"]),
    ("hamburger", 66.0, 295.0, 12.0, &["turkey burger", "veggie burger", "portobello burger"]),
    ("burger", 66.0, 295.0, 12.0, &["turkey burger", "veggie burger", "portobello burger"]),
    ("ham", 53.0, 145.0, 5.5, &["turkey", "chicken", "tofu", "tempeh"]),
    ("pepperoni", 85.0, 494.0, 44.0, &["turkey pepperoni", "vegetarian pepperoni", "mushroom"]),
    ("salami", 89.0, 336.0, 26.0, &["turkey salami", "vegetarian salami", "tofu"]),
    ("pastrami", 68.0, 251.0, 12.0, &["turkey pastrami", "chicken", "tofu"]),
    ("corned beef", 98.0, 251.0, 15.0, &["turkey", "chicken", "tofu"]),
    ("mayonnaise", 42.0, 680.0, 75.0, &["mustard", "hummus", "avocado", "greek yogurt"]),
    ("mayo", 42.0, 680.0, 75.0, &["mustard", "hummus", "avocado", "greek yogurt"]),
    ("ketchup", 0.0, 102.0, 0.1, &["mustard", "hot sauce", "salsa"]),
    ("mustard", 0.0, 66.0, 4.0, &["hummus", "avocado", "greek yogurt"]),
    ("ranch", 8.0, 484.0, 52.0, &["greek yogurt ranch", "hummus", "avocado"]),
    ("blue cheese", 75.0, 353.0, 28.0, &["greek yogurt", "hummus", "avocado"]),
    ("thousand island", 5.0, 475.0, 52.0, &["mustard", "hummus", "avocado"]),
    ("tofu", 0.0, 76.0, 4.8, &["tempeh", "seitan", "legumes"]),
    ("tempeh", 0.0, 192.0, 11.0, &["tofu", "seitan", "legumes"]),
    ("seitan", 0.0, 370.0, 1.9, &["tofu", "tempeh", "legumes"]),
    ("beans", 0.0, 88.0, 0.5, &["lentils", "chickpeas", "black beans"]),
    ("black beans", 0.0, 88.0, 0.5, &["kidney beans", "pinto beans", "chickpeas"]),
    ("kidney beans", 0.0, 88.0, 0.5, &["black beans", "pinto beans", "chickpeas"]),
    ("pinto beans", 0.0, 88.0, 0.5, &["black beans", "kidney beans", "chickpeas"]),
    ("lentils", 0.0, 116.0, 0.4, &["beans", "chickpeas", "quinoa"]),
    ("chickpeas", 0.0, 164.0, 2.6, &["beans", "lentils", "quinoa"]),
    ("quinoa", 0.0, 120.0, 1.9, &["brown rice", "farro", "barley"]),
    ("brown rice", 0.0, 111.0, 0.9, &["quinoa", "farro", "barley"]),
    ("white rice", 0.0, 130.0, 0.3, &["brown rice", "quinoa", "farro"]),
    ("apple", 0.0, 52.0, 0.2, &["pear", "orange", "berries"]),
    ("banana", 0.0, 89.0, 0.3, &["apple", "orange", "berries"]),
    ("orange", 0.0, 47.0, 0.1, &["apple", "banana", "berries"]),
    ("strawberry", 0.0, 32.0, 0.3, &["blueberry", "raspberry", "blackberry"]),
    ("blueberry", 0.0, 57.0, 0.3, &["strawberry", "raspberry", "blackberry"]),
    ("raspberry", 0.0, 52.0, 0.7, &["strawberry", "blueberry", "blackberry"]),
    ("grape", 0.0, 62.0, 0.2, &["apple", "orange", "berries"]),
    ("peach", 0.0, 39.0, 0.3, &["nectarine", "apricot", "plum"]),
    ("pear", 0.0, 57.0, 0.1, &["apple", "orange", "berries"]),
    ("pineapple", 0.0, 50.0, 0.1, &["mango", "papaya", "kiwi"]),
    ("mango", 0.0, 60.0, 0.4, &["pineapple", "papaya", "kiwi"]),
    ("avocado", 0.0, 160.0, 14.7, &["olive oil", "nuts", "seeds"]),
    ("broccoli", 0.0, 34.0, 0.4, &["cauliflower", "brussels sprouts", "kale"]),
    ("cauliflower", 0.0, 25.0, 0.3, &["broccoli", "brussels sprouts", "kale"]),
    ("brussels sprouts", 0.0, 43.0, 0.3, &["broccoli", "cauliflower", "kale"]),
    ("kale", 0.0, 49.0, 0.9, &["spinach", "swiss chard", "arugula"]),
    ("spinach", 0.0, 23.0, 0.4, &["kale", "swiss chard", "arugula"]),
    ("lettuce", 0.0, 15.0, 0.1, &["spinach", "kale", "arugula", "mixed greens"]),
    ("tomato", 0.0, 18.0, 0.2, &["bell pepper", "cucumber", "onion", "avocado"]),
    ("cucumber", 0.0, 16.0, 0.1, &["celery", "bell pepper", "zucchini"]),
    ("carrots", 0.0, 41.0, 0.2, &["sweet potato", "butternut squash", "beets"]),
    ("sweet potato", 0.0, 86.0, 0.1, &["carrots", "butternut squash", "beets"]),
    ("potato", 0.0, 77.0, 0.1, &["sweet potato", "cauliflower", "turnip"]),
    ("onion", 0.0, 40.0, 0.1, &["garlic", "shallot", "leek"]),
    ("garlic", 0.0, 149.0, 0.5, &["onion", "shallot", "leek"]),
    ("bell pepper", 0.0, 31.0, 0.3, &["tomato", "cucumber", "zucchini"]),
    ("mushroom", 0.0, 22.0, 0.3, &["eggplant", "zucchini", "squash"]),
    ("zucchini", 0.0, 17.0, 0.3, &["cucumber", "bell pepper", "squash"]),
    ("eggplant", 0.0, 25.0, 0.2, &["mushroom", "zucchini", "squash"]),
    ("corn", 0.0, 86.0, 1.2, &["peas", "green beans", "asparagus"]),
    ("peas", 0.0, 84.0, 0.4, &["corn", "green beans", "asparagus"]),
    ("green beans", 0.0, 31.0, 0.2, &["peas", "asparagus", "broccoli"]),
    ("asparagus", 0.0, 20.0, 0.1, &["green beans", "broccoli", "cauliflower"]),
    ("bread", 0.0, 265.0, 3.2, &["whole grain bread", "sprouted bread", "rye bread"]),
    ("sandwich bread", 0.0, 265.0, 3.2, &["whole grain bread", "sprouted bread", "rye bread"]),
    ("white bread", 0.0, 265.0, 3.2, &["whole grain bread", "sprouted bread", "rye bread"]),
    ("wheat bread", 0.0, 247.0, 3.4, &["whole grain bread", "sprouted bread", "rye bread"]),
    ("whole wheat bread", 0.0, 247.0, 3.4, &["sprouted bread", "rye bread", "oat bread"]),
    ("rye bread", 0.0, 259.0, 3.3, &["whole wheat bread", "sprouted bread", "oat bread"]),
    ("pita bread", 0.0, 275.0, 1.2, &["whole wheat pita", "tortilla", "flatbread"]),
    ("tortilla", 0.0, 237.0, 2.9, &["whole wheat tortilla", "pita bread", "flatbread"]),
    ("rice", 0.0, 130.0, 0.3, &["brown rice", "quinoa", "farro"]),
    ("pasta", 0.0, 131.0, 1.1, &["zucchini noodles", "spaghetti squash", "quinoa"]),
    (
        "spaghetti",
        0.0,
        131.0,
        1.1,
        &["whole grain spaghetti", "zucchini noodles", "spaghetti squash"],
    ),
    ("macaroni", 0.0, 131.0, 1.1, &["whole grain macaroni", "quinoa", "brown rice"]),
    ("oatmeal", 0.0, 68.0, 1.4, &["quinoa", "buckwheat", "amaranth"]),
    ("oats", 0.0, 68.0, 1.4, &["quinoa", "buckwheat", "amaranth"]),
    ("cereal", 0.0, 100.0, 1.0, &["oatmeal", "quinoa", "buckwheat"]),
    ("almonds", 0.0, 579.0, 49.9, &["walnuts", "cashews", "pistachios"]),
    ("walnuts", 0.0, 654.0, 65.2, &["almonds", "cashews", "pistachios"]),
    ("cashews", 0.0, 553.0, 43.8, &["almonds", "walnuts", "pistachios"]),
    ("peanuts", 0.0, 567.0, 49.2, &["almonds", "walnuts", "cashews"]),
    ("peanut butter", 0.0, 588.0, 50.0, &["almond butter", "cashew butter", "sunflower butter"]),
    ("sunflower seeds", 0.0, 584.0, 51.5, &["pumpkin seeds", "chia seeds", "flaxseeds"]),
    ("pumpkin seeds", 0.0, 559.0, 49.0, &["sunflower seeds", "chia seeds", "flaxseeds"]),
    ("chia seeds", 0.0, 486.0, 30.7, &["flaxseeds", "hemp seeds", "sunflower seeds"]),
    ("flaxseeds", 0.0, 534.0, 42.2, &["chia seeds", "hemp seeds", "sunflower seeds"]),
    ("coffee", 0.0, 2.0, 0.0, &["tea", "herbal tea", "water"]),
    ("tea", 0.0, 1.0, 0.0, &["coffee", "herbal tea", "water"]),
    ("orange juice", 0.0, 45.0, 0.2, &["apple juice", "grapefruit juice", "water"]),
    ("apple juice", 0.0, 46.0, 0.1, &["orange juice", "grape juice", "water"]),
    ("soda", 0.0, 42.0, 0.0, &["sparkling water", "herbal tea", "water"]),
    ("beer", 0.0, 43.0, 0.0, &["wine", "spirits", "water"]),
    ("wine", 0.0, 85.0, 0.0, &["beer", "spirits", "water"]),
    ("chocolate", 8.0, 545.0, 31.0, &["dark chocolate", "cocoa powder", "carob"]),
    ("dark chocolate", 8.0, 545.0, 31.0, &["cocoa powder", "carob", "fruit"]),
    ("cake", 15.0, 257.0, 9.0, &["fruit", "yogurt", "nuts"]),
    ("cookie", 20.0, 502.0, 25.0, &["fruit", "nuts", "yogurt"]),
    ("pie", 25.0, 237.0, 11.0, &["fruit", "yogurt", "nuts"]),
    ("sandwich", 50.0, 300.0, 15.0, &["wrap", "salad", "soup"]),
    ("pizza", 35.0, 266.0, 10.0, &["cauliflower crust pizza", "zucchini pizza", "salad"]),
    ("taco", 45.0, 226.0, 12.0, &["veggie taco", "fish taco", "salad"]),
    ("salad", 5.0, 100.0, 5.0, &["soup", "stir fry", "roasted vegetables"]),
    ("soup", 10.0, 80.0, 3.0, &["salad", "stir fry", "roasted vegetables"]),
    ("stir fry", 15.0, 150.0, 8.0, &["salad", "soup", "roasted vegetables"]),
];

/// Typical single-serving mass (g) for foods where 100 g would be misleading
pub(super) const DEFAULT_PORTIONS: &[(&str, f64)] = &[
    ("bread", 60.0),
    ("ham", 50.0),
    ("cheese", 30.0),
    ("mayonnaise", 15.0),
    ("lettuce", 20.0),
    ("tomato", 30.0),
    ("egg", 50.0),
    ("eggs", 50.0),
    ("milk", 240.0),
    ("chicken", 100.0),
    ("beef", 100.0),
    ("salmon", 100.0),
    ("rice", 150.0),
    ("pasta", 100.0),
    ("oatmeal", 150.0),
    ("yogurt", 170.0),
    ("butter", 14.0),
    ("bacon", 15.0),
    ("sausage", 50.0),
    ("hot dog", 50.0),
    ("hamburger", 100.0),
];
