// ABOUTME: Secondary nutrient table consulted after exact and category matching
// ABOUTME: Mixed dishes plus the misspellings that get corrected before lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bradley Health

use super::foods::FoodRow;

/// Prepared dishes that neither the exact table nor any category pattern covers,
/// plus the targets of the spelling corrections below
pub(super) const SECONDARY_ROWS: &[FoodRow] = &[
    ("burrito", 15.0, 206.0, 7.0, &["veggie burrito", "bean burrito", "burrito bowl"]),
    ("sushi", 8.0, 150.0, 0.9, &["vegetable roll", "cucumber roll", "avocado roll"]),
    ("quesadilla", 30.0, 293.0, 15.0, &["veggie quesadilla", "bean quesadilla", "salad"]),
    ("enchilada", 25.0, 168.0, 8.0, &["bean enchilada", "veggie enchilada", "salad"]),
    ("omelet", 313.0, 154.0, 11.0, &["egg white omelet", "tofu scramble", "chickpea scramble"]),
    ("omelette", 313.0, 154.0, 11.0, &["egg white omelet", "tofu scramble", "chickpea scramble"]),
    ("gyro", 45.0, 229.0, 12.0, &["falafel", "chicken wrap", "salad"]),
    ("nachos", 20.0, 306.0, 17.0, &["baked chips", "salsa", "bean dip"]),
    ("fries", 0.0, 312.0, 15.0, &["baked potato", "sweet potato", "side salad"]),
    ("chowder", 15.0, 95.0, 5.0, &["vegetable soup", "lentil soup", "salad"]),
    ("curry", 25.0, 130.0, 7.0, &["vegetable curry", "lentil curry", "chickpea curry"]),
    ("kebab", 60.0, 215.0, 12.0, &["vegetable kebab", "chicken kebab", "falafel"]),
    ("falafel", 0.0, 333.0, 17.8, &["baked falafel", "hummus", "salad"]),
    ("hummus", 0.0, 166.0, 9.6, &["bean dip", "salsa", "guacamole"]),
    ("ramen", 10.0, 188.0, 7.0, &["pho", "miso soup", "soba"]),
    ("pho", 15.0, 60.0, 1.5, &["miso soup", "vegetable soup", "salad"]),
    ("meatloaf", 75.0, 222.0, 13.0, &["turkey meatloaf", "lentil loaf", "chicken"]),
    ("lasagne", 30.0, 135.0, 5.0, &["vegetable lasagne", "pasta", "salad"]),
    ("paella", 40.0, 155.0, 5.0, &["vegetable paella", "brown rice", "salad"]),
    ("tamale", 20.0, 206.0, 10.0, &["bean tamale", "veggie tamale", "salad"]),
    ("samosa", 5.0, 262.0, 17.0, &["baked samosa", "chickpeas", "salad"]),
    ("poutine", 20.0, 230.0, 12.0, &["baked potato", "sweet potato", "salad"]),
    ("casserole", 25.0, 150.0, 7.0, &["vegetable casserole", "stir fry", "salad"]),
    ("guacamole", 0.0, 160.0, 14.7, &["salsa", "hummus", "bean dip"]),
    ("salsa", 0.0, 36.0, 0.2, &["pico de gallo", "tomato", "hummus"]),
    ("sandwich", 50.0, 300.0, 15.0, &["wrap", "salad", "soup"]),
    ("chicken", 73.0, 165.0, 3.6, &["skinless chicken", "turkey", "fish"]),
    ("broccoli", 0.0, 34.0, 0.4, &["cauliflower", "brussels sprouts", "kale"]),
    ("cheese", 105.0, 403.0, 33.1, &["low-fat cheese", "cottage cheese", "nutritional yeast"]),
    ("yogurt", 13.0, 59.0, 0.4, &["greek yogurt", "plant-based yogurt"]),
    ("spaghetti", 0.0, 131.0, 1.1, &["zucchini noodles", "spaghetti squash", "quinoa"]),
    ("avocado", 0.0, 160.0, 14.7, &["olive oil", "nuts", "seeds"]),
];

/// Common misspellings mapped to the spelling used in [`SECONDARY_ROWS`]
pub(super) const SPELLING_CORRECTIONS: &[(&str, &str)] = &[
    ("sandwhich", "sandwich"),
    ("sandwitch", "sandwich"),
    ("brocoli", "broccoli"),
    ("brocolli", "broccoli"),
    ("spagetti", "spaghetti"),
    ("spaghettti", "spaghetti"),
    ("chiken", "chicken"),
    ("chikken", "chicken"),
    ("cheeze", "cheese"),
    ("yoghurt", "yogurt"),
    ("avacado", "avocado"),
    ("burito", "burrito"),
    ("omlet", "omelet"),
    ("omlette", "omelette"),
    ("quesedilla", "quesadilla"),
];
