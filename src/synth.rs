//! Seeded random menus for demos and stress runs.

use rand::Rng;

use crate::models::{Category, MenuItem};
use crate::planner::constants::round_to;

/// Value ranges for generated items, as inclusive `(min, max)` pairs.
#[derive(Debug, Clone)]
pub struct SynthRanges {
    pub calories: (f64, f64),
    pub protein: (f64, f64),
    pub fat: (f64, f64),
    pub carbs: (f64, f64),
    pub serving_amount: (f64, f64),
    pub price: (f64, f64),
}

impl Default for SynthRanges {
    fn default() -> Self {
        Self {
            calories: (20.0, 350.0),
            protein: (0.5, 30.0),
            fat: (0.1, 25.0),
            carbs: (1.0, 60.0),
            serving_amount: (80.0, 350.0),
            price: (0.4, 6.0),
        }
    }
}

/// Configuration for a generated menu.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Items generated for each of the four categories.
    pub per_category: usize,
    pub ranges: SynthRanges,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            per_category: 6,
            ranges: SynthRanges::default(),
        }
    }
}

fn sample(rng: &mut impl Rng, range: (f64, f64), decimals: u32) -> f64 {
    round_to(rng.gen_range(range.0..=range.1), decimals)
}

/// Generate one item of `category`.
pub fn random_item(
    rng: &mut impl Rng,
    category: Category,
    number: usize,
    ranges: &SynthRanges,
) -> MenuItem {
    MenuItem {
        name: format!("{} {}", category.label(), number),
        category,
        calories: sample(rng, ranges.calories, 0),
        protein: sample(rng, ranges.protein, 1),
        fat: sample(rng, ranges.fat, 1),
        carbs: sample(rng, ranges.carbs, 1),
        serving_amount: sample(rng, ranges.serving_amount, 0),
        price: sample(rng, ranges.price, 2),
    }
}

/// Generate a menu with `per_category` items in each category, grouped by category.
pub fn random_catalog(rng: &mut impl Rng, config: &SynthConfig) -> Vec<MenuItem> {
    Category::ALL
        .iter()
        .flat_map(|&category| (1..=config.per_category).map(move |n| (category, n)))
        .map(|(category, n)| random_item(rng, category, n, &config.ranges))
        .collect()
}
