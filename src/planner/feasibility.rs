use serde::Serialize;

use crate::models::{IntervalSet, Limit, LunchCombination, MenuItem};
use crate::planner::constants::{round_to, TOTALS_DECIMALS};

/// Per-serving calories, protein, fat and carbs of one item.
pub fn calculate_stats(item: &MenuItem) -> (f64, f64, f64, f64) {
    let stats = item.serving_stats();
    (stats.calories, stats.protein, stats.fat, stats.carbs)
}

/// Totals of a lunch.
///
/// Nutrients are rounded to [`TOTALS_DECIMALS`] places; price is the raw sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LunchTotals {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
    pub price: f64,
}

impl LunchTotals {
    pub fn of(combo: &LunchCombination<'_>) -> Self {
        let mut raw = LunchTotals::default();
        for item in combo.items() {
            let stats = item.serving_stats();
            raw.calories += stats.calories;
            raw.protein += stats.protein;
            raw.fat += stats.fat;
            raw.carbs += stats.carbs;
            raw.price += item.price;
        }

        LunchTotals {
            calories: round_to(raw.calories, TOTALS_DECIMALS),
            protein: round_to(raw.protein, TOTALS_DECIMALS),
            fat: round_to(raw.fat, TOTALS_DECIMALS),
            carbs: round_to(raw.carbs, TOTALS_DECIMALS),
            price: raw.price,
        }
    }

    pub fn get(&self, limit: Limit) -> f64 {
        match limit {
            Limit::Calories => self.calories,
            Limit::Protein => self.protein,
            Limit::Fat => self.fat,
            Limit::Carbs => self.carbs,
            Limit::Price => self.price,
        }
    }

    /// Limits whose bound these totals fall outside of.
    pub fn violations(&self, intervals: &IntervalSet) -> Vec<Limit> {
        intervals
            .iter()
            .filter(|(limit, interval)| !interval.contains(self.get(*limit)))
            .map(|(limit, _)| limit)
            .collect()
    }

    pub fn satisfies(&self, intervals: &IntervalSet) -> bool {
        intervals
            .iter()
            .all(|(limit, interval)| interval.contains(self.get(limit)))
    }
}

/// Whether a lunch meets every bound in `intervals`.
///
/// Limits missing from the set are not checked.
pub fn evaluate_lunch(combo: &LunchCombination<'_>, intervals: &IntervalSet) -> bool {
    LunchTotals::of(combo).satisfies(intervals)
}
