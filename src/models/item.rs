use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strsim::jaro_winkler;

use crate::error::LunchError;
use crate::planner::constants::{CATEGORY_SUGGESTION_THRESHOLD, NUTRIENT_BASIS};

/// The four courses a lunch is built from, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Starter,
    Main,
    Side,
    Dessert,
}

impl Category {
    /// All categories in lunch order.
    pub const ALL: [Category; 4] = [
        Category::Starter,
        Category::Main,
        Category::Side,
        Category::Dessert,
    ];

    /// Label used for this category in meal files.
    pub fn label(self) -> &'static str {
        match self {
            Category::Starter => "soup",
            Category::Main => "main dish",
            Category::Side => "sidedish",
            Category::Dessert => "dessert",
        }
    }

    /// Closest known label to `input`, if any is similar enough.
    pub fn suggest(input: &str) -> Option<&'static str> {
        let input = input.trim().to_lowercase();
        Category::ALL
            .iter()
            .map(|c| (c.label(), jaro_winkler(c.label(), &input)))
            .filter(|(_, score)| *score > CATEGORY_SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, _)| label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = LunchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| LunchError::UnknownCategory {
                label: s.to_string(),
                suggestion: Category::suggest(s).map(str::to_string),
            })
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// A menu item with nutrient figures per 100 units and a flat price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "meal")]
    pub name: String,

    pub category: Category,

    #[serde(deserialize_with = "zero_if_empty")]
    pub calories: f64,

    #[serde(deserialize_with = "zero_if_empty")]
    pub protein: f64,

    #[serde(deserialize_with = "zero_if_empty")]
    pub fat: f64,

    #[serde(deserialize_with = "zero_if_empty")]
    pub carbs: f64,

    /// Serving size in the same units the nutrient figures are based on.
    #[serde(rename = "amount", deserialize_with = "zero_if_empty")]
    pub serving_amount: f64,

    #[serde(deserialize_with = "zero_if_empty")]
    pub price: f64,
}

/// Per-serving nutrient values of a single item.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ServingStats {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbs: f64,
}

impl MenuItem {
    /// Scale a per-100 figure to this item's serving.
    #[inline]
    pub fn per_serving(&self, per_basis: f64) -> f64 {
        per_basis * self.serving_amount / NUTRIENT_BASIS
    }

    /// Calories, protein, fat and carbs for one serving.
    pub fn serving_stats(&self) -> ServingStats {
        ServingStats {
            calories: self.per_serving(self.calories),
            protein: self.per_serving(self.protein),
            fat: self.per_serving(self.fat),
            carbs: self.per_serving(self.carbs),
        }
    }

    /// Basic validation: non-negative figures.
    pub fn is_valid(&self) -> bool {
        [
            self.calories,
            self.protein,
            self.fat,
            self.carbs,
            self.serving_amount,
            self.price,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}

fn zero_if_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_item() -> MenuItem {
        MenuItem {
            name: "Goulash".to_string(),
            category: Category::Main,
            calories: 120.0,
            protein: 9.0,
            fat: 6.5,
            carbs: 8.0,
            serving_amount: 250.0,
            price: 3.2,
        }
    }

    #[test]
    fn test_serving_stats() {
        let stats = sample_item().serving_stats();
        assert!((stats.calories - 300.0).abs() < 1e-9);
        assert!((stats.protein - 22.5).abs() < 1e-9);
        assert!((stats.fat - 16.25).abs() < 1e-9);
        assert!((stats.carbs - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_category_labels_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_unknown_category_suggests_label() {
        let err = "main dsh".parse::<Category>().unwrap_err();
        match err {
            LunchError::UnknownCategory { label, suggestion } => {
                assert_eq!(label, "main dsh");
                assert_eq!(suggestion.as_deref(), Some("main dish"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_category_without_suggestion() {
        let err = "xyzzy".parse::<Category>().unwrap_err();
        assert!(matches!(
            err,
            LunchError::UnknownCategory {
                suggestion: None,
                ..
            }
        ));
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_item().is_valid());

        let mut invalid = sample_item();
        invalid.price = -1.0;
        assert!(!invalid.is_valid());
    }
}
