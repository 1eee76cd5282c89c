use serde::Serialize;

use crate::models::item::MenuItem;

/// One item from each category, in lunch order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunchCombination<'a> {
    pub starter: &'a MenuItem,
    pub main: &'a MenuItem,
    pub side: &'a MenuItem,
    pub dessert: &'a MenuItem,
}

impl<'a> LunchCombination<'a> {
    pub fn new(
        starter: &'a MenuItem,
        main: &'a MenuItem,
        side: &'a MenuItem,
        dessert: &'a MenuItem,
    ) -> Self {
        Self {
            starter,
            main,
            side,
            dessert,
        }
    }

    /// Items in starter, main, side, dessert order.
    pub fn items(&self) -> [&'a MenuItem; 4] {
        [self.starter, self.main, self.side, self.dessert]
    }

    pub fn names(&self) -> [&'a str; 4] {
        self.items().map(|item| item.name.as_str())
    }
}

/// Outcome of a search for the cheapest feasible lunch.
///
/// When nothing is feasible, `combination` is `None` and `price` is `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunchResult<'a> {
    pub combination: Option<LunchCombination<'a>>,
    pub price: f64,
}

impl<'a> LunchResult<'a> {
    pub fn found(combination: LunchCombination<'a>, price: f64) -> Self {
        Self {
            combination: Some(combination),
            price,
        }
    }

    pub fn none() -> Self {
        Self {
            combination: None,
            price: f64::INFINITY,
        }
    }

    pub fn is_feasible(&self) -> bool {
        self.combination.is_some()
    }
}

impl Default for LunchResult<'_> {
    fn default() -> Self {
        Self::none()
    }
}
