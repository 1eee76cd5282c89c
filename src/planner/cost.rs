use crate::models::LunchCombination;
use crate::planner::constants::{round_to, PRICE_DECIMALS};

/// Total price of a lunch: the plain sum of its item prices.
#[inline]
pub fn lunch_price(combo: &LunchCombination<'_>) -> f64 {
    combo.starter.price + combo.main.price + combo.side.price + combo.dessert.price
}

/// Price as reported to the user.
#[inline]
pub fn reported_price(price: f64) -> f64 {
    if price.is_finite() {
        round_to(price, PRICE_DECIMALS)
    } else {
        price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, MenuItem};

    fn priced(category: Category, price: f64) -> MenuItem {
        MenuItem {
            name: format!("{category}"),
            category,
            calories: 100.0,
            protein: 1.0,
            fat: 1.0,
            carbs: 1.0,
            serving_amount: 500.0,
            price,
        }
    }

    #[test]
    fn test_price_ignores_serving_size() {
        let items = [
            priced(Category::Starter, 1.0),
            priced(Category::Main, 2.0),
            priced(Category::Side, 0.5),
            priced(Category::Dessert, 1.5),
        ];
        let combo = LunchCombination::new(&items[0], &items[1], &items[2], &items[3]);
        assert_eq!(lunch_price(&combo), 5.0);
    }

    #[test]
    fn test_reported_price() {
        assert_eq!(reported_price(7.500000000000001), 7.5);
        assert_eq!(reported_price(3.456), 3.46);
        assert!(reported_price(f64::INFINITY).is_infinite());
    }
}
