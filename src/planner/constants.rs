/// Decimal places nutrient totals are rounded to before bounds are checked.
pub const TOTALS_DECIMALS: u32 = 3;

/// Decimal places of the reported lunch price.
pub const PRICE_DECIMALS: u32 = 2;

/// Serving amounts and nutrient figures are given per this many units.
pub const NUTRIENT_BASIS: f64 = 100.0;

/// Minimum Jaro-Winkler similarity for suggesting a category label.
pub const CATEGORY_SUGGESTION_THRESHOLD: f64 = 0.7;

/// Round a value to `decimals` places (half away from zero).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(4.999, 2), 5.0);
        assert_eq!(round_to(-0.0004, 3), -0.0);
    }
}
