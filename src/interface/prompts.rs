use dialoguer::{Confirm, Input};

use crate::error::{LunchError, Result};
use crate::models::{Interval, IntervalSet, Limit, NumericKind};

/// Default bounds offered when prompting, as `(low, high)`.
fn default_bounds(limit: Limit) -> (&'static str, &'static str) {
    match limit {
        Limit::Calories => ("600", "1200"),
        Limit::Protein => ("20", "120"),
        Limit::Fat => ("0", "80"),
        Limit::Carbs => ("50", "250"),
        Limit::Price => ("0.0", "10.0"),
    }
}

fn prompt_value(prompt: String, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for the lower and upper bound of one limit.
pub fn prompt_interval(limit: Limit) -> Result<Interval> {
    let (default_low, default_high) = default_bounds(limit);
    let low = prompt_value(format!("Lowest total {}", limit), default_low)?;
    let high = prompt_value(format!("Highest total {}", limit), default_high)?;

    match limit.kind() {
        NumericKind::Integral => {
            let parse = |s: &str| {
                s.parse::<i64>().map_err(|_| {
                    LunchError::InvalidInput(format!("{} limits should be whole numbers", limit))
                })
            };
            Interval::integral(limit, parse(&low)?, parse(&high)?)
        }
        NumericKind::Decimal => {
            let parse = |s: &str| {
                s.parse::<f64>()
                    .map_err(|_| LunchError::InvalidInput(format!("Invalid {} limit", limit)))
            };
            Interval::decimal(limit, parse(&low)?, parse(&high)?)
        }
    }
}

/// Collect bounds for every limit.
pub fn collect_intervals() -> Result<IntervalSet> {
    let mut set = IntervalSet::new();
    for limit in Limit::ALL {
        set = set.with(limit, prompt_interval(limit)?);
    }
    Ok(set)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
