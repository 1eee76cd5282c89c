use crate::models::{IntervalSet, LunchCombination, LunchResult, MenuItem};
use crate::planner::{LunchTotals, SearchStats};

/// Display the cheapest lunch with per-item figures and totals.
pub fn display_lunch(result: &LunchResult<'_>, intervals: &IntervalSet, stats: &SearchStats) {
    println!();
    println!(
        "Checked {} combinations, {} within limits.",
        stats.generated, stats.feasible
    );

    let Some(combo) = result.combination else {
        println!("No feasible lunch found for the given limits.");
        println!();
        return;
    };

    println!();
    println!("=== Cheapest Lunch ===");
    println!();

    // Find max item name length for alignment
    let max_name_len = combo
        .items()
        .iter()
        .map(|item| item.name.len())
        .max()
        .unwrap_or(10);

    for item in combo.items() {
        let serving = item.serving_stats();
        println!(
            "  {:<9} {:<width$} - {:>7.1} kcal | P {:>5.1} F {:>5.1} C {:>5.1} | {:>6.2}",
            item.category.label(),
            item.name,
            serving.calories,
            serving.protein,
            serving.fat,
            serving.carbs,
            item.price,
            width = max_name_len
        );
    }

    display_totals(&combo, intervals);

    println!();
    println!("Total price: {:.2}", result.price);
    println!();
}

/// Display lunch totals next to the bounds they were checked against.
fn display_totals(combo: &LunchCombination<'_>, intervals: &IntervalSet) {
    let totals = LunchTotals::of(combo);

    println!();
    println!("--- Totals ---");
    for (limit, interval) in intervals.iter() {
        println!(
            "  {:<9} {:>10.3}  within {}",
            limit.name(),
            totals.get(limit),
            interval
        );
    }
}

/// Display a list of lunches, one per line.
pub fn display_combinations(combos: &[LunchCombination<'_>], total: usize) {
    println!();
    println!("=== {} combinations ===", total);
    println!();

    for (i, combo) in combos.iter().enumerate() {
        println!("{:>5}. {}", i + 1, combo.names().join(" | "));
    }

    if combos.len() < total {
        println!("  ... {} more", total - combos.len());
    }
    println!();
}

/// Display the bounds of an interval set.
pub fn display_intervals(intervals: &IntervalSet) {
    println!();
    println!("=== Limits ===");
    for (limit, interval) in intervals.iter() {
        println!("  {:<9} {} ({})", limit.name(), interval, interval.kind());
    }
    println!();
}

/// Display a simple list of items with their details.
pub fn display_item_list(items: &[&MenuItem], title: &str) {
    if items.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    for item in items {
        println!(
            "  {} [{}] - {} kcal/100, P:{} F:{} C:{}, {} g, {:.2}",
            item.name,
            item.category,
            item.calories,
            item.protein,
            item.fat,
            item.carbs,
            item.serving_amount,
            item.price
        );
    }

    println!();
}
