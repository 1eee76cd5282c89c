use clap::Parser;
use std::path::Path;
use tracing::{info, warn};

use lunch_menu_rs::catalog::{load_intervals, load_meals, save_intervals, Catalog};
use lunch_menu_rs::cli::{Cli, Command};
use lunch_menu_rs::error::Result;
use lunch_menu_rs::interface::{
    collect_intervals, display_combinations, display_intervals, display_item_list, display_lunch,
    prompt_yes_no,
};
use lunch_menu_rs::logging::init_logging;
use lunch_menu_rs::models::{IntervalSet, LunchResult, MenuItem};
use lunch_menu_rs::planner::{combinations, count_combinations, LunchTotals, SearchStats};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Solve => cmd_solve(&cli.meals, &cli.intervals, cli.json),
        Command::Combos { limit } => cmd_combos(&cli.meals, limit, cli.json),
        Command::Check => cmd_check(&cli.intervals, cli.json),
        Command::Bounds { out } => cmd_bounds(&out),
    }
}

/// Load the meals file into a catalog, warning about suspicious rows.
fn load_catalog(meals_path: &str) -> Result<Catalog> {
    let catalog = Catalog::new(load_meals(Path::new(meals_path))?);

    for item in catalog.invalid_items() {
        warn!(item = %item.name, "item has negative or non-finite figures");
    }

    Ok(catalog)
}

#[cfg(feature = "parallel")]
fn search<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
    intervals: &IntervalSet,
) -> (LunchResult<'a>, SearchStats) {
    lunch_menu_rs::planner::find_cheapest_feasible_parallel(
        starters, mains, sides, desserts, intervals,
    )
}

#[cfg(not(feature = "parallel"))]
fn search<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
    intervals: &IntervalSet,
) -> (LunchResult<'a>, SearchStats) {
    lunch_menu_rs::planner::find_cheapest_feasible_with_stats(
        starters, mains, sides, desserts, intervals,
    )
}

/// Find and display the cheapest feasible lunch.
fn cmd_solve(meals_path: &str, intervals_path: &str, json: bool) -> Result<()> {
    // Bounds are validated before the menu is even read
    let intervals = load_intervals(Path::new(intervals_path))?;
    let catalog = load_catalog(meals_path)?;

    let (starters, mains, sides, desserts) = catalog.split_into_categories();
    info!(
        starters = starters.len(),
        mains = mains.len(),
        sides = sides.len(),
        desserts = desserts.len(),
        "searching lunches"
    );

    let (result, stats) = search(&starters, &mains, &sides, &desserts, &intervals);

    if json {
        let body = serde_json::json!({
            "lunch": result.combination.map(|c| c.names()),
            "price": result.combination.map(|_| result.price),
            "totals": result.combination.map(|c| LunchTotals::of(&c)),
            "stats": stats,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        display_lunch(&result, &intervals, &stats);
    }

    Ok(())
}

/// List the combinations the menu allows.
fn cmd_combos(meals_path: &str, limit: usize, json: bool) -> Result<()> {
    let catalog = load_catalog(meals_path)?;
    let (starters, mains, sides, desserts) = catalog.split_into_categories();

    let total = count_combinations(&starters, &mains, &sides, &desserts);
    let shown: Vec<_> = combinations(&starters, &mains, &sides, &desserts)
        .take(limit)
        .collect();

    if json {
        let names: Vec<[&str; 4]> = shown.iter().map(|c| c.names()).collect();
        let body = serde_json::json!({ "total": total, "combinations": names });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        display_item_list(&starters, "Starters");
        display_item_list(&mains, "Mains");
        display_item_list(&sides, "Sides");
        display_item_list(&desserts, "Desserts");
        display_combinations(&shown, total);
    }

    Ok(())
}

/// Validate the interval file.
fn cmd_check(intervals_path: &str, json: bool) -> Result<()> {
    let intervals = load_intervals(Path::new(intervals_path))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&intervals.to_json())?);
    } else {
        display_intervals(&intervals);
        println!("Limits in {} are valid.", intervals_path);
    }

    Ok(())
}

/// Build limits interactively and save them.
fn cmd_bounds(out_path: &str) -> Result<()> {
    let intervals = collect_intervals()?;
    display_intervals(&intervals);

    let path = Path::new(out_path);
    let prompt = if path.exists() {
        format!("Overwrite {}?", out_path)
    } else {
        format!("Save limits to {}?", out_path)
    };

    if prompt_yes_no(&prompt, !path.exists())? {
        save_intervals(path, &intervals)?;
        println!("Limits saved.");
    }

    Ok(())
}
