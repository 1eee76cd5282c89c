#![cfg(feature = "parallel")]

use rand::rngs::StdRng;
use rand::SeedableRng;

use lunch_menu_rs::catalog::Catalog;
use lunch_menu_rs::models::{Category, Interval, IntervalSet, Limit, MenuItem};
use lunch_menu_rs::planner::{find_cheapest_feasible_parallel, find_cheapest_feasible_with_stats};
use lunch_menu_rs::synth::{random_catalog, SynthConfig};

#[test]
fn test_parallel_matches_sequential_on_random_menus() {
    let config = SynthConfig {
        per_category: 5,
        ..Default::default()
    };
    let intervals = IntervalSet::new()
        .with(
            Limit::Calories,
            Interval::integral(Limit::Calories, 800, 1600).unwrap(),
        )
        .with(Limit::Price, Interval::decimal(Limit::Price, 0.0, 12.0).unwrap());

    for seed in 0..20 {
        let catalog = Catalog::new(random_catalog(&mut StdRng::seed_from_u64(seed), &config));
        let (starters, mains, sides, desserts) = catalog.split_into_categories();

        let sequential =
            find_cheapest_feasible_with_stats(&starters, &mains, &sides, &desserts, &intervals);
        let parallel =
            find_cheapest_feasible_parallel(&starters, &mains, &sides, &desserts, &intervals);

        assert_eq!(sequential, parallel, "seed {seed}");
    }
}

#[test]
fn test_parallel_keeps_first_minimum_across_starters() {
    let item = |name: &str, category: Category, price: f64| MenuItem {
        name: name.to_string(),
        category,
        calories: 100.0,
        protein: 5.0,
        fat: 5.0,
        carbs: 10.0,
        serving_amount: 100.0,
        price,
    };
    let starters: Vec<MenuItem> = (0..8)
        .map(|i| item(&format!("Soup {i}"), Category::Starter, 1.0))
        .collect();
    let main = item("Stew", Category::Main, 2.0);
    let side = item("Rice", Category::Side, 0.5);
    let dessert = item("Jelly", Category::Dessert, 1.5);

    let starter_refs: Vec<&MenuItem> = starters.iter().collect();
    let (result, stats) = find_cheapest_feasible_parallel(
        &starter_refs,
        &[&main],
        &[&side],
        &[&dessert],
        &IntervalSet::new(),
    );

    assert_eq!(stats.generated, 8);
    assert_eq!(result.combination.unwrap().starter.name, "Soup 0");
}
