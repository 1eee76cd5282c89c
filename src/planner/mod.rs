pub mod combinations;
pub mod constants;
pub mod cost;
pub mod feasibility;
pub mod optimizer;

pub use combinations::{combinations, count_combinations, generate_combinations, CombinationSpace};
pub use constants::*;
pub use cost::{lunch_price, reported_price};
pub use feasibility::{calculate_stats, evaluate_lunch, LunchTotals};
#[cfg(feature = "parallel")]
pub use optimizer::find_cheapest_feasible_parallel;
pub use optimizer::{
    find_cheapest_feasible, find_cheapest_feasible_checked, find_cheapest_feasible_with_stats,
    SearchStats,
};
