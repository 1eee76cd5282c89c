use std::ops::Range;

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::models::{IntervalSet, LunchCombination, LunchResult, MenuItem};
use crate::planner::combinations::CombinationSpace;
use crate::planner::cost::{lunch_price, reported_price};
use crate::planner::feasibility::evaluate_lunch;

/// Counters collected while searching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Lunches enumerated.
    pub generated: usize,
    /// Lunches that met every bound.
    pub feasible: usize,
}

impl SearchStats {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn merge(self, other: SearchStats) -> SearchStats {
        SearchStats {
            generated: self.generated + other.generated,
            feasible: self.feasible + other.feasible,
        }
    }
}

/// Best feasible lunch seen so far, with its Cartesian index and unrounded cost.
#[derive(Debug, Clone, Copy)]
struct Best<'a> {
    index: usize,
    combo: LunchCombination<'a>,
    cost: f64,
}

impl<'a> Best<'a> {
    /// Cheaper wins; equal cost falls back to the earlier index.
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    fn pick(a: Option<Best<'a>>, b: Option<Best<'a>>) -> Option<Best<'a>> {
        match (a, b) {
            (Some(a), Some(b)) => {
                if b.cost < a.cost || (b.cost == a.cost && b.index < a.index) {
                    Some(b)
                } else {
                    Some(a)
                }
            }
            (a, None) => a,
            (None, b) => b,
        }
    }

    fn into_result(best: Option<Best<'a>>) -> LunchResult<'a> {
        match best {
            Some(best) => LunchResult::found(best.combo, reported_price(best.cost)),
            None => LunchResult::none(),
        }
    }
}

/// Scan a slice of the space in index order, keeping the first strictly cheapest lunch.
fn scan<'a>(
    space: &CombinationSpace<'a>,
    range: Range<usize>,
    intervals: &IntervalSet,
) -> (Option<Best<'a>>, SearchStats) {
    let mut best: Option<Best<'a>> = None;
    let mut stats = SearchStats::default();

    for (index, combo) in space.indexed(range) {
        stats.generated += 1;
        if !evaluate_lunch(&combo, intervals) {
            continue;
        }
        stats.feasible += 1;

        let cost = lunch_price(&combo);
        if best.is_none_or(|b| cost < b.cost) {
            best = Some(Best { index, combo, cost });
        }
    }

    (best, stats)
}

/// Find the cheapest lunch whose totals satisfy `intervals`, with search counters.
///
/// Every lunch is checked. Among feasible lunches with equal cost, the one
/// earliest in Cartesian order wins. The returned price is rounded to cents;
/// comparisons use the unrounded sum.
pub fn find_cheapest_feasible_with_stats<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
    intervals: &IntervalSet,
) -> (LunchResult<'a>, SearchStats) {
    let space = CombinationSpace::new(starters, mains, sides, desserts);
    let (best, stats) = scan(&space, 0..space.len(), intervals);

    debug!(
        generated = stats.generated,
        feasible = stats.feasible,
        found = best.is_some(),
        "lunch search finished"
    );

    (Best::into_result(best), stats)
}

/// Find the cheapest lunch whose totals satisfy `intervals`.
///
/// Returns [`LunchResult::none`] when no lunch is feasible, including when a
/// category has no items.
pub fn find_cheapest_feasible<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
    intervals: &IntervalSet,
) -> LunchResult<'a> {
    find_cheapest_feasible_with_stats(starters, mains, sides, desserts, intervals).0
}

/// Validate raw interval input, then search.
///
/// Validation errors are returned before any lunch is generated.
pub fn find_cheapest_feasible_checked<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
    raw_intervals: &Value,
) -> Result<LunchResult<'a>> {
    let intervals = IntervalSet::from_json(raw_intervals)?;
    Ok(find_cheapest_feasible(
        starters, mains, sides, desserts, &intervals,
    ))
}

/// Same result as [`find_cheapest_feasible_with_stats`], with one task per starter.
#[cfg(feature = "parallel")]
pub fn find_cheapest_feasible_parallel<'a>(
    starters: &[&'a MenuItem],
    mains: &[&'a MenuItem],
    sides: &[&'a MenuItem],
    desserts: &[&'a MenuItem],
    intervals: &IntervalSet,
) -> (LunchResult<'a>, SearchStats) {
    use rayon::prelude::*;

    let space = CombinationSpace::new(starters, mains, sides, desserts);
    let block = space.block_len();

    let (best, stats) = (0..space.starters().len())
        .into_par_iter()
        .map(|s| scan(&space, s * block..(s + 1) * block, intervals))
        .reduce(
            || (None, SearchStats::default()),
            |(best_a, stats_a), (best_b, stats_b)| {
                (Best::pick(best_a, best_b), stats_a.merge(stats_b))
            },
        );

    debug!(
        generated = stats.generated,
        feasible = stats.feasible,
        found = best.is_some(),
        "parallel lunch search finished"
    );

    (Best::into_result(best), stats)
}
