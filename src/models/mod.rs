mod interval;
mod item;
mod lunch;

pub use interval::{Interval, IntervalSet, Limit, NumericKind};
pub use item::{Category, MenuItem, ServingStats};
pub use lunch::{LunchCombination, LunchResult};
