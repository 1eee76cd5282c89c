pub mod catalog;
pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod synth;

pub use error::{LunchError, Result};
pub use models::{Category, IntervalSet, LunchCombination, LunchResult, MenuItem};
