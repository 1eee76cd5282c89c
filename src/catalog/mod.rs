mod menu;
mod persistence;

pub use menu::Catalog;
pub use persistence::{
    load_intervals, load_meals, parse_interval_text, save_intervals, save_meals,
};
