pub mod prompts;
pub mod render;

pub use prompts::{collect_intervals, prompt_interval, prompt_yes_no};
pub use render::{display_combinations, display_intervals, display_item_list, display_lunch};
