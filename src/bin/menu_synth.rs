use std::path::PathBuf;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use lunch_menu_rs::catalog::save_meals;
use lunch_menu_rs::logging::init_logging;
use lunch_menu_rs::synth::{random_catalog, SynthConfig};

#[derive(Parser, Debug)]
#[command(name = "menu-synth")]
#[command(about = "Generate a reproducible random menu for the lunch optimizer")]
struct Args {
    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Items per category
    #[arg(long, default_value = "6")]
    per_category: usize,

    /// Output meals CSV file
    #[arg(long, default_value = "meals.csv")]
    out: PathBuf,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Lunches a menu with `per_category` items in each category allows, if it fits.
fn lunch_count(per_category: usize) -> Option<usize> {
    per_category.checked_pow(4)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = SynthConfig {
        per_category: args.per_category,
        ..Default::default()
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let items = random_catalog(&mut rng, &config);
    info!(seed = args.seed, items = items.len(), "generated menu");

    if let Err(e) = save_meals(&args.out, &items) {
        eprintln!("Error writing meals to {:?}: {}", args.out, e);
        std::process::exit(1);
    }

    match lunch_count(args.per_category) {
        Some(lunches) => println!(
            "Wrote {} items ({} lunches) to {:?}",
            items.len(),
            lunches,
            args.out
        ),
        None => println!("Wrote {} items to {:?}", items.len(), args.out),
    }
}
