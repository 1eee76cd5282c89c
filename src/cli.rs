use clap::{Parser, Subcommand};

/// LunchMenu — finds the cheapest lunch that fits nutrient and price limits.
#[derive(Parser, Debug)]
#[command(name = "lunch-menu")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meals CSV file.
    #[arg(short, long, default_value = "data/meals.csv", global = true)]
    pub meals: String,

    /// Path to the interval file (`.json` or `name,low,high` text).
    #[arg(short, long, default_value = "data/intervals.txt", global = true)]
    pub intervals: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Find the cheapest lunch within the limits.
    #[default]
    Solve,

    /// List the lunch combinations the menu allows.
    Combos {
        /// Show at most this many combinations.
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Validate the interval file and print its limits.
    Check,

    /// Enter limits interactively and save them as JSON.
    Bounds {
        /// Where to write the limits.
        #[arg(short, long, default_value = "intervals.json")]
        out: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults_to_solve() {
        let cli = Cli::try_parse_from(["lunch-menu", "-vv"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Solve));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.meals, "data/meals.csv");
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["lunch-menu", "combos", "--limit", "5", "--json", "-m", "x.csv"])
                .unwrap();
        assert!(cli.json);
        assert_eq!(cli.meals, "x.csv");
        assert!(matches!(cli.command, Some(Command::Combos { limit: 5 })));
    }
}
