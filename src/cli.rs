use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::planner::constants::MAX_MEALS_PER_DAY;

/// meal-ratios: default calorie and macro ratios for meal planning.
#[derive(Parser, Debug)]
#[command(name = "meal-ratios")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Optional JSON settings file with ratio overrides.
    #[arg(short, long, global = true)]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the default calorie distribution and macro split.
    Defaults {
        /// Number of meals per day.
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u32).range(1..=MAX_MEALS_PER_DAY as i64))]
        meals: u32,
    },

    /// Build a meal suggestion request and print it as JSON.
    Request {
        /// Total calories per day.
        #[arg(short, long)]
        calories: String,

        /// Number of meals per day (overrides the settings file).
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=MAX_MEALS_PER_DAY as i64))]
        meals: Option<u32>,

        /// Calorie ratios per meal, comma-separated (e.g. 0.25,0.4,0.35).
        #[arg(short, long)]
        ratios: Option<String>,

        /// Macro overrides, e.g. fat=0.3,carb=0.45,protein=0.25.
        #[arg(long)]
        macros: Option<String>,

        /// Fail when ratios do not sum to 100%.
        #[arg(long)]
        strict: bool,

        /// Also write a per-meal breakdown to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Fill in the meal suggestion form interactively.
    Interactive {
        /// Fail when ratios do not sum to 100%.
        #[arg(long)]
        strict: bool,
    },

    /// Show a saved meal suggestion reply.
    Show {
        /// Path to the JSON reply.
        file: PathBuf,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Interactive { strict: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_count_bounds() {
        let cli = Cli::try_parse_from(["meal-ratios", "defaults", "--meals", "12"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Defaults { meals: 12 })));

        for bad in ["0", "13", "4000000000"] {
            assert!(
                Cli::try_parse_from(["meal-ratios", "defaults", "--meals", bad]).is_err(),
                "accepted --meals {}",
                bad
            );
        }
        assert!(
            Cli::try_parse_from(["meal-ratios", "request", "-c", "2000", "-m", "99"]).is_err()
        );
    }
}
