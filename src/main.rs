use clap::Parser;

use meal_ratio_planner::cli::{Cli, Command};
use meal_ratio_planner::config::{load_settings, resolve_settings, RatioOverrides, SettingsFile};
use meal_ratio_planner::error::Result;
use meal_ratio_planner::interface::{
    collect_meal_plan_form, display_calorie_ratios, display_macro_ratios, display_request,
    display_suggestions, write_breakdown_csv,
};
use meal_ratio_planner::models::load_suggestions;
use meal_ratio_planner::planner::{
    build_request, default_calorie_distribution, default_macro_ratios, is_supported_meal_count,
    parse_total_calories, RatioPolicy,
};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let file = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SettingsFile::default(),
    };

    match cli.command.unwrap_or_default() {
        Command::Defaults { meals } => cmd_defaults(meals as usize),
        Command::Request {
            calories,
            meals,
            ratios,
            macros,
            strict,
            csv,
        } => {
            let overrides = RatioOverrides {
                meals: meals.map(|m| m as usize),
                ratios,
                macros,
            };
            let settings = resolve_settings(&file, &overrides)?;
            let total = parse_total_calories(&calories)?;
            let policy = RatioPolicy::from_strict(strict || file.strict);

            let built = build_request(total, &settings, policy)?;
            display_request(&built)?;

            if let Some(path) = csv {
                write_breakdown_csv(&built.request, &path)?;
                println!("Breakdown written to {}", path.display());
            }
            Ok(())
        }
        Command::Interactive { strict } => cmd_interactive(&file, strict || file.strict),
        Command::Show { file: reply } => {
            let meals = load_suggestions(&reply)?;
            display_suggestions(&meals);
            Ok(())
        }
    }
}

/// Print the default ratios for a meal count.
fn cmd_defaults(meals: usize) -> Result<()> {
    let distribution = default_calorie_distribution(meals)?;

    println!();
    if is_supported_meal_count(meals) {
        println!("=== Default Ratios ({} meals) ===", meals);
    } else {
        println!("=== Default Ratios ({} meals, uniform split) ===", meals);
    }
    println!();
    println!("Calorie Distribution Ratios");
    display_calorie_ratios(&distribution);
    println!();
    println!("Macronutrient Target Ratios");
    display_macro_ratios(&default_macro_ratios());
    println!();

    Ok(())
}

/// Fill in the form, starting from the settings file, then print the resulting request.
fn cmd_interactive(file: &SettingsFile, strict: bool) -> Result<()> {
    let (total, settings) = collect_meal_plan_form(file)?;
    let built = build_request(total, &settings, RatioPolicy::from_strict(strict))?;

    println!();
    display_request(&built)
}
