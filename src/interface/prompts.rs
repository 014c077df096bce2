use dialoguer::{Confirm, Input, Select};

use crate::config::{resolve_settings, RatioOverrides, SettingsFile};
use crate::error::{PlanError, Result};
use crate::models::Macro;
use crate::planner::constants::SUPPORTED_MEAL_COUNTS;
use crate::planner::request::parse_total_calories;
use crate::planner::settings::MealPlanSettings;

use super::render::display_settings;

/// Prompt for the daily calorie total, re-asking until it parses.
pub fn prompt_total_calories() -> Result<f64> {
    loop {
        let input: String = Input::new()
            .with_prompt("Total calories per day (e.g. 2000)")
            .interact_text()?;

        match parse_total_calories(&input) {
            Ok(total) => return Ok(total),
            Err(e) => println!("{}", e),
        }
    }
}

/// Prompt for the number of meals, limited to the counts the planner offers.
///
/// `preferred` is pre-selected when it is one of the offered counts.
pub fn prompt_meals_per_day(preferred: usize) -> Result<usize> {
    let options: Vec<String> = SUPPORTED_MEAL_COUNTS
        .iter()
        .map(|n| format!("{} Meals", n))
        .collect();
    let default = SUPPORTED_MEAL_COUNTS
        .iter()
        .position(|&n| n == preferred)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Number of meals per day")
        .items(&options)
        .default(default)
        .interact()?;

    Ok(SUPPORTED_MEAL_COUNTS[selection])
}

/// Prompt for a single ratio in [0, 1].
pub fn prompt_ratio(label: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(label)
        .default(format!("{:.2}", current))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", input.trim())))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

const EDIT_CALORIES: usize = 0;
const EDIT_MACROS: usize = 1;
const RESET_CALORIES: usize = 2;
const RESET_MACROS: usize = 3;

/// Settings menu: edit or reset ratios until the user is done.
///
/// Invalid entries are reported and leave the previous value in place.
pub fn edit_settings(settings: &mut MealPlanSettings) -> Result<()> {
    let options = [
        "Edit calorie distribution",
        "Edit macronutrient targets",
        "Reset calorie distribution to defaults",
        "Reset macronutrient targets to defaults",
        "Save & close",
    ];

    loop {
        display_settings(settings);

        let selection = Select::new()
            .with_prompt("Meal plan settings")
            .items(&options)
            .default(options.len() - 1)
            .interact()?;

        match selection {
            EDIT_CALORIES => {
                for i in 0..settings.meals_per_day() {
                    let current = settings.calorie_ratios().get(i).unwrap_or(0.0);
                    let result = prompt_ratio(&format!("Meal {}", i + 1), current)
                        .and_then(|v| settings.set_calorie_ratio(i, v));
                    if let Err(e) = result {
                        println!("{}", e);
                    }
                }
            }
            EDIT_MACROS => {
                for m in Macro::ALL {
                    let current = settings.macro_ratios().get(m);
                    let result =
                        prompt_ratio(m.label(), current).and_then(|v| settings.set_macro_ratio(m, v));
                    if let Err(e) = result {
                        println!("{}", e);
                    }
                }
            }
            RESET_CALORIES => settings.reset_calorie_ratios()?,
            RESET_MACROS => settings.reset_macro_ratios(),
            _ => break,
        }
    }

    Ok(())
}

/// Settings the form starts from once a meal count is chosen.
///
/// Ratios from the settings file are kept unless the chosen count differs from
/// the file's, in which case the calorie ratios fall back to that count's defaults.
pub fn form_settings(file: &SettingsFile, meals: usize) -> Result<MealPlanSettings> {
    let overrides = RatioOverrides {
        meals: Some(meals),
        ..Default::default()
    };
    resolve_settings(file, &overrides)
}

/// Collect everything the suggestion form asks for.
///
/// Returns the calorie total and the settings to submit.
pub fn collect_meal_plan_form(file: &SettingsFile) -> Result<(f64, MealPlanSettings)> {
    let configured = MealPlanSettings::from_file(file)?;

    let total = prompt_total_calories()?;
    let meals = prompt_meals_per_day(configured.meals_per_day())?;
    let mut settings = form_settings(file, meals)?;

    if prompt_yes_no("Adjust calorie or macro ratios?", false)? {
        edit_settings(&mut settings)?;
    }

    Ok((total, settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CalorieDistribution, MacroRatios};

    fn configured_file() -> SettingsFile {
        SettingsFile {
            meals_per_day: Some(2),
            calorie_distribution_ratios: Some(CalorieDistribution::new(vec![0.3, 0.7]).unwrap()),
            target_macro_ratios: Some(MacroRatios::new(0.2, 0.5, 0.3).unwrap()),
            strict: false,
        }
    }

    #[test]
    fn test_form_keeps_configured_ratios() {
        let settings = form_settings(&configured_file(), 2).unwrap();
        assert_eq!(settings.calorie_ratios().as_slice(), &[0.3, 0.7]);
        assert_eq!(settings.macro_ratios().fat(), 0.2);
        assert_eq!(settings.macro_ratios().carb(), 0.5);
    }

    #[test]
    fn test_form_meal_change_keeps_configured_macros() {
        let settings = form_settings(&configured_file(), 4).unwrap();
        assert_eq!(settings.meals_per_day(), 4);
        assert_eq!(
            settings.calorie_ratios().as_slice(),
            &[0.20, 0.15, 0.35, 0.30]
        );
        assert_eq!(settings.macro_ratios().protein(), 0.3);
    }

    #[test]
    fn test_form_without_settings_file() {
        let settings = form_settings(&SettingsFile::default(), 3).unwrap();
        assert_eq!(settings, MealPlanSettings::default());
    }
}
