use log::debug;

use crate::error::{PlanError, Result};
use crate::models::{CalorieDistribution, MacroRatios};
use crate::planner::constants::*;

/// Default macro split: 30% fat, 45% carbohydrate, 25% protein.
pub const DEFAULT_MACRO_RATIOS: MacroRatios =
    MacroRatios::from_parts(DEFAULT_FAT_RATIO, DEFAULT_CARB_RATIO, DEFAULT_PROTEIN_RATIO);

/// Default share of daily calories for each of `meal_count` meals.
///
/// Two, three and four meals use fixed tables that favour a lighter first meal.
/// Any other positive count is split evenly. Zero meals is rejected.
pub fn default_calorie_distribution(meal_count: usize) -> Result<CalorieDistribution> {
    let distribution = match meal_count {
        0 => {
            return Err(PlanError::InvalidArgument(
                "meal count must be at least 1".to_string(),
            ));
        }
        2 => CalorieDistribution::from_table(&TWO_MEAL_RATIOS),
        3 => CalorieDistribution::from_table(&THREE_MEAL_RATIOS),
        4 => CalorieDistribution::from_table(&FOUR_MEAL_RATIOS),
        n => {
            debug!("No calorie table for {} meals, using uniform split", n);
            CalorieDistribution::uniform(n)
        }
    };
    Ok(distribution)
}

/// Default macro-nutrient split.
#[inline]
pub fn default_macro_ratios() -> MacroRatios {
    DEFAULT_MACRO_RATIOS
}

/// Whether the planning form offers `meal_count` as a choice.
pub fn is_supported_meal_count(meal_count: usize) -> bool {
    SUPPORTED_MEAL_COUNTS.contains(&meal_count)
}
