use log::info;
use serde::Serialize;

use crate::error::{PlanError, Result};
use crate::models::{CalorieDistribution, MacroRatios};
use crate::planner::settings::{MealPlanSettings, RatioWarning};

/// How unbalanced ratio sets are treated when building a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RatioPolicy {
    /// Log a warning and send the request anyway.
    #[default]
    Advisory,
    /// Refuse to build the request.
    Strict,
}

impl RatioPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            RatioPolicy::Strict
        } else {
            RatioPolicy::Advisory
        }
    }
}

/// Body of a meal suggestion request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionRequest {
    pub total_calories: f64,
    pub meals_per_day: usize,
    pub calorie_distribution_ratios: CalorieDistribution,
    pub target_macro_ratios: MacroRatios,
}

impl SuggestionRequest {
    /// Calories assigned to each meal slot.
    pub fn per_meal_calories(&self) -> Vec<f64> {
        self.calorie_distribution_ratios
            .per_meal_calories(self.total_calories)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A built request together with any advisory warnings it carried.
#[derive(Debug, Clone)]
pub struct BuiltRequest {
    pub request: SuggestionRequest,
    pub warnings: Vec<RatioWarning>,
}

/// Parse the daily calorie total typed into the form.
pub fn parse_total_calories(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(PlanError::InvalidInput(
            "Please enter a total calorie amount".to_string(),
        ));
    }

    let total: f64 = trimmed
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", trimmed)))?;

    validate_total_calories(total)
}

fn validate_total_calories(total: f64) -> Result<f64> {
    if total.is_finite() && total > 0.0 {
        Ok(total)
    } else {
        Err(PlanError::InvalidInput(format!(
            "Total calories must be positive, got {}",
            total
        )))
    }
}

/// Assemble a suggestion request from the current settings.
pub fn build_request(
    total_calories: f64,
    settings: &MealPlanSettings,
    policy: RatioPolicy,
) -> Result<BuiltRequest> {
    let total_calories = validate_total_calories(total_calories)?;

    let warnings = settings.warnings();
    if policy == RatioPolicy::Strict {
        if let Some(first) = warnings.first() {
            return Err((*first).into());
        }
    }

    let request = SuggestionRequest {
        total_calories,
        meals_per_day: settings.calorie_ratios().len(),
        calorie_distribution_ratios: settings.calorie_ratios().clone(),
        target_macro_ratios: *settings.macro_ratios(),
    };
    info!(
        "Built suggestion request: {:.0} kcal over {} meals",
        request.total_calories, request.meals_per_day
    );

    Ok(BuiltRequest { request, warnings })
}
