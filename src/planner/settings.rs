use std::fmt;

use log::{debug, warn};

use crate::config::SettingsFile;
use crate::error::{PlanError, Result};
use crate::models::{CalorieDistribution, Macro, MacroRatios};
use crate::planner::constants::{DEFAULT_MEALS_PER_DAY, MAX_MEALS_PER_DAY, THREE_MEAL_RATIOS};
use crate::planner::defaults::{default_calorie_distribution, default_macro_ratios};

/// Which ratio set an advisory warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatioKind {
    Calorie,
    Macro,
}

impl RatioKind {
    pub fn label(self) -> &'static str {
        match self {
            RatioKind::Calorie => "Calorie distribution",
            RatioKind::Macro => "Macronutrient",
        }
    }
}

/// Non-blocking notice that a ratio set does not sum to 100%.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioWarning {
    pub kind: RatioKind,
    pub sum: f64,
}

impl fmt::Display for RatioWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ratios total {:.1}% (should be 100%)",
            self.kind.label(),
            self.sum * 100.0
        )
    }
}

impl From<RatioWarning> for PlanError {
    fn from(w: RatioWarning) -> Self {
        PlanError::UnbalancedRatios {
            what: w.kind.label(),
            sum: w.sum,
        }
    }
}

/// Editable meal-plan settings: meal count plus both ratio sets.
#[derive(Debug, Clone, PartialEq)]
pub struct MealPlanSettings {
    meals_per_day: usize,
    calorie_ratios: CalorieDistribution,
    macro_ratios: MacroRatios,
}

impl Default for MealPlanSettings {
    fn default() -> Self {
        Self {
            meals_per_day: DEFAULT_MEALS_PER_DAY,
            calorie_ratios: CalorieDistribution::from_table(&THREE_MEAL_RATIOS),
            macro_ratios: default_macro_ratios(),
        }
    }
}

/// Reject meal counts above [`MAX_MEALS_PER_DAY`].
pub fn check_meal_count(meals_per_day: usize) -> Result<usize> {
    if meals_per_day > MAX_MEALS_PER_DAY {
        return Err(PlanError::InvalidInput(format!(
            "meals per day must be at most {}, got {}",
            MAX_MEALS_PER_DAY, meals_per_day
        )));
    }
    Ok(meals_per_day)
}

impl MealPlanSettings {
    /// Defaults for the given meal count.
    pub fn new(meals_per_day: usize) -> Result<Self> {
        let meals_per_day = check_meal_count(meals_per_day)?;
        Ok(Self {
            meals_per_day,
            calorie_ratios: default_calorie_distribution(meals_per_day)?,
            macro_ratios: default_macro_ratios(),
        })
    }

    /// Build settings from a settings file on top of the defaults.
    ///
    /// A configured calorie distribution must have one entry per meal. When the
    /// file omits `meals_per_day`, the distribution's length decides it.
    pub fn from_file(file: &SettingsFile) -> Result<Self> {
        let meals = file
            .meals_per_day
            .or_else(|| file.calorie_distribution_ratios.as_ref().map(|d| d.len()))
            .unwrap_or(DEFAULT_MEALS_PER_DAY);

        let mut settings = Self::new(meals)?;
        if let Some(dist) = &file.calorie_distribution_ratios {
            settings.replace_calorie_ratios(dist.clone())?;
        }
        if let Some(macros) = file.target_macro_ratios {
            settings.replace_macro_ratios(macros);
        }
        Ok(settings)
    }

    #[inline]
    pub fn meals_per_day(&self) -> usize {
        self.meals_per_day
    }

    #[inline]
    pub fn calorie_ratios(&self) -> &CalorieDistribution {
        &self.calorie_ratios
    }

    #[inline]
    pub fn macro_ratios(&self) -> &MacroRatios {
        &self.macro_ratios
    }

    /// Change the meal count. Calorie ratios are regenerated from defaults.
    pub fn set_meals_per_day(&mut self, meals_per_day: usize) -> Result<()> {
        let meals_per_day = check_meal_count(meals_per_day)?;
        self.calorie_ratios = default_calorie_distribution(meals_per_day)?;
        self.meals_per_day = meals_per_day;
        debug!(
            "Meals per day set to {}, calorie ratios reset to {:?}",
            meals_per_day,
            self.calorie_ratios.as_slice()
        );
        Ok(())
    }

    pub fn set_calorie_ratio(&mut self, index: usize, value: f64) -> Result<()> {
        self.calorie_ratios.set(index, value)
    }

    /// Replace all calorie ratios; the length must match the meal count.
    pub fn replace_calorie_ratios(&mut self, ratios: CalorieDistribution) -> Result<()> {
        if ratios.len() != self.meals_per_day {
            return Err(PlanError::DistributionLength {
                expected: self.meals_per_day,
                actual: ratios.len(),
            });
        }
        self.calorie_ratios = ratios;
        Ok(())
    }

    pub fn set_macro_ratio(&mut self, which: Macro, value: f64) -> Result<()> {
        self.macro_ratios.set(which, value)
    }

    pub fn replace_macro_ratios(&mut self, ratios: MacroRatios) {
        self.macro_ratios = ratios;
    }

    pub fn reset_calorie_ratios(&mut self) -> Result<()> {
        self.calorie_ratios = default_calorie_distribution(self.meals_per_day)?;
        Ok(())
    }

    pub fn reset_macro_ratios(&mut self) {
        self.macro_ratios = default_macro_ratios();
    }

    /// Advisory warnings for ratio sets that do not sum to 1.0.
    pub fn warnings(&self) -> Vec<RatioWarning> {
        let mut warnings = Vec::new();
        if !self.calorie_ratios.is_balanced() {
            warnings.push(RatioWarning {
                kind: RatioKind::Calorie,
                sum: self.calorie_ratios.sum(),
            });
        }
        if !self.macro_ratios.is_balanced() {
            warnings.push(RatioWarning {
                kind: RatioKind::Macro,
                sum: self.macro_ratios.sum(),
            });
        }
        for w in &warnings {
            warn!("{}", w);
        }
        warnings
    }
}
