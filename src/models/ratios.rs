use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{PlanError, Result};
use crate::planner::constants::RATIO_SUM_TOLERANCE;

/// Check that a single ratio is finite and within [0, 1].
pub fn validate_ratio(value: f64) -> Result<f64> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(PlanError::InvalidRatio(value))
    }
}

/// Whether a ratio sum is within tolerance of 1.0.
#[inline]
pub fn is_unit_sum(sum: f64) -> bool {
    (sum - 1.0).abs() <= RATIO_SUM_TOLERANCE
}

/// Share of daily calories per meal slot, in meal order.
///
/// Every entry is a finite fraction in [0, 1]. The sum is expected to be close
/// to 1.0 but this is not enforced here; see [`CalorieDistribution::is_balanced`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CalorieDistribution(Vec<f64>);

impl CalorieDistribution {
    /// Build a distribution, rejecting empty input and out-of-range entries.
    pub fn new(ratios: Vec<f64>) -> Result<Self> {
        if ratios.is_empty() {
            return Err(PlanError::InvalidArgument(
                "calorie distribution needs at least one meal".to_string(),
            ));
        }
        for &r in &ratios {
            validate_ratio(r)?;
        }
        Ok(Self(ratios))
    }

    /// Like [`CalorieDistribution::new`], but also requires exactly `expected` entries.
    pub fn with_len(ratios: Vec<f64>, expected: usize) -> Result<Self> {
        if ratios.len() != expected {
            return Err(PlanError::DistributionLength {
                expected,
                actual: ratios.len(),
            });
        }
        Self::new(ratios)
    }

    /// Uniform split across `meals` slots. Caller guarantees `meals > 0`.
    pub(crate) fn uniform(meals: usize) -> Self {
        Self(vec![1.0 / meals as f64; meals])
    }

    pub(crate) fn from_table(table: &[f64]) -> Self {
        Self(table.to_vec())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    /// Overwrite the ratio of one meal slot.
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(PlanError::IndexOutOfRange { index, len })?;
        *slot = validate_ratio(value)?;
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// True when the ratios sum to 1.0 within [`RATIO_SUM_TOLERANCE`].
    pub fn is_balanced(&self) -> bool {
        is_unit_sum(self.sum())
    }

    /// Calories assigned to each meal for a daily total.
    pub fn per_meal_calories(&self, total_calories: f64) -> Vec<f64> {
        self.0.iter().map(|r| r * total_calories).collect()
    }
}

impl<'de> Deserialize<'de> for CalorieDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let ratios = Vec::<f64>::deserialize(deserializer)?;
        Self::new(ratios).map_err(serde::de::Error::custom)
    }
}

/// One of the three tracked macronutrients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Macro {
    Fat,
    Carb,
    Protein,
}

impl Macro {
    pub const ALL: [Macro; 3] = [Macro::Fat, Macro::Carb, Macro::Protein];

    /// Key used in request payloads and settings files.
    pub fn key(self) -> &'static str {
        match self {
            Macro::Fat => "fat",
            Macro::Carb => "carb",
            Macro::Protein => "protein",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Macro::Fat => "Fat",
            Macro::Carb => "Carbohydrates",
            Macro::Protein => "Protein",
        }
    }
}

impl fmt::Display for Macro {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Target split of calories between fat, carbohydrate and protein.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatios {
    fat: f64,
    carb: f64,
    protein: f64,
}

impl MacroRatios {
    pub fn new(fat: f64, carb: f64, protein: f64) -> Result<Self> {
        Ok(Self {
            fat: validate_ratio(fat)?,
            carb: validate_ratio(carb)?,
            protein: validate_ratio(protein)?,
        })
    }

    /// Constant constructor for values known to be in range.
    pub(crate) const fn from_parts(fat: f64, carb: f64, protein: f64) -> Self {
        Self { fat, carb, protein }
    }

    #[inline]
    pub fn fat(&self) -> f64 {
        self.fat
    }

    #[inline]
    pub fn carb(&self) -> f64 {
        self.carb
    }

    #[inline]
    pub fn protein(&self) -> f64 {
        self.protein
    }

    pub fn get(&self, which: Macro) -> f64 {
        match which {
            Macro::Fat => self.fat,
            Macro::Carb => self.carb,
            Macro::Protein => self.protein,
        }
    }

    pub fn set(&mut self, which: Macro, value: f64) -> Result<()> {
        let value = validate_ratio(value)?;
        match which {
            Macro::Fat => self.fat = value,
            Macro::Carb => self.carb = value,
            Macro::Protein => self.protein = value,
        }
        Ok(())
    }

    pub fn sum(&self) -> f64 {
        self.fat + self.carb + self.protein
    }

    pub fn is_balanced(&self) -> bool {
        is_unit_sum(self.sum())
    }

    /// Calories attributed to each macro, in [`Macro::ALL`] order.
    pub fn calories_for(&self, calories: f64) -> [f64; 3] {
        [
            self.fat * calories,
            self.carb * calories,
            self.protein * calories,
        ]
    }
}

#[derive(Deserialize)]
struct RawMacroRatios {
    fat: f64,
    carb: f64,
    protein: f64,
}

impl<'de> Deserialize<'de> for MacroRatios {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = RawMacroRatios::deserialize(deserializer)?;
        Self::new(raw.fat, raw.carb, raw.protein).map_err(serde::de::Error::custom)
    }
}
