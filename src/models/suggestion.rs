use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// A nutrient line on a suggested meal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealNutrient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    /// Share of the daily reference value, in percent.
    pub percentage: f64,
}

/// Ingredients arrive either as plain names or as objects with a `name` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MealIngredient {
    Name(String),
    Detailed { name: String },
}

impl MealIngredient {
    pub fn name(&self) -> &str {
        match self {
            MealIngredient::Name(name) | MealIngredient::Detailed { name } => name,
        }
    }
}

/// One meal card returned by the suggestion service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSuggestion {
    pub meal_name: String,
    pub calories: f64,
    pub time: String,
    pub description: String,

    /// `data:image/...;base64,` URL. An empty string means no image.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub ingredients: Vec<MealIngredient>,

    #[serde(default)]
    pub nutrients: Vec<MealNutrient>,

    /// Total mass in grams.
    #[serde(default)]
    pub mass: Option<f64>,
}

fn empty_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

/// Load a suggestion reply (a JSON array of meals) saved to disk.
pub fn load_suggestions<P: AsRef<Path>>(path: P) -> Result<Vec<MealSuggestion>> {
    let content = fs::read_to_string(path)?;
    let meals: Vec<MealSuggestion> = serde_json::from_str(&content)?;
    Ok(meals)
}
