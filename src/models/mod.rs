pub mod ratios;
pub mod suggestion;

pub use ratios::{CalorieDistribution, Macro, MacroRatios};
pub use suggestion::{load_suggestions, MealIngredient, MealNutrient, MealSuggestion};
