pub mod cli;
pub mod config;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;

pub use error::{PlanError, Result};
pub use models::{CalorieDistribution, Macro, MacroRatios, MealSuggestion};
pub use planner::{default_calorie_distribution, default_macro_ratios};
