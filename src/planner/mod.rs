pub mod constants;
pub mod defaults;
pub mod request;
pub mod settings;

pub use constants::*;
pub use defaults::{
    default_calorie_distribution, default_macro_ratios, is_supported_meal_count,
    DEFAULT_MACRO_RATIOS,
};
pub use request::{build_request, parse_total_calories, BuiltRequest, RatioPolicy, SuggestionRequest};
pub use settings::{MealPlanSettings, RatioKind, RatioWarning};
