pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_breakdown_csv;
pub use prompts::{
    collect_meal_plan_form, edit_settings, form_settings, prompt_meals_per_day, prompt_ratio,
    prompt_total_calories, prompt_yes_no,
};
pub use render::{
    display_calorie_ratios, display_macro_ratios, display_request, display_settings,
    display_suggestions,
};
