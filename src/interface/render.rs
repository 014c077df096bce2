use crate::error::Result;
use crate::models::{CalorieDistribution, Macro, MacroRatios, MealSuggestion};
use crate::planner::request::BuiltRequest;
use crate::planner::settings::MealPlanSettings;

fn percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

fn total_line(sum: f64, balanced: bool) -> String {
    let warning = if balanced { "" } else { " (Should be 100%)" };
    format!("Total: {:.1}%{}", sum * 100.0, warning)
}

/// Print calorie ratios one meal per line, with their total.
pub fn display_calorie_ratios(ratios: &CalorieDistribution) {
    for (i, ratio) in ratios.as_slice().iter().enumerate() {
        println!("  Meal {}: {:.2} ({})", i + 1, ratio, percent(*ratio));
    }
    println!("  {}", total_line(ratios.sum(), ratios.is_balanced()));
}

/// Print macro ratios with their total.
pub fn display_macro_ratios(ratios: &MacroRatios) {
    let width = Macro::ALL.iter().map(|m| m.label().len()).max().unwrap_or(8);
    for m in Macro::ALL {
        let value = ratios.get(m);
        println!(
            "  {:<width$}  {:.2} ({})",
            format!("{}:", m.label()),
            value,
            percent(value),
            width = width + 1
        );
    }
    println!("  {}", total_line(ratios.sum(), ratios.is_balanced()));
}

/// Print the current meal-plan settings.
pub fn display_settings(settings: &MealPlanSettings) {
    println!();
    println!("=== Meal Plan Settings ({} meals) ===", settings.meals_per_day());
    println!();
    println!("Calorie Distribution Ratios");
    display_calorie_ratios(settings.calorie_ratios());
    println!();
    println!("Macronutrient Target Ratios");
    display_macro_ratios(settings.macro_ratios());
    println!();
}

/// Print a built request as JSON, followed by the per-meal calorie split.
pub fn display_request(built: &BuiltRequest) -> Result<()> {
    let request = &built.request;

    println!("{}", request.to_json_pretty()?);
    println!();
    println!("--- Per Meal ---");
    for (i, kcal) in request.per_meal_calories().iter().enumerate() {
        println!("  Meal {}: {:>6.0} kcal", i + 1, kcal);
    }

    if !built.warnings.is_empty() {
        println!();
        for w in &built.warnings {
            println!("Warning: {}", w);
        }
    }
    println!();
    Ok(())
}

/// Print suggested meals as cards.
pub fn display_suggestions(meals: &[MealSuggestion]) {
    if meals.is_empty() {
        println!("No meal suggestions.");
        return;
    }

    println!();
    println!("=== Suggested Meal Plan ({} meals) ===", meals.len());

    for meal in meals {
        println!();
        println!("{} ({})", meal.meal_name, meal.time);
        println!("  {}", meal.description);

        if !meal.ingredients.is_empty() {
            let names: Vec<&str> = meal.ingredients.iter().map(|i| i.name()).collect();
            println!("  Ingredients: {}", names.join(", "));
        }

        if !meal.nutrients.is_empty() {
            println!("  Nutrients:");
            for n in &meal.nutrients {
                println!(
                    "    {}: {:.1} {} ({:.1}%)",
                    n.name, n.amount, n.unit, n.percentage
                );
            }
        }

        match meal.mass {
            Some(mass) => println!("  {:.0} kcal ({:.0}g)", meal.calories, mass),
            None => println!("  {:.0} kcal", meal.calories),
        }
    }

    let total: f64 = meals.iter().map(|m| m.calories).sum();
    println!();
    println!("--- Summary ---");
    println!("Total calories: {:.0}", total);
    println!();
}
