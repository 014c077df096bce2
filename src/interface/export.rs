use std::path::Path;

use crate::error::Result;
use crate::planner::request::SuggestionRequest;

/// Round to n decimal places.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write the per-meal calorie and macro breakdown of a request to CSV.
pub fn write_breakdown_csv(request: &SuggestionRequest, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["meal", "ratio", "calories", "fat_kcal", "carb_kcal", "protein_kcal"])?;

    let ratios = request.calorie_distribution_ratios.as_slice();
    for (i, (ratio, kcal)) in ratios
        .iter()
        .zip(request.per_meal_calories())
        .enumerate()
    {
        let [fat, carb, protein] = request.target_macro_ratios.calories_for(kcal);
        wtr.write_record([
            (i + 1).to_string(),
            format!("{:.3}", ratio),
            format!("{:.1}", round_to(kcal, 1)),
            format!("{:.1}", round_to(fat, 1)),
            format!("{:.1}", round_to(carb, 1)),
            format!("{:.1}", round_to(protein, 1)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
