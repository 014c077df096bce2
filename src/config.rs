use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;
use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::models::{CalorieDistribution, Macro, MacroRatios};
use crate::planner::constants::MACRO_MATCH_THRESHOLD;
use crate::planner::settings::MealPlanSettings;

/// Optional meal-plan settings read from a JSON file.
///
/// All fields may be omitted. The file is only read, never written back.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    pub meals_per_day: Option<usize>,

    pub calorie_distribution_ratios: Option<CalorieDistribution>,

    pub target_macro_ratios: Option<MacroRatios>,

    /// Reject unbalanced ratios instead of warning about them.
    #[serde(default)]
    pub strict: bool,
}

/// Load a settings file.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<SettingsFile> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let settings: SettingsFile = serde_json::from_str(&content)?;
    debug!("Loaded settings from {}: {:?}", path.display(), settings);
    Ok(settings)
}

/// Resolve a macro name typed by the user.
///
/// Case-insensitive; accepts `carbs` and `carbohydrate(s)` for `carb`.
pub fn parse_macro_key(input: &str) -> Result<Macro> {
    let key = input.trim().to_lowercase();
    match key.as_str() {
        "fat" | "fats" => return Ok(Macro::Fat),
        "carb" | "carbs" | "carbohydrate" | "carbohydrates" => return Ok(Macro::Carb),
        "protein" | "proteins" => return Ok(Macro::Protein),
        _ => {}
    }

    let closest = Macro::ALL
        .iter()
        .map(|m| (*m, jaro_winkler(m.key(), &key)))
        .filter(|(_, score)| *score > MACRO_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    Err(PlanError::UnknownMacro {
        given: input.trim().to_string(),
        hint: closest
            .map(|(m, _)| format!(" (did you mean '{}'?)", m))
            .unwrap_or_default(),
    })
}

fn parse_ratio(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    trimmed
        .parse()
        .map_err(|_| PlanError::InvalidInput(format!("'{}' is not a number", trimmed)))
}

/// Parse a comma-separated list of calorie ratios, e.g. `0.25,0.4,0.35`.
pub fn parse_ratio_list(input: &str) -> Result<Vec<f64>> {
    input.split(',').map(parse_ratio).collect()
}

/// Parse macro overrides of the form `fat=0.3,carb=0.45`.
pub fn parse_macro_overrides(input: &str) -> Result<Vec<(Macro, f64)>> {
    input
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(|part| {
            let (key, value) = part.split_once('=').ok_or_else(|| {
                PlanError::InvalidInput(format!("expected name=value, got '{}'", part.trim()))
            })?;
            Ok((parse_macro_key(key)?, parse_ratio(value)?))
        })
        .collect()
}

/// Command-line overrides applied on top of a settings file.
#[derive(Debug, Clone, Default)]
pub struct RatioOverrides {
    pub meals: Option<usize>,
    /// Comma-separated calorie ratios.
    pub ratios: Option<String>,
    /// Macro overrides as `name=value` pairs.
    pub macros: Option<String>,
}

/// Layer command-line overrides on top of the settings file.
///
/// An explicit meal count resets the calorie ratios to its defaults. A ratio
/// list without a meal count sets the meal count to its length.
pub fn resolve_settings(file: &SettingsFile, overrides: &RatioOverrides) -> Result<MealPlanSettings> {
    let mut settings = MealPlanSettings::from_file(file)?;

    if let Some(meals) = overrides.meals {
        if meals != settings.meals_per_day() {
            settings.set_meals_per_day(meals)?;
        }
    }

    if let Some(list) = &overrides.ratios {
        let ratios = CalorieDistribution::new(parse_ratio_list(list)?)?;
        if overrides.meals.is_none() && ratios.len() != settings.meals_per_day() {
            settings.set_meals_per_day(ratios.len())?;
        }
        settings.replace_calorie_ratios(ratios)?;
    }

    if let Some(spec) = &overrides.macros {
        for (which, value) in parse_macro_overrides(spec)? {
            settings.set_macro_ratio(which, value)?;
        }
    }

    debug!("Resolved settings: {:?}", settings);
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_settings() {
        let json = r#"{
            "meals_per_day": 2,
            "calorie_distribution_ratios": [0.5, 0.5],
            "target_macro_ratios": {"fat": 0.2, "carb": 0.5, "protein": 0.3},
            "strict": true
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings.meals_per_day, Some(2));
        assert_eq!(
            settings.calorie_distribution_ratios.unwrap().as_slice(),
            &[0.5, 0.5]
        );
        assert_eq!(settings.target_macro_ratios.unwrap().carb(), 0.5);
        assert!(settings.strict);
    }

    #[test]
    fn test_load_empty_settings() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let settings = load_settings(file.path()).unwrap();
        assert_eq!(settings, SettingsFile::default());
    }

    #[test]
    fn test_settings_reject_unknown_and_invalid() {
        let mut unknown = NamedTempFile::new().unwrap();
        unknown.write_all(br#"{"meals": 3}"#).unwrap();
        assert!(matches!(
            load_settings(unknown.path()),
            Err(PlanError::Json(_))
        ));

        let mut bad_ratio = NamedTempFile::new().unwrap();
        bad_ratio
            .write_all(br#"{"calorie_distribution_ratios": [0.5, 7.0]}"#)
            .unwrap();
        assert!(load_settings(bad_ratio.path()).is_err());
    }

    #[test]
    fn test_missing_settings_file() {
        assert!(matches!(
            load_settings("/nonexistent/meal_settings.json"),
            Err(PlanError::Io(_))
        ));
    }

    #[test]
    fn test_parse_macro_key_aliases() {
        assert_eq!(parse_macro_key("FAT").unwrap(), Macro::Fat);
        assert_eq!(parse_macro_key(" carbs ").unwrap(), Macro::Carb);
        assert_eq!(parse_macro_key("Carbohydrate").unwrap(), Macro::Carb);
        assert_eq!(parse_macro_key("protein").unwrap(), Macro::Protein);
    }

    #[test]
    fn test_parse_macro_key_suggests() {
        match parse_macro_key("protien") {
            Err(PlanError::UnknownMacro { given, hint }) => {
                assert_eq!(given, "protien");
                assert!(hint.contains("protein"), "hint was {:?}", hint);
            }
            other => panic!("unexpected result: {:?}", other),
        }

        match parse_macro_key("sugar") {
            Err(PlanError::UnknownMacro { hint, .. }) => assert!(hint.is_empty()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_ratio_list() {
        assert_eq!(
            parse_ratio_list("0.25, 0.4,0.35").unwrap(),
            vec![0.25, 0.4, 0.35]
        );
        assert!(matches!(
            parse_ratio_list("0.25,abc"),
            Err(PlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_macro_overrides() {
        let overrides = parse_macro_overrides("fat=0.2, protein=0.35").unwrap();
        assert_eq!(overrides, vec![(Macro::Fat, 0.2), (Macro::Protein, 0.35)]);

        assert!(matches!(
            parse_macro_overrides("fat:0.2"),
            Err(PlanError::InvalidInput(_))
        ));
        assert!(parse_macro_overrides("fiber=0.1").is_err());
    }

    #[test]
    fn test_resolve_meal_count_resets_file_ratios() {
        let file = SettingsFile {
            meals_per_day: Some(2),
            calorie_distribution_ratios: Some(CalorieDistribution::new(vec![0.5, 0.5]).unwrap()),
            ..Default::default()
        };

        let same = RatioOverrides {
            meals: Some(2),
            ..Default::default()
        };
        let settings = resolve_settings(&file, &same).unwrap();
        assert_eq!(settings.calorie_ratios().as_slice(), &[0.5, 0.5]);

        let changed = RatioOverrides {
            meals: Some(4),
            ..Default::default()
        };
        let settings = resolve_settings(&file, &changed).unwrap();
        assert_eq!(
            settings.calorie_ratios().as_slice(),
            &[0.20, 0.15, 0.35, 0.30]
        );
    }

    #[test]
    fn test_resolve_ratio_list_sets_meal_count() {
        let overrides = RatioOverrides {
            ratios: Some("0.5,0.3,0.1,0.05,0.05".to_string()),
            macros: Some("fat=0.25,carb=0.5".to_string()),
            ..Default::default()
        };
        let settings = resolve_settings(&SettingsFile::default(), &overrides).unwrap();
        assert_eq!(settings.meals_per_day(), 5);
        assert_eq!(settings.macro_ratios().fat(), 0.25);
        assert_eq!(settings.macro_ratios().carb(), 0.5);
        assert_eq!(settings.macro_ratios().protein(), 0.25);
    }

    #[test]
    fn test_resolve_ratio_list_must_match_explicit_count() {
        let overrides = RatioOverrides {
            meals: Some(3),
            ratios: Some("0.5,0.5".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            resolve_settings(&SettingsFile::default(), &overrides),
            Err(PlanError::DistributionLength {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_oversized_meal_count_in_file_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"meals_per_day": 18446744073709551615}"#)
            .unwrap();

        let config = load_settings(file.path()).unwrap();
        assert!(matches!(
            resolve_settings(&config, &RatioOverrides::default()),
            Err(PlanError::InvalidInput(_))
        ));
    }
}
