/// Default calorie split for two meals a day: a lighter first meal.
pub const TWO_MEAL_RATIOS: [f64; 2] = [0.40, 0.60];

/// Default calorie split for three meals: breakfast, lunch, dinner.
pub const THREE_MEAL_RATIOS: [f64; 3] = [0.25, 0.40, 0.35];

/// Default calorie split for four meals, with a small second snack-sized meal.
pub const FOUR_MEAL_RATIOS: [f64; 4] = [0.20, 0.15, 0.35, 0.30];

/// Default macro split as (fat, carb, protein).
pub const DEFAULT_FAT_RATIO: f64 = 0.30;
pub const DEFAULT_CARB_RATIO: f64 = 0.45;
pub const DEFAULT_PROTEIN_RATIO: f64 = 0.25;

/// Meal counts the planning form offers. Other counts fall back to a uniform split.
pub const SUPPORTED_MEAL_COUNTS: [usize; 3] = [2, 3, 4];

/// Meal count the form starts with.
pub const DEFAULT_MEALS_PER_DAY: usize = 3;

/// Largest meal count accepted from the command line or a settings file.
pub const MAX_MEALS_PER_DAY: usize = 12;

// ─────────────────────────────────────────────────────────────────────────────
// Validation thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Allowed distance from 1.0 before a ratio set is reported as unbalanced.
pub const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// Minimum Jaro-Winkler score for suggesting a macro name on a typo.
pub const MACRO_MATCH_THRESHOLD: f64 = 0.7;
