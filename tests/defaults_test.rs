#[macro_use]
extern crate assert_float_eq;

use meal_ratio_planner::planner::{default_calorie_distribution, default_macro_ratios};
use meal_ratio_planner::PlanError;

#[test]
fn test_two_meal_table() {
    let dist = default_calorie_distribution(2).unwrap();
    assert_eq!(dist.as_slice(), &[0.40, 0.60]);
}

#[test]
fn test_three_meal_table() {
    let dist = default_calorie_distribution(3).unwrap();
    assert_eq!(dist.as_slice(), &[0.25, 0.40, 0.35]);
}

#[test]
fn test_four_meal_table() {
    let dist = default_calorie_distribution(4).unwrap();
    assert_eq!(dist.as_slice(), &[0.20, 0.15, 0.35, 0.30]);
}

#[test]
fn test_five_meals_uniform() {
    let dist = default_calorie_distribution(5).unwrap();
    assert_eq!(dist.as_slice(), &[0.2; 5]);
    assert_float_absolute_eq!(dist.sum(), 1.0, 1e-12);
}

#[test]
fn test_length_matches_meal_count() {
    for n in 1..=12 {
        let dist = default_calorie_distribution(n).unwrap();
        assert_eq!(dist.len(), n, "meal count {}", n);
    }
}

#[test]
fn test_sums_to_one() {
    for n in 1..=12 {
        let dist = default_calorie_distribution(n).unwrap();
        assert_float_absolute_eq!(dist.sum(), 1.0, 1e-9);
        assert!(dist.is_balanced());
    }
}

#[test]
fn test_uniform_fallback_is_even() {
    // 7 does not divide 1.0 exactly; entries must still be identical.
    let dist = default_calorie_distribution(7).unwrap();
    let first = dist.as_slice()[0];
    assert!(dist.as_slice().iter().all(|&r| r == first));
    assert_float_absolute_eq!(first, 1.0 / 7.0, 1e-15);
}

#[test]
fn test_zero_meals_is_invalid_argument() {
    let err = default_calorie_distribution(0).unwrap_err();
    assert!(matches!(err, PlanError::InvalidArgument(_)));
}

#[test]
fn test_default_macros() {
    let macros = default_macro_ratios();
    assert_eq!(macros.fat(), 0.30);
    assert_eq!(macros.carb(), 0.45);
    assert_eq!(macros.protein(), 0.25);
    assert_float_absolute_eq!(macros.sum(), 1.0, 1e-9);
}

#[test]
fn test_defaults_are_idempotent() {
    assert_eq!(default_macro_ratios(), default_macro_ratios());
    assert_eq!(
        default_calorie_distribution(3).unwrap(),
        default_calorie_distribution(3).unwrap()
    );
}

#[test]
fn test_defaults_across_threads() {
    let handles: Vec<_> = (1..=8)
        .map(|n| std::thread::spawn(move || default_calorie_distribution(n).unwrap()))
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let dist = handle.join().unwrap();
        assert_eq!(dist, default_calorie_distribution(i + 1).unwrap());
    }
}
