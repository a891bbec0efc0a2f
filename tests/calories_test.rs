use nutri_planner_rs::estimator::{basal_metabolic_rate, estimate_daily_calories};
use nutri_planner_rs::models::{ActivityLevel, BiometricProfile, Gender, Goal};

fn base_profile() -> BiometricProfile {
    BiometricProfile {
        age_years: 30,
        gender: Gender::Male,
        height_cm: 180.0,
        weight_kg: 80.0,
        activity_level: ActivityLevel::Sedentary,
        goal: Goal::Maintenance,
    }
}

#[test]
fn test_male_sedentary_maintenance() {
    // BMR 1853.632 * 1.2 = 2224.3584
    assert_eq!(estimate_daily_calories(&base_profile()), 2224);
}

#[test]
fn test_loss_goal_subtracts_500() {
    let profile = BiometricProfile {
        goal: Goal::Loss,
        ..base_profile()
    };
    assert_eq!(estimate_daily_calories(&profile), 1724);
}

#[test]
fn test_female_moderate_gain() {
    // BMR 447.593 + 554.82 + 511.17 - 108.25 = 1405.333; * 1.55 + 500 = 2678.27
    let profile = BiometricProfile {
        age_years: 25,
        gender: Gender::Female,
        height_cm: 165.0,
        weight_kg: 60.0,
        activity_level: ActivityLevel::Moderate,
        goal: Goal::Gain,
    };
    assert_eq!(estimate_daily_calories(&profile), 2678);
}

#[test]
fn test_deterministic() {
    let profile = base_profile();
    let first = estimate_daily_calories(&profile);
    for _ in 0..10 {
        assert_eq!(estimate_daily_calories(&profile), first);
    }
}

#[test]
fn test_monotonic_in_weight_and_height() {
    for gender in Gender::ALL {
        let mut previous = f64::MIN;
        for weight in (40..=150).step_by(5) {
            let profile = BiometricProfile {
                gender,
                weight_kg: weight as f64,
                ..base_profile()
            };
            let bmr = basal_metabolic_rate(&profile);
            assert!(bmr > previous, "BMR dropped at weight {}", weight);
            previous = bmr;
        }

        let mut previous = i64::MIN;
        for height in (140..=210).step_by(5) {
            let profile = BiometricProfile {
                gender,
                height_cm: height as f64,
                ..base_profile()
            };
            let target = estimate_daily_calories(&profile);
            assert!(target >= previous, "target dropped at height {}", height);
            previous = target;
        }
    }
}

#[test]
fn test_monotonic_in_age_and_activity() {
    let mut previous = i64::MAX;
    for age in 18..=90 {
        let profile = BiometricProfile {
            age_years: age,
            ..base_profile()
        };
        let target = estimate_daily_calories(&profile);
        assert!(target <= previous, "target rose at age {}", age);
        previous = target;
    }

    let mut previous = i64::MIN;
    for activity_level in ActivityLevel::ALL {
        let profile = BiometricProfile {
            activity_level,
            ..base_profile()
        };
        let target = estimate_daily_calories(&profile);
        assert!(target > previous, "target did not rise for {}", activity_level);
        previous = target;
    }
}

#[test]
fn test_goal_ordering() {
    let targets: Vec<i64> = Goal::ALL
        .into_iter()
        .map(|goal| estimate_daily_calories(&BiometricProfile { goal, ..base_profile() }))
        .collect();
    assert_eq!(targets[1] - targets[0], 500);
    assert_eq!(targets[2] - targets[1], 500);
}
