use crate::estimator::constants::*;
use crate::models::{ActivityLevel, BiometricProfile, Gender, Goal};

/// Breakdown of a daily calorie estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieEstimate {
    pub bmr: f64,
    pub multiplier: f64,
    /// BMR scaled by activity, before the goal adjustment.
    pub maintenance: f64,
    pub adjustment: f64,
    /// Final rounded daily target.
    pub target: i64,
}

/// Basal metabolic rate (Harris-Benedict, revised).
pub fn basal_metabolic_rate(profile: &BiometricProfile) -> f64 {
    let age = profile.age_years as f64;
    match profile.gender {
        Gender::Male => {
            MALE_BASE + MALE_WEIGHT_COEF * profile.weight_kg + MALE_HEIGHT_COEF * profile.height_cm
                - MALE_AGE_COEF * age
        }
        Gender::Female => {
            FEMALE_BASE
                + FEMALE_WEIGHT_COEF * profile.weight_kg
                + FEMALE_HEIGHT_COEF * profile.height_cm
                - FEMALE_AGE_COEF * age
        }
    }
}

pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => SEDENTARY_MULT,
        ActivityLevel::Light => LIGHT_MULT,
        ActivityLevel::Moderate => MODERATE_MULT,
        ActivityLevel::Heavy => HEAVY_MULT,
        ActivityLevel::Extra => EXTRA_MULT,
    }
}

/// Multiplier for a free-form activity label.
///
/// Unrecognized labels fall back to `DEFAULT_ACTIVITY_MULT`.
pub fn activity_multiplier_for_label(label: &str) -> f64 {
    label
        .parse::<ActivityLevel>()
        .map(activity_multiplier)
        .unwrap_or(DEFAULT_ACTIVITY_MULT)
}

/// Signed kcal shift applied for a goal.
pub fn goal_adjustment(goal: Goal) -> f64 {
    match goal {
        Goal::Loss => -GOAL_ADJUSTMENT_KCAL,
        Goal::Maintenance => 0.0,
        Goal::Gain => GOAL_ADJUSTMENT_KCAL,
    }
}

/// Round half up, so 0.5 always goes toward positive infinity.
#[inline]
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Full breakdown of the daily calorie target for a profile.
pub fn estimate(profile: &BiometricProfile) -> CalorieEstimate {
    let bmr = basal_metabolic_rate(profile);
    let multiplier = activity_multiplier(profile.activity_level);
    let maintenance = bmr * multiplier;
    let adjustment = goal_adjustment(profile.goal);

    CalorieEstimate {
        bmr,
        multiplier,
        maintenance,
        adjustment,
        target: round_half_up(maintenance + adjustment),
    }
}

/// Estimated daily calorie requirement, rounded to the nearest kcal.
pub fn estimate_daily_calories(profile: &BiometricProfile) -> i64 {
    estimate(profile).target
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn profile(gender: Gender, activity_level: ActivityLevel, goal: Goal) -> BiometricProfile {
        BiometricProfile {
            age_years: 30,
            gender,
            height_cm: 180.0,
            weight_kg: 80.0,
            activity_level,
            goal,
        }
    }

    #[test]
    fn test_bmr_male() {
        let p = profile(Gender::Male, ActivityLevel::Sedentary, Goal::Maintenance);
        assert_float_absolute_eq!(basal_metabolic_rate(&p), 1853.632, 1e-9);
    }

    #[test]
    fn test_bmr_female() {
        let p = profile(Gender::Female, ActivityLevel::Sedentary, Goal::Maintenance);
        // 447.593 + 739.76 + 557.64 - 129.9
        assert_float_absolute_eq!(basal_metabolic_rate(&p), 1615.093, 1e-9);
    }

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(activity_multiplier(ActivityLevel::Sedentary), 1.2);
        assert_eq!(activity_multiplier(ActivityLevel::Light), 1.375);
        assert_eq!(activity_multiplier(ActivityLevel::Moderate), 1.55);
        assert_eq!(activity_multiplier(ActivityLevel::Heavy), 1.725);
        assert_eq!(activity_multiplier(ActivityLevel::Extra), 1.9);
    }

    #[test]
    fn test_unknown_label_uses_default() {
        assert_eq!(activity_multiplier_for_label("heavy"), 1.725);
        assert_eq!(activity_multiplier_for_label("Select your activity level"), 1.2);
        assert_eq!(activity_multiplier_for_label(""), DEFAULT_ACTIVITY_MULT);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(-2.5), -2);
    }

    #[test]
    fn test_estimate_breakdown() {
        let p = profile(Gender::Male, ActivityLevel::Sedentary, Goal::Gain);
        let e = estimate(&p);
        assert_float_absolute_eq!(e.maintenance, 2224.3584, 1e-6);
        assert_eq!(e.adjustment, 500.0);
        assert_eq!(e.target, 2724);
    }
}
