// ─────────────────────────────────────────────────────────────────────────────
// Harris-Benedict coefficients (revised, Roza & Shizgal 1984)
// ─────────────────────────────────────────────────────────────────────────────

pub const MALE_BASE: f64 = 88.362;
pub const MALE_WEIGHT_COEF: f64 = 13.397;
pub const MALE_HEIGHT_COEF: f64 = 4.799;
pub const MALE_AGE_COEF: f64 = 5.677;

pub const FEMALE_BASE: f64 = 447.593;
pub const FEMALE_WEIGHT_COEF: f64 = 9.247;
pub const FEMALE_HEIGHT_COEF: f64 = 3.098;
pub const FEMALE_AGE_COEF: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_MULT: f64 = 1.2;
pub const LIGHT_MULT: f64 = 1.375;
pub const MODERATE_MULT: f64 = 1.55;
pub const HEAVY_MULT: f64 = 1.725;
pub const EXTRA_MULT: f64 = 1.9;

/// Multiplier used when an activity label is not recognized.
pub const DEFAULT_ACTIVITY_MULT: f64 = SEDENTARY_MULT;

/// Daily kcal removed for weight loss or added for weight gain.
pub const GOAL_ADJUSTMENT_KCAL: f64 = 500.0;
