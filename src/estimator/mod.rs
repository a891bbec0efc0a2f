pub mod calories;
pub mod constants;

pub use calories::{
    activity_multiplier, activity_multiplier_for_label, basal_metabolic_rate, estimate,
    estimate_daily_calories, goal_adjustment, CalorieEstimate,
};
pub use constants::*;
