pub mod food;
pub mod plan;
pub mod profile;

pub use food::{FoodItem, FoodKey, RawHit, RawNutrients, RoundedNutrients};
pub use plan::{DayPlan, MealPlan, MealPlanEntry, MealSlot};
pub use profile::{ActivityLevel, BiometricProfile, Gender, Goal};
