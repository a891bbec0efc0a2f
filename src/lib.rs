pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod interface;
pub mod logging;
pub mod lookup;
pub mod models;
pub mod state;

pub use error::{LookupError, NutriError, Result};
pub use models::{BiometricProfile, FoodItem, MealPlan, MealPlanEntry, MealSlot};
pub use state::MealPlanStore;
