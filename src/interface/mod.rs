pub mod export;
pub mod form;
pub mod prompts;
pub mod render;

pub use export::{export_plan_csv, write_plan_csv};
pub use form::ProfileForm;
pub use prompts::{
    fuzzy_candidates, prompt_food_choice, prompt_profile, prompt_quantity, prompt_yes_no,
    resolve_entry,
};
pub use render::{display_day, display_estimate, display_food_list, display_meal_plan, display_week};
