use std::path::PathBuf;
use std::time::Duration;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::config::{LookupConfig, DEFAULT_API_BASE, DEFAULT_DATA_DIR, DEFAULT_LOOKUP_TIMEOUT_SECS};
use crate::interface::ProfileForm;
use crate::models::{ActivityLevel, Gender, Goal, MealSlot};

/// NutriPlanner — daily calorie targets, food lookup, and a weekly meal plan.
#[derive(Parser, Debug)]
#[command(name = "nutri_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the persisted meal plan.
    #[arg(short, long, global = true, env = "NUTRI_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Enable debug logging (RUST_LOG overrides).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate daily calorie needs; missing fields are asked interactively.
    Calories(ProfileArgs),

    /// Look up foods; with --date and --slot, add a result to the plan.
    Search {
        /// Free-text food query.
        query: String,

        /// Plan date (YYYY-MM-DD) to add the chosen food to.
        #[arg(long, requires = "slot")]
        date: Option<NaiveDate>,

        /// Meal slot to add the chosen food to.
        #[arg(long, requires = "date")]
        slot: Option<MealSlot>,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Inspect or edit the meal plan.
    Plan {
        #[command(subcommand)]
        action: PlanCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum PlanCommand {
    /// Show the plan (all days, one day, or a week).
    Show {
        /// Show only this date, or the week starting here with --week.
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Show seven days starting at --date (default: today).
        #[arg(long)]
        week: bool,

        /// Daily calorie target to compare against.
        #[arg(long)]
        target: Option<i64>,
    },

    /// Remove a food from a meal slot.
    Remove {
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        slot: MealSlot,

        /// Food label (fuzzy matched).
        food: String,
    },

    /// Change the quantity of a planned food; never drops below 1.
    Update {
        #[arg(long)]
        date: NaiveDate,

        #[arg(long)]
        slot: MealSlot,

        /// Food label (fuzzy matched).
        food: String,

        /// Amount to add (negative to reduce).
        #[arg(long, allow_hyphen_values = true)]
        delta: i64,
    },

    /// Export the plan as CSV.
    Export {
        #[arg(short, long, default_value = "meal_plan.csv")]
        out: PathBuf,
    },
}

/// Biometric fields accepted on the command line.
#[derive(Args, Debug, Default)]
pub struct ProfileArgs {
    #[arg(long)]
    pub age: Option<u32>,

    /// male or female.
    #[arg(long)]
    pub gender: Option<Gender>,

    /// Height in centimetres.
    #[arg(long)]
    pub height: Option<f64>,

    /// Weight in kilograms.
    #[arg(long)]
    pub weight: Option<f64>,

    /// sedentary, light, moderate, heavy or extra.
    #[arg(long)]
    pub activity: Option<ActivityLevel>,

    /// loss, maintenance or gain.
    #[arg(long)]
    pub goal: Option<Goal>,
}

impl ProfileArgs {
    pub fn to_form(&self) -> ProfileForm {
        ProfileForm {
            age_years: self.age,
            gender: self.gender,
            height_cm: self.height,
            weight_kg: self.weight,
            activity_level: self.activity,
            goal: self.goal,
        }
    }
}

/// Credentials and transport settings for the lookup service.
#[derive(Args, Debug)]
pub struct LookupArgs {
    #[arg(long, env = "EDAMAM_APP_ID", hide_env_values = true)]
    pub app_id: String,

    #[arg(long, env = "EDAMAM_APP_KEY", hide_env_values = true)]
    pub app_key: String,

    #[arg(long, env = "EDAMAM_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = DEFAULT_LOOKUP_TIMEOUT_SECS)]
    pub lookup_timeout: u64,
}

impl LookupArgs {
    pub fn to_config(&self) -> LookupConfig {
        LookupConfig::new(&self.app_id, &self.app_key)
            .with_base_url(&self.api_base)
            .with_timeout(Duration::from_secs(self.lookup_timeout))
    }
}
