use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::{info, warn};

use nutri_planner_rs::cli::{Cli, Command, LookupArgs, PlanCommand, ProfileArgs};
use nutri_planner_rs::error::{NutriError, Result};
use nutri_planner_rs::estimator;
use nutri_planner_rs::interface::{
    display_day, display_estimate, display_food_list, display_meal_plan, display_week,
    export_plan_csv, prompt_food_choice, prompt_profile, prompt_quantity, resolve_entry,
};
use nutri_planner_rs::logging;
use nutri_planner_rs::lookup::{search_foods, EdamamClient};
use nutri_planner_rs::models::MealSlot;
use nutri_planner_rs::state::{FileBlobStore, MealPlanStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Calories(args) => cmd_calories(&args),
        Command::Search {
            query,
            date,
            slot,
            lookup,
        } => cmd_search(&cli.data_dir, &query, date.zip(slot), &lookup),
        Command::Plan { action } => cmd_plan(&cli.data_dir, action),
    }
}

fn open_store(data_dir: &Path) -> MealPlanStore<FileBlobStore> {
    MealPlanStore::open(FileBlobStore::new(data_dir))
}

/// Remind the user when the last write-through failed.
fn report_sync(store: &MealPlanStore<FileBlobStore>) {
    if !store.is_synced() {
        warn!("meal plan changes could not be saved; they will be lost on exit");
    }
}

/// Estimate daily calories from flags, prompting for anything missing.
fn cmd_calories(args: &ProfileArgs) -> Result<()> {
    let mut form = args.to_form();
    if !form.is_complete() {
        form = prompt_profile(form)?;
    }

    let profile = form.complete()?;
    display_estimate(&estimator::estimate(&profile));
    Ok(())
}

/// Look up foods and optionally add one to the plan.
fn cmd_search(
    data_dir: &Path,
    query: &str,
    context: Option<(NaiveDate, MealSlot)>,
    lookup: &LookupArgs,
) -> Result<()> {
    let client = EdamamClient::new(lookup.to_config())?;
    let foods = search_foods(&client, query)?;
    display_food_list(&foods, &format!("Results for '{}'", query));

    let Some((date, slot)) = context else {
        return Ok(());
    };

    let Some(index) = prompt_food_choice(&foods)? else {
        println!("Nothing added.");
        return Ok(());
    };
    let quantity = prompt_quantity()?;

    let mut store = open_store(data_dir);
    let food = foods[index].clone();
    let label = food.label.clone();
    let total = store.add_meal_item(date, slot, food, quantity)?;
    info!(%date, %slot, food = %label, total, "meal plan updated");
    println!("{} on {} ({}): {} x{}", slot, date, date.format("%A"), label, total);

    report_sync(&store);
    Ok(())
}

fn cmd_plan(data_dir: &Path, action: PlanCommand) -> Result<()> {
    match action {
        PlanCommand::Show { date, week, target } => {
            let store = open_store(data_dir);
            let plan = store.plan();
            match (date, week) {
                (start, true) => {
                    let start = start.unwrap_or_else(|| Local::now().date_naive());
                    display_week(plan, start, target);
                }
                (Some(date), false) => display_day(date, plan.day(date), target),
                (None, false) => display_meal_plan(plan, target),
            }
            Ok(())
        }
        PlanCommand::Remove { date, slot, food } => {
            let mut store = open_store(data_dir);
            let Some(item) = resolve_entry(store.plan().entries(date, slot), &food)?.cloned() else {
                println!("No {} entry matching '{}' on {}.", slot, food, date);
                return Ok(());
            };

            match store.remove_meal_item(date, slot, &item) {
                Ok(()) => println!("Removed {} from {} on {}.", item.label, slot, date),
                Err(e @ NutriError::EntryNotFound { .. }) => println!("{}", e),
                Err(e) => return Err(e),
            }

            report_sync(&store);
            Ok(())
        }
        PlanCommand::Update {
            date,
            slot,
            food,
            delta,
        } => {
            let mut store = open_store(data_dir);
            let Some(item) = resolve_entry(store.plan().entries(date, slot), &food)?.cloned() else {
                println!("No {} entry matching '{}' on {}.", slot, food, date);
                return Ok(());
            };

            match store.update_meal_item(date, slot, &item, delta) {
                Ok(quantity) => println!(
                    "{} on {} ({}): {} x{}",
                    slot,
                    date,
                    date.format("%A"),
                    item.label,
                    quantity
                ),
                Err(e @ NutriError::EntryNotFound { .. }) => println!("{}", e),
                Err(e) => return Err(e),
            }

            report_sync(&store);
            Ok(())
        }
        PlanCommand::Export { out } => {
            let store = open_store(data_dir);
            let rows = export_plan_csv(store.plan(), &out)?;
            println!("Exported {} entries to {}.", rows, out.display());
            Ok(())
        }
    }
}
