use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;
use crate::models::MealPlan;

#[derive(Debug, Serialize)]
struct PlanRow<'a> {
    date: String,
    slot: &'a str,
    label: &'a str,
    category: &'a str,
    quantity: u32,
    calories_per_unit: i64,
    total_calories: i64,
}

/// Write one CSV row per plan entry. Returns the number of rows written.
pub fn write_plan_csv<W: Write>(plan: &MealPlan, writer: W) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);
    let mut rows = 0;

    for (date, day) in plan.days() {
        for (slot, entries) in day {
            for entry in entries {
                wtr.serialize(PlanRow {
                    date: date.to_string(),
                    slot: slot.as_str(),
                    label: &entry.food.label,
                    category: &entry.food.category,
                    quantity: entry.quantity,
                    calories_per_unit: entry.food.calories_per_unit(),
                    total_calories: entry.total_calories(),
                })?;
                rows += 1;
            }
        }
    }

    wtr.flush()?;
    Ok(rows)
}

/// Export the plan to a CSV file.
pub fn export_plan_csv<P: AsRef<Path>>(plan: &MealPlan, path: P) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    write_plan_csv(plan, file)
}
