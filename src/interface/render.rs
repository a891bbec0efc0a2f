use chrono::NaiveDate;

use crate::estimator::CalorieEstimate;
use crate::models::{DayPlan, FoodItem, MealPlan, MealPlanEntry};

/// Display the breakdown of a calorie estimate.
pub fn display_estimate(estimate: &CalorieEstimate) {
    println!();
    println!("=== Daily Calories ===");
    println!("BMR:            {:>8.1} kcal", estimate.bmr);
    println!("Activity:       {:>8.3} x", estimate.multiplier);
    println!("Maintenance:    {:>8.1} kcal", estimate.maintenance);
    if estimate.adjustment != 0.0 {
        let sign = if estimate.adjustment > 0.0 { "+" } else { "" };
        println!("Goal:           {:>7}{:.0} kcal", sign, estimate.adjustment);
    }
    println!("Target:         {:>8} kcal", estimate.target);
    println!();
}

/// Display search results with their rounded macros.
pub fn display_food_list(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    let width = foods.iter().map(|f| f.label.len()).max().unwrap_or(10);
    for (i, food) in foods.iter().enumerate() {
        let n = &food.nutrients;
        println!(
            "{:>3}. {:<width$}  {:>5} kcal | C:{:>4} F:{:>4} Fi:{:>3} P:{:>4}  [{}]",
            i + 1,
            food.label,
            n.calories,
            n.carbs,
            n.fat,
            n.fiber,
            n.protein,
            food.category,
            width = width
        );
    }

    println!();
}

fn display_entry(entry: &MealPlanEntry) {
    println!(
        "      {} x{}  ({} kcal)",
        entry.food.label,
        entry.quantity,
        entry.total_calories()
    );
}

/// Display one day's slots, optionally against a calorie target.
pub fn display_day(date: NaiveDate, day: Option<&DayPlan>, target: Option<i64>) {
    println!("{} ({})", date, date.format("%A"));

    let Some(day) = day else {
        println!("    (nothing planned)");
        return;
    };

    let mut total: i64 = 0;
    for (slot, entries) in day {
        println!("  {}", slot);
        for entry in entries {
            display_entry(entry);
            total = total.saturating_add(entry.total_calories());
        }
    }

    match target {
        Some(target) => println!(
            "  Total: {} / {} kcal ({:+})",
            total,
            target,
            total.saturating_sub(target)
        ),
        None => println!("  Total: {} kcal", total),
    }
}

/// Display every planned day.
pub fn display_meal_plan(plan: &MealPlan, target: Option<i64>) {
    if plan.is_empty() {
        println!("Meal plan is empty.");
        return;
    }

    println!();
    println!("=== Meal Plan ===");
    println!();
    for (date, day) in plan.days() {
        display_day(*date, Some(day), target);
        println!();
    }
}

/// Display the seven days starting at `start`.
pub fn display_week(plan: &MealPlan, start: NaiveDate, target: Option<i64>) {
    println!();
    println!("=== Week of {} ===", start);
    println!();

    let mut week_total: i64 = 0;
    for (date, day) in plan.week(start) {
        display_day(date, day, target);
        week_total = week_total.saturating_add(plan.day_calories(date));
        println!();
    }

    println!("--- Summary ---");
    println!("Week total: {} kcal", week_total);
    println!("Daily average: {:.0} kcal", week_total as f64 / 7.0);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MealSlot, RoundedNutrients};

    #[test]
    fn test_week_view_with_huge_totals_does_not_panic() {
        let food = FoodItem {
            food_id: "food_x".to_string(),
            label: "X".to_string(),
            category: "Generic foods".to_string(),
            nutrients: RoundedNutrients {
                calories: i64::MAX,
                ..Default::default()
            },
            image: None,
        };
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut plan = MealPlan::new();
        for date in start.iter_days().take(7) {
            plan.upsert(date, MealSlot::Lunch, food.clone(), 2);
        }

        display_week(&plan, start, Some(i64::MIN));
        display_meal_plan(&plan, Some(-1));
    }
}
