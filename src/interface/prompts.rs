use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{NutriError, Result};
use crate::interface::form::ProfileForm;
use crate::models::{ActivityLevel, FoodItem, Gender, Goal, MealPlanEntry};

/// Minimum Jaro-Winkler score for a fuzzy label match.
const FUZZY_THRESHOLD: f64 = 0.7;

fn prompt_number<T: FromStr>(prompt: &str) -> Result<T> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutriError::InvalidInput(format!("Invalid number: {}", input.trim())))
}

fn prompt_choice<T: Copy + ToString>(prompt: &str, options: &[T]) -> Result<T> {
    let labels: Vec<String> = options.iter().map(ToString::to_string).collect();
    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[selection])
}

/// Ask for every field the form is still missing.
pub fn prompt_profile(mut form: ProfileForm) -> Result<ProfileForm> {
    if form.age_years.is_none() {
        form.age_years = Some(prompt_number("Age (years)")?);
    }
    if form.gender.is_none() {
        form.gender = Some(prompt_choice("Gender", &Gender::ALL)?);
    }
    if form.height_cm.is_none() {
        form.height_cm = Some(prompt_number("Height (cm)")?);
    }
    if form.weight_kg.is_none() {
        form.weight_kg = Some(prompt_number("Weight (kg)")?);
    }
    if form.activity_level.is_none() {
        form.activity_level = Some(prompt_choice("Activity level", &ActivityLevel::ALL)?);
    }
    if form.goal.is_none() {
        form.goal = Some(prompt_choice("Goal", &Goal::ALL)?);
    }
    Ok(form)
}

/// Let the user pick one of the search results.
pub fn prompt_food_choice(foods: &[FoodItem]) -> Result<Option<usize>> {
    let mut options: Vec<String> = foods.iter().map(FoodItem::debug_string).collect();
    options.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which food do you want to add?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok((selection < foods.len()).then_some(selection))
}

/// Prompt for how many units to add.
pub fn prompt_quantity() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Quantity")
        .default("1".to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(q) if q >= 1 => Ok(q),
        _ => Err(NutriError::InvalidInput(
            "Quantity must be a whole number of at least 1".to_string(),
        )),
    }
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Entries whose label resembles `input`, best match first.
pub fn fuzzy_candidates<'a>(entries: &'a [MealPlanEntry], input: &str) -> Vec<(&'a MealPlanEntry, f64)> {
    let needle = input.trim().to_lowercase();
    let mut candidates: Vec<(&MealPlanEntry, f64)> = entries
        .iter()
        .map(|e| (e, jaro_winkler(&e.food.label.to_lowercase(), &needle)))
        .filter(|(_, score)| *score > FUZZY_THRESHOLD)
        .collect();

    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    candidates
}

/// Resolve a user-typed food name against the entries of one slot.
///
/// Tries an exact (case-insensitive) label match first, then asks the user to
/// confirm or pick among fuzzy matches.
pub fn resolve_entry<'a>(entries: &'a [MealPlanEntry], input: &str) -> Result<Option<&'a FoodItem>> {
    let input = input.trim();

    if let Some(entry) = entries
        .iter()
        .find(|e| e.food.label.eq_ignore_ascii_case(input))
    {
        return Ok(Some(&entry.food));
    }

    let candidates = fuzzy_candidates(entries, input);

    match candidates.as_slice() {
        [] => Ok(None),
        [(entry, _)] => {
            let entry: &'a MealPlanEntry = *entry;
            let confirm = prompt_yes_no(&format!("Did you mean '{}'?", entry.food.label), true)?;
            Ok(confirm.then_some(&entry.food))
        }
        _ => {
            let options: Vec<&MealPlanEntry> = candidates.iter().take(5).map(|(e, _)| *e).collect();
            let mut labels: Vec<String> = options.iter().map(|e| e.food.label.clone()).collect();
            labels.push("None of these".to_string());

            let selection = Select::new()
                .with_prompt("Which did you mean?")
                .items(&labels)
                .default(0)
                .interact()?;

            Ok(options.get(selection).copied().map(|e| &e.food))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoundedNutrients;

    fn entry(label: &str) -> MealPlanEntry {
        MealPlanEntry::new(
            FoodItem {
                food_id: format!("food_{}", label.to_lowercase()),
                label: label.to_string(),
                category: "Generic foods".to_string(),
                nutrients: RoundedNutrients::default(),
                image: None,
            },
            1,
        )
    }

    #[test]
    fn test_fuzzy_candidates_ranked() {
        let entries = vec![entry("Banana"), entry("Bananas, dried"), entry("Oatmeal")];
        let found = fuzzy_candidates(&entries, "banan");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].0.food.label, "Banana");
    }

    #[test]
    fn test_exact_match_skips_prompt() {
        let entries = vec![entry("Banana"), entry("Oatmeal")];
        let food = resolve_entry(&entries, "OATMEAL").unwrap().unwrap();
        assert_eq!(food.label, "Oatmeal");
    }

    #[test]
    fn test_no_match() {
        let entries = vec![entry("Banana")];
        assert!(resolve_entry(&entries, "steak").unwrap().is_none());
    }
}
