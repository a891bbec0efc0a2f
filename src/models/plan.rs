use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::FoodItem;

/// Daily partition of the meal plan. Ordering follows the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Snack,
        MealSlot::Dinner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Snack => "Snack",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|slot| slot.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| format!("unknown meal slot '{}'", needle))
    }
}

/// A food placed in a meal slot, with how many units were planned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub food: FoodItem,
    pub quantity: u32,
}

impl MealPlanEntry {
    pub fn new(food: FoodItem, quantity: u32) -> Self {
        Self { food, quantity }
    }

    /// Calories for the whole entry, saturating at the `i64` bounds.
    pub fn total_calories(&self) -> i64 {
        self.food
            .calories_per_unit()
            .saturating_mul(i64::from(self.quantity))
    }
}

pub type DayPlan = BTreeMap<MealSlot, Vec<MealPlanEntry>>;

/// Nested date -> slot -> entries mapping.
///
/// Within one (date, slot) list there is at most one entry per food key;
/// adding an existing food merges quantities instead of appending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<NaiveDate, DayPlan>,
}

impl MealPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of planned days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayPlan> {
        self.days.get(&date)
    }

    /// Planned days in date order.
    pub fn days(&self) -> impl Iterator<Item = (&NaiveDate, &DayPlan)> {
        self.days.iter()
    }

    /// Seven consecutive days starting at `start`, planned or not.
    pub fn week(&self, start: NaiveDate) -> impl Iterator<Item = (NaiveDate, Option<&DayPlan>)> {
        start
            .iter_days()
            .take(7)
            .map(move |date| (date, self.days.get(&date)))
    }

    /// Entries of one slot; empty when the path does not exist.
    pub fn entries(&self, date: NaiveDate, slot: MealSlot) -> &[MealPlanEntry] {
        self.days
            .get(&date)
            .and_then(|day| day.get(&slot))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total planned calories for a day.
    pub fn day_calories(&self, date: NaiveDate) -> i64 {
        self.days
            .get(&date)
            .map(|day| {
                day.values()
                    .flatten()
                    .map(MealPlanEntry::total_calories)
                    .fold(0, i64::saturating_add)
            })
            .unwrap_or(0)
    }

    /// Insert `food` or merge into the existing entry with the same key.
    ///
    /// Creates the date and slot containers on demand. Returns the resulting
    /// quantity of the entry.
    pub fn upsert(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        food: FoodItem,
        quantity: u32,
    ) -> u32 {
        let entries = self.days.entry(date).or_default().entry(slot).or_default();
        let key = food.key();

        match entries.iter_mut().find(|e| e.food.key() == key) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry.quantity
            }
            None => {
                entries.push(MealPlanEntry::new(food, quantity));
                quantity
            }
        }
    }

    /// Remove the entry matching `food`. Returns false when nothing matched.
    ///
    /// Slots and days left empty are pruned.
    pub fn remove(&mut self, date: NaiveDate, slot: MealSlot, food: &FoodItem) -> bool {
        let Some(day) = self.days.get_mut(&date) else {
            return false;
        };
        let Some(entries) = day.get_mut(&slot) else {
            return false;
        };

        let before = entries.len();
        entries.retain(|e| e.food != *food);
        let removed = entries.len() != before;

        if entries.is_empty() {
            day.remove(&slot);
        }
        if day.is_empty() {
            self.days.remove(&date);
        }

        removed
    }

    /// Shift the quantity of the entry matching `food` by `delta`, never
    /// going below one. Returns the new quantity, or `None` if absent.
    pub fn adjust(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        food: &FoodItem,
        delta: i64,
    ) -> Option<u32> {
        let entry = self
            .days
            .get_mut(&date)?
            .get_mut(&slot)?
            .iter_mut()
            .find(|e| e.food == *food)?;

        let target = (entry.quantity as i64).saturating_add(delta);
        entry.quantity = target.clamp(1, u32::MAX as i64) as u32;
        Some(entry.quantity)
    }

    /// Restore the entry invariants on a plan read from storage.
    ///
    /// Duplicate keys within a slot merge into the first occurrence, zero
    /// quantities become one, and empty slots and days are dropped. Returns
    /// the number of repairs made.
    pub fn normalize(&mut self) -> usize {
        let mut repairs = 0;

        for day in self.days.values_mut() {
            for entries in day.values_mut() {
                let mut merged: Vec<MealPlanEntry> = Vec::with_capacity(entries.len());
                for mut entry in entries.drain(..) {
                    if entry.quantity == 0 {
                        entry.quantity = 1;
                        repairs += 1;
                    }
                    match merged.iter_mut().find(|e| e.food == entry.food) {
                        Some(existing) => {
                            existing.quantity = existing.quantity.saturating_add(entry.quantity);
                            repairs += 1;
                        }
                        None => merged.push(entry),
                    }
                }
                *entries = merged;
            }

            let slots = day.len();
            day.retain(|_, entries| !entries.is_empty());
            repairs += slots - day.len();
        }

        let days = self.days.len();
        self.days.retain(|_, day| !day.is_empty());
        repairs + days - self.days.len()
    }
}
