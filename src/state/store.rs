use chrono::NaiveDate;
use tracing::{debug, error};

use crate::error::{NutriError, Result};
use crate::models::{FoodItem, MealPlan, MealSlot};
use crate::state::persistence::{load_meal_plan, save_meal_plan, BlobStore};

/// Owns the meal plan and writes it through to a blob store.
///
/// The only constructor loads the plan first, so every mutation runs against
/// a ready plan. Each mutation saves synchronously before returning, which
/// keeps saves strictly ordered.
pub struct MealPlanStore<S: BlobStore> {
    blobs: S,
    plan: MealPlan,
    revision: u64,
    synced: bool,
}

impl<S: BlobStore> MealPlanStore<S> {
    /// Load the stored plan (or start empty) and return a ready store.
    pub fn open(blobs: S) -> Self {
        let plan = load_meal_plan(&blobs);
        Self {
            blobs,
            plan,
            revision: 0,
            synced: true,
        }
    }

    /// Read-only view of the in-memory plan.
    pub fn plan(&self) -> &MealPlan {
        &self.plan
    }

    /// Bumped on every successful mutation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// False while the last save attempt has failed.
    pub fn is_synced(&self) -> bool {
        self.synced
    }

    pub fn blob_store(&self) -> &S {
        &self.blobs
    }

    /// Add `quantity` units of `food`, merging into an existing entry.
    ///
    /// Returns the entry's resulting quantity.
    pub fn add_meal_item(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        food: FoodItem,
        quantity: u32,
    ) -> Result<u32> {
        if quantity == 0 {
            return Err(NutriError::InvalidInput(
                "Quantity must be at least 1".to_string(),
            ));
        }

        let label = food.label.clone();
        let total = self.plan.upsert(date, slot, food, quantity);
        debug!(%date, %slot, food = %label, quantity, total, "added meal item");

        self.commit();
        Ok(total)
    }

    /// Remove `food` from a slot.
    ///
    /// A missing date, slot or entry leaves the plan untouched and returns
    /// `EntryNotFound`.
    pub fn remove_meal_item(&mut self, date: NaiveDate, slot: MealSlot, food: &FoodItem) -> Result<()> {
        if !self.plan.remove(date, slot, food) {
            return Err(not_found(date, slot, food));
        }
        debug!(%date, %slot, food = %food.label, "removed meal item");

        self.commit();
        Ok(())
    }

    /// Shift the quantity of `food` by `delta`, flooring at one.
    ///
    /// Returns the new quantity, or `EntryNotFound` with the plan untouched.
    pub fn update_meal_item(
        &mut self,
        date: NaiveDate,
        slot: MealSlot,
        food: &FoodItem,
        delta: i64,
    ) -> Result<u32> {
        let quantity = self
            .plan
            .adjust(date, slot, food, delta)
            .ok_or_else(|| not_found(date, slot, food))?;
        debug!(%date, %slot, food = %food.label, delta, quantity, "updated meal item");

        self.commit();
        Ok(quantity)
    }

    fn commit(&mut self) {
        self.revision += 1;
        self.persist();
    }

    /// Write the plan through. Failures are logged; memory stays authoritative.
    fn persist(&mut self) {
        match save_meal_plan(&mut self.blobs, &self.plan) {
            Ok(()) => self.synced = true,
            Err(e) => {
                self.synced = false;
                error!(error = %e, revision = self.revision, "failed to save meal plan");
            }
        }
    }
}

fn not_found(date: NaiveDate, slot: MealSlot, food: &FoodItem) -> NutriError {
    NutriError::EntryNotFound {
        date,
        slot,
        food: food.label.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoundedNutrients;
    use crate::state::persistence::{MemoryBlobStore, MEAL_PLAN_KEY};

    fn food(id: &str) -> FoodItem {
        FoodItem {
            food_id: id.to_string(),
            label: id.to_string(),
            category: "Generic foods".to_string(),
            nutrients: RoundedNutrients {
                calories: 100,
                ..Default::default()
            },
            image: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_add_writes_through() {
        let mut store = MealPlanStore::open(MemoryBlobStore::new());
        store.add_meal_item(date(), MealSlot::Lunch, food("X"), 1).unwrap();

        let blob = store.blob_store().get(MEAL_PLAN_KEY).unwrap().unwrap();
        let saved: MealPlan = serde_json::from_str(&blob).unwrap();
        assert_eq!(&saved, store.plan());
        assert_eq!(store.revision(), 1);
        assert!(store.is_synced());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut store = MealPlanStore::open(MemoryBlobStore::new());
        let err = store.add_meal_item(date(), MealSlot::Lunch, food("X"), 0).unwrap_err();
        assert!(matches!(err, NutriError::InvalidInput(_)));
        assert!(store.plan().is_empty());
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let mut store = MealPlanStore::open(MemoryBlobStore::new());
        let err = store.update_meal_item(date(), MealSlot::Dinner, &food("X"), 1).unwrap_err();
        assert!(matches!(err, NutriError::EntryNotFound { slot: MealSlot::Dinner, .. }));

        let err = store.remove_meal_item(date(), MealSlot::Dinner, &food("X")).unwrap_err();
        assert!(matches!(err, NutriError::EntryNotFound { .. }));
        assert_eq!(store.revision(), 0);
        assert!(store.blob_store().get(MEAL_PLAN_KEY).unwrap().is_none());
    }
}
