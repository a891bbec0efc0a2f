mod persistence;
mod store;

pub use persistence::{
    load_meal_plan, save_meal_plan, BlobStore, FileBlobStore, MemoryBlobStore, MEAL_PLAN_KEY,
};
pub use store::MealPlanStore;
