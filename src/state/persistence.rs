use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::MealPlan;

/// Fixed key under which the whole meal plan is stored.
pub const MEAL_PLAN_KEY: &str = "mealPlan";

/// Key-value text storage.
pub trait BlobStore {
    /// Read the blob for `key`; `None` if it was never written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the blob for `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    dir: PathBuf,
}

impl FileBlobStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write then rename so a failed write leaves the previous blob intact.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Process-local store, mainly for tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a blob directly.
    pub fn with_blob(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load the meal plan blob.
///
/// A missing, unreadable or corrupt blob yields an empty plan; the failure is
/// logged and never surfaced. Duplicate entries and zero quantities in a
/// readable blob are repaired.
pub fn load_meal_plan<S: BlobStore + ?Sized>(store: &S) -> MealPlan {
    match store.get(MEAL_PLAN_KEY) {
        Ok(Some(text)) => match serde_json::from_str::<MealPlan>(&text) {
            Ok(mut plan) => {
                let repairs = plan.normalize();
                if repairs > 0 {
                    warn!(repairs, "stored meal plan had invalid entries, repaired");
                }
                debug!(days = plan.len(), "loaded meal plan");
                plan
            }
            Err(e) => {
                warn!(error = %e, "stored meal plan is corrupt, starting empty");
                MealPlan::new()
            }
        },
        Ok(None) => {
            debug!("no stored meal plan, starting empty");
            MealPlan::new()
        }
        Err(e) => {
            warn!(error = %e, "failed to read meal plan, starting empty");
            MealPlan::new()
        }
    }
}

/// Serialize the whole plan and overwrite the stored blob.
pub fn save_meal_plan<S: BlobStore + ?Sized>(store: &mut S, plan: &MealPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    store.set(MEAL_PLAN_KEY, &json)
}
