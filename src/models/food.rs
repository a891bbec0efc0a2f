use serde::{Deserialize, Serialize};

/// Nutrient record as reported by the lookup service (per 100 g).
///
/// Field names follow the service's nutrient codes. Any of them may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawNutrients {
    #[serde(rename = "ENERC_KCAL", default)]
    pub calories: Option<f64>,

    #[serde(rename = "CHOCDF", default)]
    pub carbs: Option<f64>,

    #[serde(rename = "FAT", default)]
    pub fat: Option<f64>,

    #[serde(rename = "FIBTG", default)]
    pub fiber: Option<f64>,

    #[serde(rename = "PROCNT", default)]
    pub protein: Option<f64>,
}

/// A single, unprocessed search hit from the lookup service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawHit {
    #[serde(rename = "foodId")]
    pub food_id: String,

    pub label: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub nutrients: RawNutrients,
}

/// Macro values rounded up to whole units.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct RoundedNutrients {
    pub calories: i64,
    pub carbs: i64,
    pub fat: i64,
    pub fiber: i64,
    pub protein: i64,
}

impl RoundedNutrients {
    /// Ceiling-round every nutrient; missing values count as zero.
    pub fn from_raw(raw: &RawNutrients) -> Self {
        fn up(value: Option<f64>) -> i64 {
            value.map(|v| v.ceil() as i64).unwrap_or(0)
        }

        Self {
            calories: up(raw.calories),
            carbs: up(raw.carbs),
            fat: up(raw.fat),
            fiber: up(raw.fiber),
            protein: up(raw.protein),
        }
    }
}

/// Composite identity of a food: source id, label, category and the
/// rounded macro profile. Every field must match for two foods to be equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FoodKey {
    pub food_id: String,
    pub label: String,
    pub category: String,
    pub nutrients: RoundedNutrients,
}

/// A deduplicated food candidate that can be placed in the meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub food_id: String,
    pub label: String,
    pub category: String,
    pub nutrients: RoundedNutrients,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl FoodItem {
    /// Build a candidate from a raw hit, rounding its nutrients up.
    pub fn from_hit(hit: RawHit) -> Self {
        let nutrients = RoundedNutrients::from_raw(&hit.nutrients);
        Self {
            food_id: hit.food_id,
            label: hit.label,
            category: hit.category,
            nutrients,
            image: hit.image,
        }
    }

    /// Calories for one unit (ceiling-rounded kcal).
    #[inline]
    pub fn calories_per_unit(&self) -> i64 {
        self.nutrients.calories
    }

    /// Composite identity key used for dedup and plan merges.
    pub fn key(&self) -> FoodKey {
        FoodKey {
            food_id: self.food_id.clone(),
            label: self.label.clone(),
            category: self.category.clone(),
            nutrients: self.nutrients,
        }
    }

    /// One-line summary for tables and logs.
    pub fn debug_string(&self) -> String {
        let n = &self.nutrients;
        format!(
            "{} ({}): {} kcal, C:{} F:{} Fi:{} P:{}",
            self.label, self.category, n.calories, n.carbs, n.fat, n.fiber, n.protein
        )
    }
}

impl PartialEq for FoodItem {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FoodItem {}

impl std::hash::Hash for FoodItem {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
