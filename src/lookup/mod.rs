pub mod client;
pub mod dedupe;

pub use client::{interpret_response, EdamamClient};
pub use dedupe::dedupe;

use tracing::debug;

use crate::error::{LookupError, NutriError, Result};
use crate::models::{FoodItem, RawHit};

/// A source of food search hits.
pub trait NutritionLookup {
    fn search(&self, query: &str) -> std::result::Result<Vec<RawHit>, LookupError>;
}

/// Search for `query` and return unique food candidates in result order.
pub fn search_foods<L: NutritionLookup + ?Sized>(lookup: &L, query: &str) -> Result<Vec<FoodItem>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(NutriError::InvalidInput("Search query is empty".to_string()));
    }

    let hits = lookup.search(query)?;
    if hits.is_empty() {
        return Err(LookupError::NoResults(query.to_string()).into());
    }

    let raw_count = hits.len();
    let foods: Vec<FoodItem> = dedupe(hits).collect();
    debug!(query, raw_count, unique = foods.len(), "deduplicated lookup results");
    Ok(foods)
}
