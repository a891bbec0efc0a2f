use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum NutriError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("No {slot} entry for '{food}' on {date}")]
    EntryNotFound {
        date: chrono::NaiveDate,
        slot: MealSlot,
        food: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failures reported by the nutrition lookup service.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("service responded with status {0}")]
    Status(u16),

    #[error("no foods found for '{0}'")]
    NoResults(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),
}

pub type Result<T> = std::result::Result<T, NutriError>;
