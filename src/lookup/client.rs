use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::lookup::NutritionLookup;
use crate::models::RawHit;

const PARSER_PATH: &str = "/api/food-database/v2/parser";

#[derive(Debug, Deserialize)]
struct ParserResponse {
    #[serde(default)]
    hints: Vec<Hint>,
}

#[derive(Debug, Deserialize)]
struct Hint {
    food: RawHit,
}

/// Blocking client for the Edamam food-database parser endpoint.
pub struct EdamamClient {
    config: LookupConfig,
    client: Client,
}

impl EdamamClient {
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(classify)?;

        Ok(Self { config, client })
    }
}

impl NutritionLookup for EdamamClient {
    fn search(&self, query: &str) -> Result<Vec<RawHit>, LookupError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), PARSER_PATH);
        debug!(%url, query, "requesting food lookup");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("app_id", self.config.app_id.as_str()),
                ("app_key", self.config.app_key.as_str()),
                ("ingr", query),
                ("nutrition-type", "cooking"),
            ])
            .send()
            .map_err(classify)?;

        let status = response.status().as_u16();
        let body = response.text().map_err(classify)?;
        interpret_response(query, status, &body)
    }
}

/// Map a transport failure onto the lookup error taxonomy.
fn classify(err: reqwest::Error) -> LookupError {
    if err.is_timeout() {
        LookupError::Timeout
    } else if err.is_decode() {
        LookupError::Malformed(err.to_string())
    } else {
        LookupError::Transport(err.to_string())
    }
}

/// Decode a parser response body.
///
/// Non-2xx statuses, undecodable bodies and empty hit lists are errors.
pub fn interpret_response(query: &str, status: u16, body: &str) -> Result<Vec<RawHit>, LookupError> {
    if !(200..300).contains(&status) {
        return Err(LookupError::Status(status));
    }

    let parsed: ParserResponse =
        serde_json::from_str(body).map_err(|e| LookupError::Malformed(e.to_string()))?;

    if parsed.hints.is_empty() {
        return Err(LookupError::NoResults(query.to_string()));
    }

    Ok(parsed.hints.into_iter().map(|h| h.food).collect())
}
