use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assignment::registry::{
    selection_payload, AlgorithmDescriptor, AlgorithmSelectionError,
};
use crate::assignment::assign_teams;
use crate::data::directory::{Candidate, PlayerDirectory};
use crate::data::plan::{EventPlan, DEFAULT_GAME_ID};
use crate::server::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    UnknownAlgorithm(#[from] AlgorithmSelectionError),
    #[error("failed to serialize response: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "rallypoint-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Value of `key` in the query string of `path`, if present and non-empty.
fn query_param<'a>(path: &'a str, key: &str) -> Option<&'a str> {
    let query = path.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == key)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AlgorithmListResponse<'a> {
    game_id: &'a str,
    algorithms: Vec<&'a AlgorithmDescriptor>,
}

pub fn algorithms_payload(state: &AppState, path: &str) -> Result<String, serde_json::Error> {
    let game_id = query_param(path, "game").unwrap_or(DEFAULT_GAME_ID);
    serde_json::to_string_pretty(&AlgorithmListResponse {
        game_id,
        algorithms: state.catalog.list_algorithms_for_game(game_id),
    })
}

/// `None` when the id is not registered.
pub fn algorithm_payload(state: &AppState, id: &str) -> Result<Option<String>, serde_json::Error> {
    state
        .catalog
        .get_algorithm(id)
        .map(serde_json::to_string_pretty)
        .transpose()
}

#[derive(Debug, Deserialize)]
pub struct ResolveRequest {
    #[serde(default = "default_game_id", alias = "gameId")]
    pub game_id: String,
    #[serde(default, alias = "algorithmId")]
    pub algorithm_id: Option<String>,
}

fn default_game_id() -> String {
    DEFAULT_GAME_ID.to_string()
}

pub fn resolve_payload(state: &AppState, body: &str) -> Result<String, ApiError> {
    let request: ResolveRequest = serde_json::from_str(body).map_err(ApiError::Parse)?;
    let resolved = state
        .catalog
        .resolve_algorithm_selection(&request.game_id, request.algorithm_id.as_deref());
    if let Err(err) = resolved {
        return Err(ApiError::UnknownAlgorithm(err));
    }
    serde_json::to_string_pretty(&selection_payload(&resolved)).map_err(ApiError::Serialize)
}

/// Body of a failed selection, in the same shape `resolve` returns on success.
pub fn unknown_algorithm_body(err: &AlgorithmSelectionError) -> String {
    let payload = selection_payload(&Err(err.clone()));
    serde_json::to_string_pretty(&payload).unwrap_or_else(|_| payload.to_string())
}

#[derive(Debug, Deserialize)]
pub struct AssignRequest {
    pub players: Vec<Candidate>,
    #[serde(flatten)]
    pub plan: EventPlan,
}

pub fn assign_payload(state: &AppState, body: &str) -> Result<String, ApiError> {
    let request: AssignRequest = serde_json::from_str(body).map_err(ApiError::Parse)?;
    if request.plan.game_id.trim().is_empty() {
        return Err(ApiError::Validation("game_id must not be empty".to_string()));
    }
    let directory: PlayerDirectory = request.players.into_iter().collect();
    let outcome = assign_teams(&state.catalog, &request.plan.request(&directory))?;
    serde_json::to_string_pretty(&outcome).map_err(ApiError::Serialize)
}

#[cfg(test)]
mod tests {
    use super::query_param;

    #[test]
    fn query_param_reads_named_value() {
        assert_eq!(query_param("/api/algorithms?game=foundry", "game"), Some("foundry"));
        assert_eq!(query_param("/api/algorithms?x=1&game=canyon_clash", "game"), Some("canyon_clash"));
        assert_eq!(query_param("/api/algorithms?game=", "game"), None);
        assert_eq!(query_param("/api/algorithms", "game"), None);
    }
}
