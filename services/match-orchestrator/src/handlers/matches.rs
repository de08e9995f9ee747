//! HTTP handlers for the match resource
//!
//! Path identifiers are gated on the canonical 36-character length before
//! any collaborator is called; malformed identifiers short-circuit with
//! 422 without touching the network.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use types::ids::{LeagueId, MatchId};

use crate::error::AppError;
use crate::models::{match_to_response, MatchRequest, MatchResponse};
use crate::state::AppState;

pub async fn list_matches(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
) -> Result<Json<Vec<MatchResponse>>, AppError> {
    let league_id = parse_league_id(&league_id)?;
    let matches = state.orchestrator.list_matches(&league_id).await?;
    Ok(Json(matches.iter().map(match_to_response).collect()))
}

pub async fn get_match(
    State(state): State<AppState>,
    Path((league_id, match_id)): Path<(String, String)>,
) -> Result<Json<MatchResponse>, AppError> {
    let (league_id, match_id) = parse_path_ids(&league_id, &match_id)?;
    let record = state.orchestrator.get_match(&league_id, &match_id).await?;
    Ok(Json(match_to_response(&record)))
}

pub async fn create_match(
    State(state): State<AppState>,
    Path(league_id): Path<String>,
    Json(payload): Json<MatchRequest>,
) -> Result<(StatusCode, Json<MatchResponse>), AppError> {
    let league_id = parse_league_id(&league_id)?;
    let record = state
        .orchestrator
        .create_match(&league_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(match_to_response(&record))))
}

pub async fn update_match(
    State(state): State<AppState>,
    Path((league_id, match_id)): Path<(String, String)>,
    Json(payload): Json<MatchRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    let (league_id, match_id) = parse_path_ids(&league_id, &match_id)?;
    let record = state
        .orchestrator
        .update_match(&league_id, &match_id, payload)
        .await?;
    Ok(Json(match_to_response(&record)))
}

pub async fn delete_match(
    State(state): State<AppState>,
    Path((league_id, match_id)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    let (league_id, match_id) = parse_path_ids(&league_id, &match_id)?;
    state
        .orchestrator
        .delete_match(&league_id, &match_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_league_id(raw: &str) -> Result<LeagueId, AppError> {
    LeagueId::try_new(raw)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid leagueId provided: {}", raw)))
}

fn parse_path_ids(league_raw: &str, match_raw: &str) -> Result<(LeagueId, MatchId), AppError> {
    let league_id = parse_league_id(league_raw)?;
    let match_id = MatchId::try_new(match_raw)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid matchId provided: {}", match_raw)))?;
    Ok((league_id, match_id))
}
