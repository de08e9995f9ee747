//! Lookup-client adapters for the three collaborating services
//!
//! Each adapter translates the collaborator's HTTP surface into a small
//! trait the orchestrator is wired against, so the validation pipeline can
//! be exercised with substitute collaborators in tests. Remote 404 becomes
//! `NotFound`, remote 422 becomes `InvalidInput`, and everything else
//! (including transport failures, timeouts and malformed bodies) is an
//! opaque `Upstream` error that is surfaced as-is and never retried.

mod league;
mod team;
mod venue;

pub use league::HttpLeagueClient;
pub use team::HttpTeamClient;
pub use venue::HttpVenueClient;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;
use types::ids::{LeagueId, TeamId, VenueId};
use types::league::LeagueSnapshot;
use types::matches::MatchStatus;
use types::team::TeamSnapshot;
use types::venue::VenueSnapshot;

/// Failure of a single collaborator call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    Upstream(String),
}

/// Read-only lookup against the league service
#[async_trait]
pub trait LeagueApi: Send + Sync {
    async fn get_league(&self, league_id: &LeagueId) -> Result<LeagueSnapshot, ClientError>;
}

/// Read-only lookup against the teams service
#[async_trait]
pub trait TeamApi: Send + Sync {
    async fn get_team(&self, team_id: &TeamId) -> Result<TeamSnapshot, ClientError>;
}

/// Lookup and state-transition operations against the location service
#[async_trait]
pub trait VenueApi: Send + Sync {
    async fn get_venue(&self, venue_id: &VenueId) -> Result<VenueSnapshot, ClientError>;

    /// Ask the location service to move the venue to the availability state
    /// implied by the given match status. Idempotent: the transition sets an
    /// enumerated state, it does not increment anything.
    async fn apply_state_transition(
        &self,
        venue_id: &VenueId,
        status: MatchStatus,
    ) -> Result<VenueSnapshot, ClientError>;
}

/// Error body shape all the collaborating services emit
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Translate a non-success collaborator response into a `ClientError`.
///
/// Pulls the human-readable message out of the error body when the body
/// parses; otherwise falls back to status + raw body so nothing is lost.
pub(crate) async fn translate_error_response(
    service: &str,
    response: reqwest::Response,
) -> ClientError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .map(|e| e.message)
        .unwrap_or_else(|_| format!("{} returned {}: {}", service, status, body));

    match status.as_u16() {
        404 => ClientError::NotFound(message),
        422 => ClientError::InvalidInput(message),
        _ => {
            tracing::warn!(%service, %status, "unexpected HTTP error from collaborator");
            ClientError::Upstream(message)
        }
    }
}
