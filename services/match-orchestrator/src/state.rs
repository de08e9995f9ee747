use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::clients::{HttpLeagueClient, HttpTeamClient, HttpVenueClient};
use crate::config::Config;
use crate::error::AppError;
use crate::orchestrator::MatchOrchestrator;
use crate::store::InMemoryMatchStore;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<MatchOrchestrator>,
}

impl AppState {
    /// Wire the orchestrator against the HTTP collaborators and the
    /// in-memory store. One shared client, one bounded timeout per call.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("http client: {}", e)))?;

        let orchestrator = MatchOrchestrator::new(
            Arc::new(HttpLeagueClient::new(http.clone(), &config.league_base_url)),
            Arc::new(HttpTeamClient::new(http.clone(), &config.team_base_url)),
            Arc::new(HttpVenueClient::new(http, &config.venue_base_url)),
            Arc::new(InMemoryMatchStore::new()),
        );

        Ok(Self {
            orchestrator: Arc::new(orchestrator),
        })
    }

    /// State over an already-wired orchestrator (tests use this with
    /// substitute collaborators)
    pub fn new(orchestrator: MatchOrchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
