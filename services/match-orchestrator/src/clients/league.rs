//! HTTP adapter for the league service

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use types::ids::LeagueId;
use types::league::LeagueSnapshot;

use super::{translate_error_response, ClientError, LeagueApi};

/// Wire shape of a league as the league service returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeagueWire {
    league_id: String,
    name: String,
    format: String,
}

pub struct HttpLeagueClient {
    http: Client,
    base_url: String,
}

impl HttpLeagueClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl LeagueApi for HttpLeagueClient {
    async fn get_league(&self, league_id: &LeagueId) -> Result<LeagueSnapshot, ClientError> {
        let url = format!("{}/leagues/{}", self.base_url, league_id);
        tracing::debug!(%url, "league-service GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Upstream(format!("league service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(translate_error_response("league-service", response).await);
        }

        let wire = response
            .json::<LeagueWire>()
            .await
            .map_err(|e| ClientError::Upstream(format!("malformed league response: {}", e)))?;

        let league_id = LeagueId::try_new(wire.league_id)
            .ok_or_else(|| ClientError::Upstream("malformed league id in response".to_string()))?;

        Ok(LeagueSnapshot {
            league_id,
            name: wire.name,
            format: wire.format,
        })
    }
}
