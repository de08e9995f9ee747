//! HTTP adapter for the teams service

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;
use types::ids::TeamId;
use types::team::TeamSnapshot;

use super::{translate_error_response, ClientError, TeamApi};

/// Wire shape of a team as the teams service returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamWire {
    team_id: String,
    name: String,
    coach: String,
    founding_year: i32,
    budget: Decimal,
}

pub struct HttpTeamClient {
    http: Client,
    base_url: String,
}

impl HttpTeamClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TeamApi for HttpTeamClient {
    async fn get_team(&self, team_id: &TeamId) -> Result<TeamSnapshot, ClientError> {
        let url = format!("{}/teams/{}", self.base_url, team_id);
        tracing::debug!(%url, "teams-service GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Upstream(format!("teams service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(translate_error_response("teams-service", response).await);
        }

        let wire = response
            .json::<TeamWire>()
            .await
            .map_err(|e| ClientError::Upstream(format!("malformed team response: {}", e)))?;

        let team_id = TeamId::try_new(wire.team_id)
            .ok_or_else(|| ClientError::Upstream("malformed team id in response".to_string()))?;

        Ok(TeamSnapshot {
            team_id,
            name: wire.name,
            coach: wire.coach,
            founding_year: wire.founding_year,
            budget: wire.budget,
        })
    }
}
