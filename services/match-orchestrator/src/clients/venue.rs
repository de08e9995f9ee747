//! HTTP adapter for the location service
//!
//! The only adapter with a write path: besides venue lookup it exposes the
//! state-transition request the orchestrator uses to keep venue occupancy
//! in step with the match lifecycle. The transition body is the match
//! status token; the location service owns the mapping to its own state.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use types::ids::VenueId;
use types::matches::MatchStatus;
use types::venue::{VenueAvailability, VenueSnapshot};

use super::{translate_error_response, ClientError, VenueApi};

/// Wire shape of a venue as the location service returns it
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VenueWire {
    venue_id: String,
    name: String,
    city: String,
    capacity: u32,
    venue_state: VenueAvailability,
}

impl VenueWire {
    fn into_snapshot(self) -> Result<VenueSnapshot, ClientError> {
        let venue_id = VenueId::try_new(self.venue_id)
            .ok_or_else(|| ClientError::Upstream("malformed venue id in response".to_string()))?;
        Ok(VenueSnapshot {
            venue_id,
            name: self.name,
            city: self.city,
            capacity: self.capacity,
            state: self.venue_state,
        })
    }
}

pub struct HttpVenueClient {
    http: Client,
    base_url: String,
}

impl HttpVenueClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl VenueApi for HttpVenueClient {
    async fn get_venue(&self, venue_id: &VenueId) -> Result<VenueSnapshot, ClientError> {
        let url = format!("{}/venues/{}", self.base_url, venue_id);
        tracing::debug!(%url, "location-service GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Upstream(format!("location service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(translate_error_response("location-service", response).await);
        }

        let wire = response
            .json::<VenueWire>()
            .await
            .map_err(|e| ClientError::Upstream(format!("malformed venue response: {}", e)))?;

        wire.into_snapshot()
    }

    async fn apply_state_transition(
        &self,
        venue_id: &VenueId,
        status: MatchStatus,
    ) -> Result<VenueSnapshot, ClientError> {
        let url = format!("{}/venues/{}/state", self.base_url, venue_id);
        tracing::debug!(%url, %status, "location-service PATCH venue state");

        let response = self
            .http
            .patch(&url)
            .json(&status)
            .send()
            .await
            .map_err(|e| ClientError::Upstream(format!("location service unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(translate_error_response("location-service", response).await);
        }

        let wire = response
            .json::<VenueWire>()
            .await
            .map_err(|e| ClientError::Upstream(format!("malformed venue response: {}", e)))?;

        wire.into_snapshot()
    }
}
