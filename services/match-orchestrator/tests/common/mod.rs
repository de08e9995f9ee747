//! Substitute collaborators for exercising the validation pipelines
//!
//! The venue double records every state-transition request so tests can
//! assert exact call counts and targets.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};

use match_orchestrator::clients::{ClientError, LeagueApi, TeamApi, VenueApi};
use match_orchestrator::models::MatchRequest;
use match_orchestrator::orchestrator::MatchOrchestrator;
use match_orchestrator::store::InMemoryMatchStore;
use types::ids::{LeagueId, TeamId, VenueId};
use types::league::LeagueSnapshot;
use types::matches::{MatchDuration, MatchStatus};
use types::team::TeamSnapshot;
use types::venue::{VenueAvailability, VenueSnapshot};

pub const L1: &str = "11111111-1111-1111-1111-111111111111";
pub const T1: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
pub const V1: &str = "12345678-1234-1234-1234-123456789012";
pub const V2: &str = "87654321-4321-4321-4321-210987654321";
pub const V_LIVE: &str = "99999999-9999-9999-9999-999999999999";

pub fn league_id() -> LeagueId {
    LeagueId::try_new(L1).unwrap()
}

pub struct StubLeagueClient {
    leagues: HashMap<String, LeagueSnapshot>,
}

#[async_trait]
impl LeagueApi for StubLeagueClient {
    async fn get_league(&self, league_id: &LeagueId) -> Result<LeagueSnapshot, ClientError> {
        self.leagues
            .get(league_id.as_str())
            .cloned()
            .ok_or_else(|| {
                ClientError::NotFound(format!("League not found with ID: {}", league_id))
            })
    }
}

pub struct StubTeamClient {
    teams: HashMap<String, TeamSnapshot>,
}

#[async_trait]
impl TeamApi for StubTeamClient {
    async fn get_team(&self, team_id: &TeamId) -> Result<TeamSnapshot, ClientError> {
        self.teams.get(team_id.as_str()).cloned().ok_or_else(|| {
            ClientError::NotFound(format!("Team not found with ID: {}", team_id))
        })
    }
}

/// Venue double that applies transitions to its own state, exactly like
/// the location service: the target state is a pure function of the match
/// status, so repeating a transition is a no-op.
pub struct RecordingVenueClient {
    venues: Mutex<HashMap<String, VenueSnapshot>>,
    transitions: Mutex<Vec<(String, MatchStatus)>>,
    fail_transitions: Mutex<bool>,
}

impl RecordingVenueClient {
    pub fn transitions(&self) -> Vec<(String, MatchStatus)> {
        self.transitions.lock().unwrap().clone()
    }

    pub fn clear_transitions(&self) {
        self.transitions.lock().unwrap().clear();
    }

    pub fn fail_next_transitions(&self, fail: bool) {
        *self.fail_transitions.lock().unwrap() = fail;
    }

    pub fn venue_state(&self, venue_id: &str) -> Option<VenueAvailability> {
        self.venues.lock().unwrap().get(venue_id).map(|v| v.state)
    }
}

#[async_trait]
impl VenueApi for RecordingVenueClient {
    async fn get_venue(&self, venue_id: &VenueId) -> Result<VenueSnapshot, ClientError> {
        self.venues
            .lock()
            .unwrap()
            .get(venue_id.as_str())
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("Venue not found with ID: {}", venue_id)))
    }

    async fn apply_state_transition(
        &self,
        venue_id: &VenueId,
        status: MatchStatus,
    ) -> Result<VenueSnapshot, ClientError> {
        if *self.fail_transitions.lock().unwrap() {
            return Err(ClientError::Upstream(
                "location service returned 500".to_string(),
            ));
        }

        self.transitions
            .lock()
            .unwrap()
            .push((venue_id.to_string(), status));

        let mut venues = self.venues.lock().unwrap();
        let venue = venues.get_mut(venue_id.as_str()).ok_or_else(|| {
            ClientError::NotFound(format!("Venue not found with ID: {}", venue_id))
        })?;
        venue.state = status.venue_transition();
        Ok(venue.clone())
    }
}

pub struct Harness {
    pub orchestrator: MatchOrchestrator,
    pub venues: Arc<RecordingVenueClient>,
    pub store: Arc<InMemoryMatchStore>,
}

/// One league, one team, two bookable venues and one live venue
pub fn harness() -> Harness {
    let leagues = StubLeagueClient {
        leagues: HashMap::from([(
            L1.to_string(),
            LeagueSnapshot {
                league_id: league_id(),
                name: "Premier League".to_string(),
                format: "Round Robin".to_string(),
            },
        )]),
    };

    let teams = StubTeamClient {
        teams: HashMap::from([(
            T1.to_string(),
            TeamSnapshot {
                team_id: TeamId::try_new(T1).unwrap(),
                name: "MUFC".to_string(),
                coach: "Erik ten Hag".to_string(),
                founding_year: 1878,
                budget: "550000000.00".parse().unwrap(),
            },
        )]),
    };

    let venue = |id: &str, name: &str, state: VenueAvailability| VenueSnapshot {
        venue_id: VenueId::try_new(id).unwrap(),
        name: name.to_string(),
        city: "Manchester".to_string(),
        capacity: 76000,
        state,
    };
    let venues = Arc::new(RecordingVenueClient {
        venues: Mutex::new(HashMap::from([
            (V1.to_string(), venue(V1, "Old Trafford", VenueAvailability::Upcoming)),
            (V2.to_string(), venue(V2, "Etihad Stadium", VenueAvailability::Past)),
            (V_LIVE.to_string(), venue(V_LIVE, "Anfield", VenueAvailability::Live)),
        ])),
        transitions: Mutex::new(Vec::new()),
        fail_transitions: Mutex::new(false),
    });

    let store = Arc::new(InMemoryMatchStore::new());

    let orchestrator = MatchOrchestrator::new(
        Arc::new(leagues),
        Arc::new(teams),
        venues.clone(),
        store.clone(),
    );

    Harness {
        orchestrator,
        venues,
        store,
    }
}

/// Well-formed request against team T1 and the given venue
pub fn request(venue_id: &str, status: MatchStatus) -> MatchRequest {
    MatchRequest {
        team_id: T1.to_string(),
        venue_id: venue_id.to_string(),
        score: "1-0".to_string(),
        status,
        date: NaiveDate::from_ymd_opt(2025, 5, 10).unwrap(),
        time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
        duration: MatchDuration::from_hms(1, 30).unwrap(),
        result_kind: None,
        result_minute: None,
    }
}
