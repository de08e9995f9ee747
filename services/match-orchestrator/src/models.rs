//! Request and response shapes for the match resource
//!
//! Conversions between wire models and the `Match` aggregate are explicit
//! functions here; the denormalized snapshot fields in the response are
//! copies embedded in the stored record, not live lookups.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::ids::MatchId;
use types::league::LeagueSnapshot;
use types::matches::{Match, MatchDuration, MatchResult, MatchStatus, ResultKind};
use types::team::TeamSnapshot;
use types::venue::{VenueAvailability, VenueSnapshot};

/// Body of POST/PUT on the match resource
#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub team_id: String,
    pub venue_id: String,
    #[serde(default)]
    pub score: String,
    pub status: MatchStatus,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: MatchDuration,
    pub result_kind: Option<ResultKind>,
    pub result_minute: Option<u16>,
}

impl MatchRequest {
    /// Result value object, present only when a kind was supplied
    pub fn result(&self) -> Option<MatchResult> {
        self.result_kind.map(|kind| MatchResult {
            kind,
            minute: self.result_minute.unwrap_or(0),
        })
    }
}

/// Denormalized view of a match, flat like the stored snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub match_id: MatchId,
    pub score: String,
    pub status: MatchStatus,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: MatchDuration,
    pub result_kind: Option<ResultKind>,
    pub result_minute: Option<u16>,

    pub league_id: String,
    pub team_id: String,
    pub venue_id: String,

    pub venue_name: String,
    pub venue_city: String,
    pub venue_capacity: u32,
    pub venue_state: VenueAvailability,

    pub team_name: String,
    pub coach: String,
    pub team_founding_year: i32,
    pub team_budget: Decimal,

    pub league_name: String,
    pub league_format: String,
}

/// Build the response view from a stored record
pub fn match_to_response(record: &Match) -> MatchResponse {
    MatchResponse {
        match_id: record.match_id.clone(),
        score: record.score.clone(),
        status: record.status,
        date: record.date,
        time: record.time,
        duration: record.duration,
        result_kind: record.result.map(|r| r.kind),
        result_minute: record.result.map(|r| r.minute),
        league_id: record.league.league_id.to_string(),
        team_id: record.team.team_id.to_string(),
        venue_id: record.venue.venue_id.to_string(),
        venue_name: record.venue.name.clone(),
        venue_city: record.venue.city.clone(),
        venue_capacity: record.venue.capacity,
        venue_state: record.venue.state,
        team_name: record.team.name.clone(),
        coach: record.team.coach.clone(),
        team_founding_year: record.team.founding_year,
        team_budget: record.team.budget,
        league_name: record.league.name.clone(),
        league_format: record.league.format.clone(),
    }
}

/// Assemble a match record from a validated request and the snapshots
/// resolved during validation. Identity is supplied by the caller so
/// update can preserve it.
pub fn build_match(
    request: &MatchRequest,
    match_id: MatchId,
    status: MatchStatus,
    league: LeagueSnapshot,
    team: TeamSnapshot,
    venue: VenueSnapshot,
) -> Match {
    Match {
        match_id,
        league,
        team,
        venue,
        score: request.score.clone(),
        status,
        date: request.date,
        time: request.time,
        duration: request.duration,
        result: request.result(),
    }
}
