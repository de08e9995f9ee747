//! Durable keyed storage for match records
//!
//! The persistence technology is deliberately hidden behind a trait; only
//! the query shapes the orchestrator needs are specified. The in-memory
//! implementation backs the service in tests and single-node deployments.

use dashmap::DashMap;
use types::ids::{LeagueId, MatchId};
use types::matches::Match;

/// Storage interface for match records
pub trait MatchStore: Send + Sync {
    /// Look up a match by league and match identifier
    fn find(&self, league_id: &LeagueId, match_id: &MatchId) -> Option<Match>;

    /// Look up a match by its identifier alone
    fn find_by_match_id(&self, match_id: &MatchId) -> Option<Match>;

    /// All matches recorded against the given league
    fn list_by_league(&self, league_id: &LeagueId) -> Vec<Match>;

    /// Insert or replace the record keyed by its match identifier
    fn save(&self, record: Match) -> Match;

    /// Remove the record; returns whether anything was removed
    fn delete(&self, match_id: &MatchId) -> bool;
}

/// DashMap-backed store keyed by match id
#[derive(Default)]
pub struct InMemoryMatchStore {
    records: DashMap<String, Match>,
}

impl InMemoryMatchStore {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }
}

impl MatchStore for InMemoryMatchStore {
    fn find(&self, league_id: &LeagueId, match_id: &MatchId) -> Option<Match> {
        self.records
            .get(match_id.as_str())
            .filter(|r| r.league.league_id == *league_id)
            .map(|r| r.value().clone())
    }

    fn find_by_match_id(&self, match_id: &MatchId) -> Option<Match> {
        self.records
            .get(match_id.as_str())
            .map(|r| r.value().clone())
    }

    fn list_by_league(&self, league_id: &LeagueId) -> Vec<Match> {
        self.records
            .iter()
            .filter(|r| r.league.league_id == *league_id)
            .map(|r| r.value().clone())
            .collect()
    }

    fn save(&self, record: Match) -> Match {
        self.records
            .insert(record.match_id.as_str().to_string(), record.clone());
        record
    }

    fn delete(&self, match_id: &MatchId) -> bool {
        self.records.remove(match_id.as_str()).is_some()
    }
}
