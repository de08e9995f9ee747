//! Match orchestration engine
//!
//! Coordinates one logical operation across three independently owned
//! services without a shared transaction: validate against the league,
//! teams and location services in a fixed order, persist, then propagate
//! the venue-state change. Validation failures abort before any write.
//! Propagation failures after a write are surfaced (502) and logged with
//! both identifiers; the persisted record stands and must be reconciled
//! out of band. There is no automatic rollback and no hidden retry.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use types::errors::DomainError;
use types::ids::{LeagueId, MatchId, TeamId, VenueId};
use types::matches::{Match, MatchStatus};

use crate::clients::{ClientError, LeagueApi, TeamApi, VenueApi};
use crate::error::AppError;
use crate::models::{build_match, MatchRequest};
use crate::store::MatchStore;

/// Per-key mutual exclusion for operations that issue propagation calls.
///
/// Two concurrent mutations of the same match (or two creates against the
/// same venue) must not interleave their venue transitions; the storage
/// layer's per-key write ordering alone does not prevent that.
struct KeyedLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl KeyedLocks {
    fn new() -> Self {
        Self {
            locks: DashMap::new(),
        }
    }

    async fn acquire(&self, key: String) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(key)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

/// The core: validates, creates, updates and deletes match records while
/// driving venue-state transitions through the location service.
///
/// Wired explicitly against its three lookup interfaces and its storage
/// interface, so every pipeline is testable with substitute collaborators.
pub struct MatchOrchestrator {
    leagues: Arc<dyn LeagueApi>,
    teams: Arc<dyn TeamApi>,
    venues: Arc<dyn VenueApi>,
    store: Arc<dyn MatchStore>,
    locks: KeyedLocks,
}

impl MatchOrchestrator {
    pub fn new(
        leagues: Arc<dyn LeagueApi>,
        teams: Arc<dyn TeamApi>,
        venues: Arc<dyn VenueApi>,
        store: Arc<dyn MatchStore>,
    ) -> Self {
        Self {
            leagues,
            teams,
            venues,
            store,
            locks: KeyedLocks::new(),
        }
    }

    /// All matches recorded against an existing league
    pub async fn list_matches(&self, league_id: &LeagueId) -> Result<Vec<Match>, AppError> {
        self.leagues.get_league(league_id).await?;
        Ok(self.store.list_by_league(league_id))
    }

    /// Single match scoped by league
    pub async fn get_match(
        &self,
        league_id: &LeagueId,
        match_id: &MatchId,
    ) -> Result<Match, AppError> {
        self.leagues.get_league(league_id).await?;
        self.store
            .find(league_id, match_id)
            .ok_or_else(|| AppError::NotFound(format!("Match not found with ID: {}", match_id)))
    }

    /// Create a match once league, team and venue all resolve and pass the
    /// aggregate checks. The record is persisted with status forced to
    /// `scheduled`, then the venue is asked to move to `upcoming`.
    pub async fn create_match(
        &self,
        league_id: &LeagueId,
        request: MatchRequest,
    ) -> Result<Match, AppError> {
        let team_id = parse_team_id(&request.team_id)?;
        let venue_id = parse_venue_id(&request.venue_id)?;

        let _guard = self.locks.acquire(format!("venue:{}", venue_id)).await;

        let league = self.leagues.get_league(league_id).await?;

        let team = self
            .teams
            .get_team(&team_id)
            .await
            .map_err(reference_as_invalid_input)?;

        if !request.duration.in_allowed_range() {
            return Err(DomainError::InvalidDuration {
                value: request.duration,
            }
            .into());
        }

        let venue = self
            .venues
            .get_venue(&venue_id)
            .await
            .map_err(reference_as_invalid_input)?;

        // Aggregate invariant: a venue hosting a live match is not bookable
        if !venue.state.is_bookable() {
            return Err(DomainError::VenueUnavailable {
                venue_id: venue.venue_id.clone(),
                state: venue.state,
            }
            .into());
        }

        let record = build_match(
            &request,
            MatchId::new(),
            MatchStatus::Scheduled,
            league,
            team,
            venue,
        );
        let saved = self.store.save(record);

        // Propagation happens after the write; a failure here leaves the
        // persisted record and the venue state disagreeing until reconciled
        if let Err(err) = self
            .venues
            .apply_state_transition(&venue_id, MatchStatus::Scheduled)
            .await
        {
            tracing::error!(
                match_id = %saved.match_id,
                venue_id = %venue_id,
                %err,
                "venue transition failed after match was persisted"
            );
            return Err(err.into());
        }

        tracing::debug!(match_id = %saved.match_id, "created match");
        Ok(saved)
    }

    /// Update a match, driving venue transitions for status changes and
    /// releasing the old venue when the booking moves.
    pub async fn update_match(
        &self,
        league_id: &LeagueId,
        match_id: &MatchId,
        request: MatchRequest,
    ) -> Result<Match, AppError> {
        let team_id = parse_team_id(&request.team_id)?;
        let venue_id = parse_venue_id(&request.venue_id)?;

        let _guard = self.locks.acquire(format!("match:{}", match_id)).await;

        let league = self.leagues.get_league(league_id).await?;

        let existing = self
            .store
            .find(league_id, match_id)
            .ok_or_else(|| AppError::NotFound(format!("Match not found with ID: {}", match_id)))?;

        if !request.duration.in_allowed_range() {
            return Err(DomainError::InvalidDuration {
                value: request.duration,
            }
            .into());
        }

        if existing.is_completed() {
            return Err(DomainError::CompletedMatchImmutable.into());
        }

        // Status change propagates to the venue currently booked
        let new_status = request.status;
        if new_status != existing.status {
            self.venues
                .apply_state_transition(&existing.venue.venue_id, new_status)
                .await?;
        }

        // Venue change: validate the new venue, release the old one, then
        // book the new one with the requested status
        if existing.venue.venue_id != venue_id {
            let new_venue = self
                .venues
                .get_venue(&venue_id)
                .await
                .map_err(reference_as_invalid_input)?;

            if !new_venue.state.is_bookable() {
                return Err(DomainError::VenueUnavailable {
                    venue_id: new_venue.venue_id.clone(),
                    state: new_venue.state,
                }
                .into());
            }

            self.venues
                .apply_state_transition(&existing.venue.venue_id, MatchStatus::Canceled)
                .await?;
            self.venues
                .apply_state_transition(&venue_id, new_status)
                .await?;
        }

        // Re-resolve snapshots so the rebuilt record carries fresh copies
        let team = self
            .teams
            .get_team(&team_id)
            .await
            .map_err(reference_as_invalid_input)?;
        let venue = self
            .venues
            .get_venue(&venue_id)
            .await
            .map_err(reference_as_invalid_input)?;

        let record = build_match(
            &request,
            existing.match_id.clone(),
            new_status,
            league,
            team,
            venue,
        );
        let saved = self.store.save(record);

        tracing::debug!(match_id = %saved.match_id, "updated match");
        Ok(saved)
    }

    /// Delete a match, first unwinding its effect on venue state
    pub async fn delete_match(
        &self,
        league_id: &LeagueId,
        match_id: &MatchId,
    ) -> Result<(), AppError> {
        let _guard = self.locks.acquire(format!("match:{}", match_id)).await;

        self.leagues.get_league(league_id).await?;

        let existing = self
            .store
            .find(league_id, match_id)
            .ok_or_else(|| AppError::NotFound(format!("Match not found with ID: {}", match_id)))?;

        if existing.is_in_progress() {
            return Err(DomainError::MatchInProgress.into());
        }

        // Release the venue before removing the record
        self.venues
            .apply_state_transition(&existing.venue.venue_id, MatchStatus::Canceled)
            .await?;

        self.store.delete(match_id);
        tracing::debug!(%match_id, "deleted match");
        Ok(())
    }
}

/// Malformed identifiers never reach the network
fn parse_team_id(raw: &str) -> Result<TeamId, AppError> {
    TeamId::try_new(raw)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid teamId provided: {}", raw)))
}

fn parse_venue_id(raw: &str) -> Result<VenueId, AppError> {
    VenueId::try_new(raw)
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid venueId provided: {}", raw)))
}

/// A missing team or venue is the caller's bad reference, not a missing
/// match resource, so remote 404s on those lookups surface as 422
fn reference_as_invalid_input(err: ClientError) -> AppError {
    match err {
        ClientError::NotFound(msg) | ClientError::InvalidInput(msg) => AppError::InvalidInput(msg),
        ClientError::Upstream(msg) => AppError::Upstream(msg),
    }
}
