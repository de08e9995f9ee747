//! Pure-domain failure taxonomy
//!
//! Failures that can be decided without talking to any collaborator.
//! Service-level errors (remote 404/422, upstream outages) live with the
//! orchestrator; these are the rules a match record must satisfy on its
//! own.

use crate::ids::VenueId;
use crate::matches::MatchDuration;
use crate::venue::VenueAvailability;
use thiserror::Error;

/// Violations of the match aggregate's own invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Match duration must be between 01:30 and 03:00 hours, got {value}")]
    InvalidDuration { value: MatchDuration },

    #[error("Venue {venue_id} is not available for scheduling (state: {state})")]
    VenueUnavailable {
        venue_id: VenueId,
        state: VenueAvailability,
    },

    #[error("Cannot update completed match")]
    CompletedMatchImmutable,

    #[error("Cannot delete match that is in progress")]
    MatchInProgress,
}
