//! Venue snapshot and availability types
//!
//! The location service owns venue records and their availability state.
//! The orchestrator consults the state during validation and requests
//! transitions through the location service; it never writes the state
//! directly.

use crate::ids::VenueId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Occupancy status of a venue, owned by the location service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VenueAvailability {
    /// Booked for a scheduled match
    Upcoming,
    /// A match is currently being played here
    Live,
    /// The most recent match here has finished
    Past,
    /// The booking was released
    Canceled,
}

impl VenueAvailability {
    /// Whether a new match may be scheduled against this venue.
    ///
    /// A venue hosting a live match is never bookable; `canceled` is also
    /// excluded because a released venue must be re-listed by the location
    /// service before it takes new bookings.
    pub fn is_bookable(&self) -> bool {
        matches!(self, VenueAvailability::Upcoming | VenueAvailability::Past)
    }
}

impl fmt::Display for VenueAvailability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VenueAvailability::Upcoming => "upcoming",
            VenueAvailability::Live => "live",
            VenueAvailability::Past => "past",
            VenueAvailability::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

/// Point-in-time copy of a venue record as returned by the location service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueSnapshot {
    pub venue_id: VenueId,
    pub name: String,
    pub city: String,
    pub capacity: u32,
    pub state: VenueAvailability,
}
