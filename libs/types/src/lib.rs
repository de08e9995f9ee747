//! Types library for the match orchestration system
//!
//! This library provides the domain type definitions shared between the
//! orchestration service and its tests: identifiers, the match aggregate,
//! the status enumerations that drive venue-state propagation, and the
//! snapshot shapes copied from the collaborating services.
//!
//! # Modules
//! - `ids`: Unique identifiers (MatchId, LeagueId, TeamId, VenueId)
//! - `league`: League snapshot
//! - `team`: Team snapshot
//! - `venue`: Venue snapshot and availability state
//! - `matches`: Match aggregate, status, duration, result
//! - `errors`: Pure-domain error taxonomy

pub mod errors;
pub mod ids;
pub mod league;
pub mod matches;
pub mod team;
pub mod venue;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::errors::*;
    pub use crate::ids::*;
    pub use crate::league::*;
    pub use crate::matches::*;
    pub use crate::team::*;
    pub use crate::venue::*;
}
