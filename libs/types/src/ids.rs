//! Unique identifier types for the match orchestration system
//!
//! Generated match identifiers use UUID v7 for time-sortable ordering.
//! Foreign identifiers (league, team, venue) are owned by their respective
//! services; here they are opaque strings validated only for the canonical
//! 36-character UUID length before any remote call is attempted.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Canonical hyphenated-UUID length every identifier must have
pub const ID_LENGTH: usize = 36;

/// Unique identifier for a match
///
/// The only identifier this system generates itself. Uses UUID v7 so
/// matches sort chronologically by creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(String);

impl MatchId {
    /// Create a new MatchId with current timestamp
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Try to create a MatchId from an existing string, returning None if
    /// it does not have the canonical length
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.len() == ID_LENGTH {
            Some(Self(s))
        } else {
            None
        }
    }

    /// Get the identifier string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a league, owned by the league service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeagueId(String);

impl LeagueId {
    /// Try to create a LeagueId, returning None if the length is wrong
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.len() == ID_LENGTH {
            Some(Self(s))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a team, owned by the teams service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(String);

impl TeamId {
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.len() == ID_LENGTH {
            Some(Self(s))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a venue, owned by the location service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    pub fn try_new(id: impl Into<String>) -> Option<Self> {
        let s = id.into();
        if s.len() == ID_LENGTH {
            Some(Self(s))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
