//! Match aggregate and lifecycle types
//!
//! A match references one league, one team and one venue, each owned by a
//! different service. The embedded snapshots are copies taken at
//! validation time; the referenced services remain the source of truth.

use crate::ids::MatchId;
use crate::league::LeagueSnapshot;
use crate::team::TeamSnapshot;
use crate::venue::{VenueAvailability, VenueSnapshot};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a match
///
/// Drives venue-state propagation: every mutating operation that changes
/// the status asks the location service to move the venue accordingly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Scheduled,
    InProgress,
    Completed,
    Canceled,
}

impl MatchStatus {
    /// The venue availability a venue should move to when it hosts a match
    /// with this status.
    ///
    /// Total over the closed enumeration, so no status can silently skip
    /// propagation.
    pub fn venue_transition(&self) -> VenueAvailability {
        match self {
            MatchStatus::Scheduled => VenueAvailability::Upcoming,
            MatchStatus::InProgress => VenueAvailability::Live,
            MatchStatus::Completed => VenueAvailability::Past,
            MatchStatus::Canceled => VenueAvailability::Canceled,
        }
    }
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MatchStatus::Scheduled => "scheduled",
            MatchStatus::InProgress => "in_progress",
            MatchStatus::Completed => "completed",
            MatchStatus::Canceled => "canceled",
        };
        write!(f, "{}", s)
    }
}

/// Kind of result recorded for a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    Winner,
    Loser,
    Draw,
}

/// Result of a match, present only once one exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub kind: ResultKind,
    /// Match minute at which the result was recorded
    pub minute: u16,
}

/// Shortest allowed match duration (inclusive)
pub const MIN_DURATION: NaiveTime = match NaiveTime::from_hms_opt(1, 30, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Longest allowed match duration (inclusive)
pub const MAX_DURATION: NaiveTime = match NaiveTime::from_hms_opt(3, 0, 0) {
    Some(t) => t,
    None => unreachable!(),
};

/// Planned duration of a match, expressed as hours and minutes
///
/// Carried as a wall-clock-free `NaiveTime` ("01:45:00") to stay
/// compatible with the duration tokens the collaborating services emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchDuration(NaiveTime);

impl MatchDuration {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    pub fn from_hms(hours: u32, minutes: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hours, minutes, 0).map(Self)
    }

    /// Whether the duration lies within the allowed scheduling window,
    /// both bounds inclusive
    pub fn in_allowed_range(&self) -> bool {
        self.0 >= MIN_DURATION && self.0 <= MAX_DURATION
    }

    pub fn as_time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for MatchDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// The match aggregate under orchestration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Immutable after creation
    pub match_id: MatchId,

    pub league: LeagueSnapshot,
    pub team: TeamSnapshot,
    pub venue: VenueSnapshot,

    /// Free-form score text, may be empty
    pub score: String,
    pub status: MatchStatus,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: MatchDuration,
    pub result: Option<MatchResult>,
}

impl Match {
    /// Completed matches are immutable except for deletion
    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// In-progress matches cannot be deleted
    pub fn is_in_progress(&self) -> bool {
        self.status == MatchStatus::InProgress
    }
}
