//! League snapshot type
//!
//! The league service owns league records. A match embeds a point-in-time
//! copy of the league it was validated against; the copy is read
//! convenience only and never authoritative for the league itself.

use crate::ids::LeagueId;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a league record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueSnapshot {
    pub league_id: LeagueId,
    pub name: String,
    /// Competition format, e.g. "Round Robin" or "Knockout"
    pub format: String,
}
