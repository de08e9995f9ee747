//! Team snapshot type

use crate::ids::TeamId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Point-in-time copy of a team record as returned by the teams service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub team_id: TeamId,
    pub name: String,
    pub coach: String,
    pub founding_year: i32,
    /// Budget in the club's reporting currency; exact decimal, never float
    pub budget: Decimal,
}
