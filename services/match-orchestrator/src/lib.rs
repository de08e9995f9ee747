//! Match orchestration service
//!
//! Coordinates the lifecycle of a match across three independently owned
//! services (leagues, teams, venues) reachable only over HTTP. The hard
//! part lives in [`orchestrator`]: ordered cross-service validation,
//! venue-state propagation driven by the match lifecycle, and the
//! compensating release call when an update moves a match to a different
//! venue. Everything else is the surface around it.

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod orchestrator;
pub mod router;
pub mod state;
pub mod store;
