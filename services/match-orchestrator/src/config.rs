//! Environment-driven configuration
//!
//! Collaborator base URLs and the outbound timeout come from the
//! environment with local-development defaults, mirroring how the rest of
//! the fleet is configured per deployment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub league_base_url: String,
    pub team_base_url: String,
    pub venue_base_url: String,
    /// Bounded timeout applied to every remote call; a timeout is treated
    /// as that call's failure, never retried automatically
    pub upstream_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("MATCH_BIND_ADDR", "0.0.0.0:8080"),
            league_base_url: env_or("LEAGUE_SERVICE_URL", "http://localhost:8081/api/v1"),
            team_base_url: env_or("TEAMS_SERVICE_URL", "http://localhost:8082/api/v1"),
            venue_base_url: env_or("LOCATION_SERVICE_URL", "http://localhost:8083/api/v1"),
            upstream_timeout_secs: env_or("MATCH_UPSTREAM_TIMEOUT_SECS", "10")
                .parse()
                .unwrap_or(10),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_unset() {
        let config = Config::from_env();
        assert!(!config.bind_addr.is_empty());
        assert!(config.upstream_timeout_secs > 0);
    }
}
