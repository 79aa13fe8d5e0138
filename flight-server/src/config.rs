//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Errors from reading the environment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed
    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Everything needed to start the server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Generated airports table
    pub airports_path: PathBuf,

    /// Generated routes table
    pub routes_path: PathBuf,

    /// Address to listen on
    pub bind_addr: SocketAddr,

    /// Route search parameters
    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            airports_path: PathBuf::from("./resources/airports_generated.csv"),
            routes_path: PathBuf::from("./resources/routes_generated.csv"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            search: SearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Unset variables keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("FLIGHT_AIRPORTS_PATH") {
            config.airports_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("FLIGHT_ROUTES_PATH") {
            config.routes_path = PathBuf::from(path);
        }
        if let Some(addr) = parse(&lookup, "FLIGHT_BIND_ADDR")? {
            config.bind_addr = addr;
        }
        if let Some(hops) = parse(&lookup, "FLIGHT_DEFAULT_HOPS")? {
            config.search.default_hop_budget = hops;
        }
        if let Some(ms) = parse(&lookup, "FLIGHT_SEARCH_TIMEOUT_MS")? {
            config.search.search_timeout_ms = ms;
        }

        if config.search.default_hop_budget > config.search.max_hop_budget {
            return Err(ConfigError::Invalid {
                name: "FLIGHT_DEFAULT_HOPS",
                value: config.search.default_hop_budget.to_string(),
            });
        }

        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    lookup(name)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid { name, value })
        })
        .transpose()
}
