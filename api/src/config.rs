use std::env;

use crate::domain::entities::Coordinate;
use crate::error::ConfigError;

pub const DEFAULT_SEARCH_URL: &str = "https://search.maven.org/solrsearch/select";
pub const DEFAULT_MAX_RESULTS: usize = 20;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_host: String,
    pub bind_port: u16,
    /// Coordinates to watch, in configuration order
    pub coordinates: Vec<Coordinate>,
    /// Public URL of this service, used as the feed link
    pub self_url: String,
    /// Logs request URLs and raw upstream bodies
    pub debug_enabled: bool,
    /// Rows requested per coordinate
    pub max_results: usize,
    pub search_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let require = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let bind_port = match get("BIND_PORT") {
            Some(port) => port.parse::<u16>().map_err(|_| ConfigError::Invalid {
                key: "BIND_PORT",
                value: port,
            })?,
            None => 8080,
        };

        let max_results = match get("MAX_RESULTS") {
            Some(rows) => rows
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::Invalid {
                    key: "MAX_RESULTS",
                    value: rows,
                })?,
            None => DEFAULT_MAX_RESULTS,
        };

        Ok(Self {
            bind_host: get("BIND_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            bind_port,
            coordinates: parse_coordinates(&require("ARTIFACTS")?)?,
            self_url: require("SELF_URL")?,
            debug_enabled: get("DEBUG_ENABLED").as_deref() == Some("true"),
            max_results,
            search_url: get("MAVEN_SEARCH_URL").unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string()),
        })
    }

    /// `host:port` string handed to the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}

/// Parse `group1:name1|group2:name2|...` into coordinates.
pub fn parse_coordinates(spec: &str) -> Result<Vec<Coordinate>, ConfigError> {
    spec.split('|')
        .map(|item| {
            let fields: Vec<&str> = item.split(':').collect();
            match fields.as_slice() {
                [group, name] if !group.is_empty() && !name.is_empty() => {
                    Ok(Coordinate::new(*group, *name))
                }
                _ => Err(ConfigError::InvalidCoordinate(item.to_string())),
            }
        })
        .collect()
}
