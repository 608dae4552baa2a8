use std::env;
use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5001;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    /// `None` allows any origin.
    pub cors_allowed_origins: Option<Vec<String>>,
    pub production: bool,
    pub seed_sample_events: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            cors_allowed_origins: None,
            production: false,
            seed_sample_events: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                name: "HOST",
                value: host_raw.clone(),
            })?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "PORT",
                    value: raw.clone(),
                })?,
            None => DEFAULT_PORT,
        };

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>()
            })
            .filter(|origins| !origins.is_empty());

        let production = lookup("RUST_ENV")
            .map(|v| v.trim().eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        let seed_sample_events = match lookup("SEED_SAMPLE_EVENTS") {
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::InvalidValue {
                name: "SEED_SAMPLE_EVENTS",
                value: raw,
            })?,
            None => false,
        };

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            production,
            seed_sample_events,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
