//! Configuration management for the todo server.
//!
//! Loads configuration from environment variables with sensible defaults.
//! A `.env` file in the working directory is honoured by the binary, which
//! calls `dotenvy::dotenv()` before [`Config::from_env`].

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to bind to
    pub port: u16,
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Pre-seed a handful of demo todos at startup
    pub seed: bool,
    /// Install the Prometheus recorder and serve `/metrics`
    pub metrics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            log_filter: "todo_web=info,tower_http=info".to_string(),
            seed: false,
            metrics: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Unset or unparsable variables fall back to [`Config::default`].
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            host: lookup("TODO_HOST").unwrap_or(defaults.host),
            port: lookup("TODO_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            log_filter: lookup("TODO_LOG").unwrap_or(defaults.log_filter),
            seed: lookup("TODO_SEED")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.seed),
            metrics: lookup("TODO_METRICS")
                .and_then(|s| parse_flag(&s))
                .unwrap_or(defaults.metrics),
        }
    }

    /// `host:port` to bind the listener to
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
