//! Process configuration read from the environment.

use std::env;

pub const DEFAULT_LISTEN_ADDRESS: &str = "localhost:8888";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `LISTEN_ADDRESS`, the socket address to bind.
    pub listen_address: String,
    /// `TODOMVC_LOG_JSON`, emit logs as JSON lines.
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_address: DEFAULT_LISTEN_ADDRESS.to_string(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source. Empty values count
    /// as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            listen_address: get("LISTEN_ADDRESS").unwrap_or(defaults.listen_address),
            log_json: get("TODOMVC_LOG_JSON")
                .and_then(|v| parse_bool(&v))
                .unwrap_or(defaults.log_json),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}
