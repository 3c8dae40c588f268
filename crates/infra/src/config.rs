//! Environment-driven configuration.
//!
//! Every setting has a hardcoded local fallback so a service starts with no
//! environment at all. Fallbacks that matter are logged at `warn`.

use std::net::SocketAddr;

/// Relay base URL used when `EVENT_BUS_URL` is unset.
pub const DEFAULT_RELAY_URL: &str = "http://localhost:4005";

pub const POSTS_PORT: u16 = 4000;
pub const COMMENTS_PORT: u16 = 4001;
pub const MODERATION_PORT: u16 = 4003;
pub const RELAY_PORT: u16 = 4005;

/// Settings for a participant service (posts, comments, moderation).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub relay_url: String,
}

impl ServiceConfig {
    pub fn from_env(default_port: u16) -> Self {
        Self::from_lookup(default_port, |key| std::env::var(key).ok())
    }

    pub fn from_lookup(default_port: u16, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let relay_url = match lookup("EVENT_BUS_URL") {
            Some(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ => {
                tracing::warn!("EVENT_BUS_URL not set; using {DEFAULT_RELAY_URL}");
                DEFAULT_RELAY_URL.to_string()
            }
        };

        Self {
            port: port_from(&lookup, default_port),
            relay_url,
        }
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Settings for the relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub port: u16,
    /// Base URLs of every participant that receives broadcasts.
    pub participants: Vec<String>,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let configured: Vec<String> = lookup("RELAY_PARTICIPANTS")
            .map(|raw| split_list(&raw))
            .unwrap_or_default()
            .into_iter()
            .map(|url| url.trim_end_matches('/').to_string())
            .collect();
        let participants = if configured.is_empty() {
            let defaults = Self::default_participants();
            tracing::warn!(participants = ?defaults, "RELAY_PARTICIPANTS not set or blank; using local defaults");
            defaults
        } else {
            configured
        };

        Self {
            port: port_from(&lookup, RELAY_PORT),
            participants,
        }
    }

    pub fn default_participants() -> Vec<String> {
        [POSTS_PORT, COMMENTS_PORT, MODERATION_PORT]
            .into_iter()
            .map(|port| format!("http://localhost:{port}"))
            .collect()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

/// Split a comma-separated setting, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn port_from(lookup: &impl Fn(&str) -> Option<String>, default_port: u16) -> u16 {
    match lookup("PORT") {
        None => default_port,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(value = %raw, default_port, "invalid PORT; using default");
            default_port
        }),
    }
}
