//! Connection settings, with environment overrides.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use primitives::{DEFAULT_HOST, DEFAULT_PORT};

use crate::error::ClientError;

/// Environment variable overriding [`ClientConfig::host`].
pub const HOST_ENV: &str = "REWIND_HOST";
/// Environment variable overriding [`ClientConfig::port`].
pub const PORT_ENV: &str = "REWIND_PORT";

/// Where the viewer listens and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Host name or IP address of the viewer.
    pub host: String,
    /// TCP port of the viewer. Zero is rejected by [`ClientConfig::validate`].
    pub port: u16,
    /// Disable Nagle's algorithm. Messages are small and the viewer is live.
    pub nodelay: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            port: DEFAULT_PORT,
            nodelay: true,
        }
    }
}

impl ClientConfig {
    /// Explicit endpoint with the remaining settings at their defaults.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `REWIND_HOST`: default `127.0.0.1`
    /// - `REWIND_PORT`: default `9111`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] for a blank host or a port that
    /// is not an integer in `1..=65535`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(env_var)
    }

    /// Same as [`ClientConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_ENV) {
            config.host = host.trim().to_owned();
        }
        if let Some(raw) = lookup(PORT_ENV) {
            config.port = parse_port(&raw)?;
        }
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfig`] for a blank host or port `0`.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.host.trim().is_empty() {
            return Err(ClientError::InvalidConfig {
                key: HOST_ENV,
                value: self.host.clone(),
            });
        }
        if self.port == 0 {
            return Err(ClientError::InvalidConfig {
                key: PORT_ENV,
                value: self.port.to_string(),
            });
        }
        Ok(())
    }

    /// `host:port`, for logs and error messages.
    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_var(key: &str) -> Option<String> {
    match std::env::var(key) {
        Ok(value) => Some(value),
        Err(_) => None,
    }
}

fn parse_port(raw: &str) -> Result<u16, ClientError> {
    match raw.trim().parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ClientError::InvalidConfig {
            key: PORT_ENV,
            value: raw.to_owned(),
        }),
    }
}
