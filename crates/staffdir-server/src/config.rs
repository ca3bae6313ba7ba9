//! Server configuration
//!
//! Read from the process environment after `.env` has been loaded:
//! - `STAFFDIR_ADDR`: listen address (default `0.0.0.0:8000`)
//! - `STAFFDIR_SEED`: start with the built-in dataset (default `true`)

use std::net::{Ipv4Addr, SocketAddr};

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STAFFDIR_ADDR is not a socket address: {0}")]
    InvalidAddr(String),

    #[error("STAFFDIR_SEED must be true or false, got {0}")]
    InvalidSeed(String),
}

/// Configuration for the HTTP server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,
    /// Whether the store starts with the built-in dataset
    pub seed: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            seed: true,
        }
    }
}

impl ServerConfig {
    /// Load from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("STAFFDIR_ADDR") {
            config.addr = addr
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;
        }

        if let Some(seed) = lookup("STAFFDIR_SEED") {
            config.seed = match seed.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => return Err(ConfigError::InvalidSeed(seed)),
            };
        }

        Ok(config)
    }
}
