//! Configuration for the beacon
//!
//! Loads configuration from a TOML file with the few parameters the
//! beacon needs. The compiled-in defaults match the reference
//! deployment, so embedded hosts can skip the file entirely.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;

/// Top-level beacon configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BeaconConfig {
    pub network: NetworkConfig,
    pub sampling: SamplingConfig,
    pub logging: LoggingConfig,
}

/// Destination of the record stream
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// UDP destination for location records
    ///
    /// Examples:
    /// - `127.0.0.1:52077` - Local navigation client (reference setup)
    /// - `127.0.0.1:52080` - Alternate local port
    pub destination: String,
}

impl NetworkConfig {
    /// Parse the configured destination into a socket address
    pub fn destination_addr(&self) -> Result<SocketAddr> {
        self.destination
            .parse()
            .map_err(|_| Error::InvalidAddress(self.destination.clone()))
    }
}

/// Sampling pacing for self-driven sources
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SamplingConfig {
    /// Milliseconds between samples when the beacon paces itself.
    ///
    /// Only the fake source uses this; an embedded host drives the
    /// beacon from its own frame loop and ignores it.
    pub period_ms: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default log level (trace, debug, info, warn, error); the
    /// `RUST_LOG` environment variable overrides it
    pub level: String,
}

impl BeaconConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: BeaconConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Defaults matching the reference deployment: a navigation client
    /// listening on loopback port 52077, sampled twice a second.
    pub fn reference_defaults() -> Self {
        Self {
            network: NetworkConfig {
                destination: "127.0.0.1:52077".to_string(),
            },
            sampling: SamplingConfig { period_ms: 500 },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Default for BeaconConfig {
    fn default() -> Self {
        Self::reference_defaults()
    }
}
