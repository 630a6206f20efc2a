//! Server configuration parsed from environment variables.
//!
//! The Leptos options (from `[[workspace.metadata.leptos]]`, or the env
//! variables cargo-leptos exports) provide the defaults; the `ARENA_*`
//! variables below override them at runtime.

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use leptos::prelude::LeptosOptions;

pub const HOST_VAR: &str = "ARENA_HOST";
pub const PORT_VAR: &str = "ARENA_PORT";
pub const SITE_ROOT_VAR: &str = "ARENA_SITE_ROOT";

/// Errors produced while assembling the server configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A host override is not an IP address.
    #[error("invalid {var}: {value:?} is not an IP address")]
    InvalidHost { var: &'static str, value: String },

    /// A port override is not a valid port number.
    #[error("invalid {var}: {value:?} is not a port number")]
    InvalidPort { var: &'static str, value: String },

    /// The Leptos configuration could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub site_root: Option<PathBuf>,
}

impl ServerConfig {
    /// Build typed server config from the process environment.
    ///
    /// Optional:
    /// - `ARENA_HOST`: IP address to bind
    /// - `ARENA_PORT`: port to bind
    /// - `ARENA_SITE_ROOT`: directory holding the built `pkg/` assets
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let host = var(HOST_VAR)
            .map(|value| value.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost { var: HOST_VAR, value }))
            .transpose()?;
        let port = var(PORT_VAR)
            .map(|value| value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { var: PORT_VAR, value }))
            .transpose()?;
        let site_root = var(SITE_ROOT_VAR).map(PathBuf::from);

        Ok(Self { host, port, site_root })
    }

    /// Address to bind, keeping whatever part of `fallback` is not overridden.
    pub fn resolve_addr(&self, fallback: SocketAddr) -> SocketAddr {
        SocketAddr::new(self.host.unwrap_or(fallback.ip()), self.port.unwrap_or(fallback.port()))
    }

    /// Apply the overrides to options loaded by Leptos.
    pub fn apply(&self, options: &mut LeptosOptions) {
        options.site_addr = self.resolve_addr(options.site_addr);
        if let Some(root) = &self.site_root {
            options.site_root = Arc::from(root.to_string_lossy().as_ref());
        }
    }
}

/// Load the Leptos options and apply the environment overrides.
pub fn load_leptos_options(config: &ServerConfig) -> Result<LeptosOptions, ConfigError> {
    let conf = leptos::prelude::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
    let mut options = conf.leptos_options;
    config.apply(&mut options);
    Ok(options)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
