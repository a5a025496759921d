//! Shell server configuration parsed from environment variables.

use std::num::ParseIntError;
use std::path::PathBuf;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DIST_DIR: &str = "client/dist";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{} has no index.html; build the client first (`trunk build` in client/)", .0.display())]
    MissingIndex(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub host: String,
    pub port: u16,
    pub dist_dir: PathBuf,
}

impl ShellConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `HOST`: default `0.0.0.0`
    /// - `PORT`: default 3000
    /// - `DIST_DIR`: built client directory, default `client/dist`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = match lookup("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?,
            None => DEFAULT_PORT,
        };
        let dist_dir = lookup("DIST_DIR").map_or_else(|| PathBuf::from(DEFAULT_DIST_DIR), PathBuf::from);
        Ok(Self { host, port, dist_dir })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Ensure the dist directory holds the page every route falls back to.
    pub fn check_dist(&self) -> Result<(), ConfigError> {
        if self.dist_dir.join("index.html").is_file() {
            Ok(())
        } else {
            Err(ConfigError::MissingIndex(self.dist_dir.clone()))
        }
    }
}
