use std::path::PathBuf;
use std::time::Duration;

use dsd_model::DEFAULT_TARGET_FILE;

use crate::errors::ConfigError;

pub const ENV_ONLY_USE_IP: &str = "ONLY_USE_IP";
pub const ENV_TARGET_FILE: &str = "TARGET_FILE";
pub const ENV_POLL_INTERVAL_MS: &str = "POLL_INTERVAL_MS";
pub const ENV_DOCKER_SOCKET: &str = "DOCKER_SOCKET";

const DEFAULT_INTERVAL_MS: u64 = 30_000;
const DEFAULT_DOCKER_SOCKET: &str = "/var/run/docker.sock";

/// How the host part of a scrape target is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HostnameMode {
    /// Configured container hostname, overridable with `prometheus-scrape.hostname`.
    #[default]
    Configured,
    /// IP address of the container's first network, `localhost` when none is known.
    IpOnly,
}

impl HostnameMode {
    /// `ONLY_USE_IP` semantics: only the exact string `"true"` turns IP mode on.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("true") => HostnameMode::IpOnly,
            _ => HostnameMode::Configured,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DiscoverConfig {
    /// Published discovery file; the temp file is this path plus `.new`.
    pub target_file: PathBuf,
    /// Period between cycle starts.
    pub interval_ms: u64,
    pub hostname_mode: HostnameMode,
    /// Unix socket of the Docker engine.
    pub docker_socket: String,
}

impl Default for DiscoverConfig {
    fn default() -> Self {
        Self {
            target_file: PathBuf::from(DEFAULT_TARGET_FILE),
            interval_ms: DEFAULT_INTERVAL_MS,
            hostname_mode: HostnameMode::default(),
            docker_socket: DEFAULT_DOCKER_SOCKET.to_string(),
        }
    }
}

impl DiscoverConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup; unset variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self {
            hostname_mode: HostnameMode::from_flag(lookup(ENV_ONLY_USE_IP).as_deref()),
            ..Self::default()
        };

        if let Some(path) = lookup(ENV_TARGET_FILE) {
            cfg.target_file = PathBuf::from(path);
        }
        if let Some(raw) = lookup(ENV_POLL_INTERVAL_MS) {
            cfg.interval_ms =
                raw.trim()
                    .parse()
                    .map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
                        var: ENV_POLL_INTERVAL_MS,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }
        if let Some(socket) = lookup(ENV_DOCKER_SOCKET) {
            cfg.docker_socket = socket;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("poll interval must be > 0".into()));
        }
        if self.target_file.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("target file path is empty".into()));
        }
        if self.docker_socket.trim().is_empty() {
            return Err(ConfigError::Invalid("docker socket path is empty".into()));
        }
        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}
