use anyhow::{Context, Result};
use dsd_discover::DiscoverConfig;
use dsd_observe::{LoggerConfig, LoggerFormat, LoggerLevel};

pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Everything the daemon reads from its environment, resolved once at startup.
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub logger: LoggerConfig,
    pub discover: DiscoverConfig,
}

impl AgentConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values (e.g. compose `LOG_LEVEL=${LOG_LEVEL}`) mean "unset".
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut logger = LoggerConfig::default();
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            logger.level = LoggerLevel::new(&level).context("LOG_LEVEL")?;
        }
        if let Some(format) = non_blank(ENV_LOG_FORMAT) {
            logger.format = format.parse::<LoggerFormat>().context("LOG_FORMAT")?;
        }
        let discover = DiscoverConfig::from_lookup(&lookup).context("discovery configuration")?;

        Ok(Self { logger, discover })
    }
}
