//! Container discovery for Prometheus `file_sd_configs`.
//!
//! A [`Publisher`] lists containers through a [`ContainerRuntime`], turns every
//! opted-in container into a scrape target with the [`Extractor`], and atomically
//! replaces the discovery file. [`poll`] drives it on a fixed period.
mod extract;
pub use extract::{Extractor, TargetBuilder};

mod runtime;
pub use runtime::{ContainerRuntime, DockerRuntime};

mod publish;
pub use publish::{CycleReport, Publisher, TargetFileWriter};

mod tasks;
pub use tasks::poll;

mod config;
pub use config::{DiscoverConfig, HostnameMode};

mod errors;
pub use errors::{ConfigError, DiscoverError};
