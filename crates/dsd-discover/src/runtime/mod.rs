mod docker;
pub use docker::DockerRuntime;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;
use dsd_model::{ContainerInspection, ContainerSummary};

use crate::errors::DiscoverError;

/// Read-only view of a container engine.
#[async_trait]
pub trait ContainerRuntime: Send + Sync {
    /// Running containers only.
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DiscoverError>;

    async fn inspect_container(&self, id: &str) -> Result<ContainerInspection, DiscoverError>;
}
