use std::collections::BTreeMap;

use async_trait::async_trait;
use bollard::container::{InspectContainerOptions, ListContainersOptions};
use bollard::models::{ContainerInspectResponse, ContainerSummary as DockerSummary};
use bollard::{API_DEFAULT_VERSION, Docker};
use dsd_model::{ContainerInspection, ContainerNetwork, ContainerSummary};
use tracing::{debug, instrument, trace};

use crate::errors::DiscoverError;
use crate::runtime::ContainerRuntime;

/// Per-request timeout of the engine client, in seconds.
const CLIENT_TIMEOUT_SECS: u64 = 120;

/// [`ContainerRuntime`] backed by the Docker Engine API.
#[derive(Clone)]
pub struct DockerRuntime {
    docker: Docker,
}

impl DockerRuntime {
    /// Connect to the engine listening on a unix socket.
    pub fn connect(socket: &str) -> Result<Self, DiscoverError> {
        let docker = Docker::connect_with_unix(socket, CLIENT_TIMEOUT_SECS, API_DEFAULT_VERSION)?;
        debug!(socket, "docker client created");
        Ok(Self { docker })
    }

    /// Round-trip to the engine; used at startup to surface a dead socket early.
    pub async fn ping(&self) -> Result<(), DiscoverError> {
        self.docker.ping().await?;
        Ok(())
    }
}

#[async_trait]
impl ContainerRuntime for DockerRuntime {
    #[instrument(level = "trace", skip(self))]
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DiscoverError> {
        let opts = ListContainersOptions::<String> {
            all: false,
            ..Default::default()
        };
        let listed = self.docker.list_containers(Some(opts)).await?;
        trace!(count = listed.len(), "containers listed");

        listed.into_iter().map(to_summary).collect()
    }

    #[instrument(level = "trace", skip(self))]
    async fn inspect_container(&self, id: &str) -> Result<ContainerInspection, DiscoverError> {
        let resp = self
            .docker
            .inspect_container(id, None::<InspectContainerOptions>)
            .await?;
        to_inspection(id, resp)
    }
}

fn to_summary(summary: DockerSummary) -> Result<ContainerSummary, DiscoverError> {
    match summary.id {
        Some(id) if !id.is_empty() => Ok(ContainerSummary::new(id)),
        _ => Err(DiscoverError::malformed(
            summary
                .names
                .as_ref()
                .and_then(|n| n.first())
                .map_or("<unknown>", String::as_str),
            "listing entry without id",
        )),
    }
}

/// Keep only what the extractor reads; name, config and hostname are mandatory.
pub(crate) fn to_inspection(
    id: &str,
    resp: ContainerInspectResponse,
) -> Result<ContainerInspection, DiscoverError> {
    let name = resp
        .name
        .ok_or_else(|| DiscoverError::malformed(id, "missing name"))?;
    let config = resp
        .config
        .ok_or_else(|| DiscoverError::malformed(id, "missing config"))?;
    let hostname = config
        .hostname
        .ok_or_else(|| DiscoverError::malformed(id, "missing config hostname"))?;

    let labels = config.labels.map(|l| l.into_iter().collect());
    let networks = resp
        .network_settings
        .and_then(|s| s.networks)
        .map(|nets| {
            nets.into_iter()
                .map(|(net, ep)| {
                    let ip_address = ep.ip_address.unwrap_or_default();
                    (net, ContainerNetwork { ip_address })
                })
                .collect::<BTreeMap<_, _>>()
        });

    Ok(ContainerInspection {
        name,
        hostname,
        labels,
        networks,
    })
}
