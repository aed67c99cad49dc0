use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bollard::models::ContainerInspectResponse;
use dsd_model::{ContainerInspection, ContainerSummary};

use crate::errors::DiscoverError;
use crate::runtime::ContainerRuntime;
use crate::runtime::docker::to_inspection;

/// In-memory runtime with failure injection and overlap tracking.
#[derive(Default)]
pub(crate) struct FakeRuntime {
    containers: Vec<(String, ContainerInspection)>,
    failing: Option<String>,
    malformed: Option<String>,
    failing_list: bool,
    list_delay: Duration,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub lists: AtomicUsize,
}

impl FakeRuntime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_container(mut self, id: &str, container: ContainerInspection) -> Self {
        self.containers.push((id.to_string(), container));
        self
    }

    /// Inspecting `id` returns a 404 from the engine.
    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing = Some(id.to_string());
        self
    }

    /// Inspecting `id` yields an empty engine record, which the adapter rejects.
    pub fn malformed_on(mut self, id: &str) -> Self {
        self.malformed = Some(id.to_string());
        self
    }

    /// Listing fails as if the engine socket were gone.
    pub fn failing_list(mut self) -> Self {
        self.failing_list = true;
        self
    }

    pub fn with_list_delay(mut self, delay: Duration) -> Self {
        self.list_delay = delay;
        self
    }
}

#[async_trait]
impl ContainerRuntime for FakeRuntime {
    async fn list_containers(&self) -> Result<Vec<ContainerSummary>, DiscoverError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.lists.fetch_add(1, Ordering::SeqCst);

        if !self.list_delay.is_zero() {
            tokio::time::sleep(self.list_delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if self.failing_list {
            return Err(bollard::errors::Error::DockerResponseServerError {
                status_code: 500,
                message: "engine unavailable".to_string(),
            }
            .into());
        }

        Ok(self
            .containers
            .iter()
            .map(|(id, _)| ContainerSummary::new(id.as_str()))
            .collect())
    }

    async fn inspect_container(&self, id: &str) -> Result<ContainerInspection, DiscoverError> {
        if self.failing.as_deref() == Some(id) {
            return Err(bollard::errors::Error::DockerResponseServerError {
                status_code: 404,
                message: format!("No such container: {id}"),
            }
            .into());
        }
        if self.malformed.as_deref() == Some(id) {
            return to_inspection(id, ContainerInspectResponse::default());
        }
        self.containers
            .iter()
            .find(|(cid, _)| cid == id)
            .map(|(_, c)| c.clone())
            .ok_or_else(|| DiscoverError::malformed(id, "unknown container"))
    }
}
