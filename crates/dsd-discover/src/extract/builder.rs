use dsd_model::{DEFAULT_PORT, ScrapeTarget, TargetLabels};

/// Immutable accumulator for one container's scrape target.
///
/// Every setter consumes the builder and returns a new one, so each extraction
/// step is a plain `TargetBuilder -> TargetBuilder` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetBuilder {
    labels: TargetLabels,
    host: Option<String>,
    port: String,
}

impl TargetBuilder {
    /// Start from a container name: `job`, `instance` and `container_name` all take it, port is `9090`.
    pub fn new(container_name: &str) -> Self {
        Self {
            labels: TargetLabels::for_container(container_name),
            host: None,
            port: DEFAULT_PORT.to_string(),
        }
    }

    pub fn job(mut self, job: impl Into<String>) -> Self {
        self.labels.job = job.into();
        self
    }

    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.labels.scheme = Some(scheme.into());
        self
    }

    pub fn metrics_path(mut self, path: impl Into<String>) -> Self {
        self.labels.metrics_path = Some(path.into());
        self
    }

    /// Compose labels; also rewrites `instance` to `<project>_<service>`.
    pub fn compose(mut self, project: &str, service: &str) -> Self {
        self.labels.instance = format!("{project}_{service}");
        self.labels.compose_project = Some(project.to_string());
        self.labels.compose_service = Some(service.to_string());
        self
    }

    pub fn labels(&self) -> &TargetLabels {
        &self.labels
    }

    pub fn current_port(&self) -> &str {
        &self.port
    }

    /// `host:port`, once a host is known.
    pub fn address(&self) -> Option<String> {
        self.host.as_ref().map(|h| format!("{h}:{}", self.port))
    }

    /// Finish; `None` when no host was ever set, as a target list may not be empty.
    pub fn build(self) -> Option<ScrapeTarget> {
        let targets = self.address().into_iter().collect();
        ScrapeTarget::new(self.labels, targets)
    }
}
