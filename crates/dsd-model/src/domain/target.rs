use serde::{Deserialize, Serialize};

/// Label set attached to a scrape target.
///
/// Field order is the serialized key order; optional keys are omitted when unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetLabels {
    pub job: String,
    pub instance: String,
    pub container_name: String,

    #[serde(rename = "__scheme__", default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
    #[serde(
        rename = "__metrics_path__",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub metrics_path: Option<String>,
    #[serde(
        rename = "com_docker_compose_project",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub compose_project: Option<String>,
    #[serde(
        rename = "com_docker_compose_service",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub compose_service: Option<String>,
}

impl TargetLabels {
    /// Labels for a container before any override: `job`, `instance` and `container_name` all equal `name`.
    pub fn for_container(name: &str) -> Self {
        Self {
            job: name.to_string(),
            instance: name.to_string(),
            container_name: name.to_string(),
            scheme: None,
            metrics_path: None,
            compose_project: None,
            compose_service: None,
        }
    }
}

/// One entry of the discovery document.
///
/// Always carries at least one `host:port` target; construction and deserialization both refuse an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawScrapeTarget")]
pub struct ScrapeTarget {
    labels: TargetLabels,
    targets: Vec<String>,
}

impl ScrapeTarget {
    /// Returns `None` when `targets` is empty.
    pub fn new(labels: TargetLabels, targets: Vec<String>) -> Option<Self> {
        if targets.is_empty() {
            return None;
        }
        Some(Self { labels, targets })
    }

    pub fn labels(&self) -> &TargetLabels {
        &self.labels
    }

    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}

#[derive(Deserialize)]
struct RawScrapeTarget {
    labels: TargetLabels,
    targets: Vec<String>,
}

impl TryFrom<RawScrapeTarget> for ScrapeTarget {
    type Error = &'static str;

    fn try_from(raw: RawScrapeTarget) -> Result<Self, Self::Error> {
        ScrapeTarget::new(raw.labels, raw.targets).ok_or("scrape target without targets")
    }
}
