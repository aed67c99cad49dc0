use std::collections::BTreeMap;

use crate::Labels;

/// Entry returned by the runtime's container listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSummary {
    pub id: String,
}

impl ContainerSummary {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Address assigned to a container on one network.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerNetwork {
    pub ip_address: String,
}

/// Metadata snapshot of one running container.
///
/// `labels` and `networks` are `None` when the runtime reported no map at all,
/// which is distinct from an empty map: the extractor treats the two cases differently.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContainerInspection {
    /// Runtime name, usually with a leading `/`.
    pub name: String,
    /// Configured hostname (`Config.Hostname`).
    pub hostname: String,
    pub labels: Option<Labels>,
    /// Networks keyed by network name.
    pub networks: Option<BTreeMap<String, ContainerNetwork>>,
}

impl ContainerInspection {
    pub fn new(name: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hostname: hostname.into(),
            labels: None,
            networks: None,
        }
    }

    /// Attach a label, creating the label map on first use.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels
            .get_or_insert_with(Labels::new)
            .insert(key.into(), value.into());
        self
    }

    /// Attach a network, creating the network map on first use.
    pub fn with_network(mut self, name: impl Into<String>, ip: impl Into<String>) -> Self {
        self.networks.get_or_insert_with(BTreeMap::new).insert(
            name.into(),
            ContainerNetwork {
                ip_address: ip.into(),
            },
        );
        self
    }

    /// Name with the runtime's leading `/` removed.
    pub fn container_name(&self) -> &str {
        self.name.strip_prefix('/').unwrap_or(&self.name)
    }

    /// Look up a configuration label.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.as_ref()?.get(key).map(String::as_str)
    }
}
