mod constants;
pub use constants::*;

mod inspection;
pub use inspection::{ContainerInspection, ContainerNetwork, ContainerSummary};

mod target;
pub use target::{ScrapeTarget, TargetLabels};

mod document;
pub use document::DiscoveryDocument;

/// Raw container label map, keyed by label name.
///
/// Ordered so that log output and test fixtures are deterministic.
pub type Labels = std::collections::BTreeMap<String, String>;
