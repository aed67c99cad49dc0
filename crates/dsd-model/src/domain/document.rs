use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::ScrapeTarget;

const INDENT: &[u8] = b"    ";

/// Full set of scrape targets published in one cycle.
///
/// Serialized as a bare JSON array, the format Prometheus `file_sd_configs` reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiscoveryDocument(pub Vec<ScrapeTarget>);

impl DiscoveryDocument {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScrapeTarget> {
        self.0.iter()
    }

    pub fn push(&mut self, target: ScrapeTarget) {
        self.0.push(target);
    }

    /// Render as pretty JSON with four-space indentation.
    pub fn to_pretty_json(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut out = Vec::with_capacity(256 * self.len().max(1));
        let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(INDENT));
        self.serialize(&mut ser)?;
        Ok(out)
    }
}

impl FromIterator<ScrapeTarget> for DiscoveryDocument {
    fn from_iter<I: IntoIterator<Item = ScrapeTarget>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
