mod writer;
pub use writer::TargetFileWriter;

use std::path::PathBuf;
use std::sync::Arc;

use dsd_model::DiscoveryDocument;
use futures::future::try_join_all;
use tracing::{debug, info, instrument};

use crate::errors::DiscoverError;
use crate::extract::Extractor;
use crate::runtime::ContainerRuntime;

/// Outcome of one successful cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    /// Containers listed and inspected.
    pub containers: usize,
    /// Scrape targets written.
    pub targets: usize,
    pub path: PathBuf,
}

/// Runs discovery cycles: list, inspect, extract, publish.
pub struct Publisher {
    runtime: Arc<dyn ContainerRuntime>,
    extractor: Extractor,
    writer: TargetFileWriter,
}

impl Publisher {
    pub fn new(
        runtime: Arc<dyn ContainerRuntime>,
        extractor: Extractor,
        writer: TargetFileWriter,
    ) -> Self {
        Self {
            runtime,
            extractor,
            writer,
        }
    }

    /// Build the current document without writing it.
    ///
    /// Inspections run concurrently; the first failure aborts the whole collection.
    pub async fn collect(&self) -> Result<(usize, DiscoveryDocument), DiscoverError> {
        let summaries = self.runtime.list_containers().await?;
        debug!(containers = summaries.len(), "containers listed");

        let inspections = try_join_all(
            summaries
                .iter()
                .map(|s| self.runtime.inspect_container(&s.id)),
        )
        .await?;

        let doc = inspections
            .iter()
            .filter_map(|c| self.extractor.convert(c))
            .collect();
        Ok((summaries.len(), doc))
    }

    /// One full cycle. On error nothing is written and the previous file stays in place.
    #[instrument(level = "debug", skip(self), fields(path = %self.writer.path().display()))]
    pub async fn run_cycle(&self) -> Result<CycleReport, DiscoverError> {
        let (containers, doc) = self.collect().await?;

        info!(targets = doc.len(), "writing discovery file");
        self.writer.write(&doc).await?;

        Ok(CycleReport {
            containers,
            targets: doc.len(),
            path: self.writer.path().to_path_buf(),
        })
    }
}
