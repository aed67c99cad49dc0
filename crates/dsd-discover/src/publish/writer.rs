use std::ffi::OsString;
use std::path::{Path, PathBuf};

use dsd_model::DiscoveryDocument;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::errors::DiscoverError;

const TMP_SUFFIX: &str = ".new";

/// Replaces the discovery file through a sibling temp file and a rename.
///
/// Readers of `path` only ever see a complete previous or complete new document.
#[derive(Debug, Clone)]
pub struct TargetFileWriter {
    path: PathBuf,
    tmp: PathBuf,
}

impl TargetFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut tmp = OsString::from(path.as_os_str());
        tmp.push(TMP_SUFFIX);
        Self {
            tmp: PathBuf::from(tmp),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tmp_path(&self) -> &Path {
        &self.tmp
    }

    pub async fn write(&self, doc: &DiscoveryDocument) -> Result<(), DiscoverError> {
        let bytes = doc.to_pretty_json()?;

        if let Err(e) = self.write_tmp(&bytes).await {
            self.discard_tmp().await;
            return Err(e);
        }
        if let Err(e) = fs::rename(&self.tmp, &self.path).await {
            self.discard_tmp().await;
            return Err(DiscoverError::io(&self.path, e));
        }

        debug!(path = %self.path.display(), bytes = bytes.len(), "discovery file replaced");
        Ok(())
    }

    async fn write_tmp(&self, bytes: &[u8]) -> Result<(), DiscoverError> {
        let io = |e: std::io::Error| DiscoverError::io(&self.tmp, e);

        let mut file = fs::File::create(&self.tmp).await.map_err(io)?;
        file.write_all(bytes).await.map_err(io)?;
        file.sync_all().await.map_err(io)?;
        Ok(())
    }

    async fn discard_tmp(&self) {
        match fs::remove_file(&self.tmp).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %self.tmp.display(), error = %e, "failed to remove temp file"),
        }
    }
}
