use std::io;
use std::path::PathBuf;

use crate::domain::{ScratchPath, UploadId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchArea {
    Uploads,
    Outputs,
}

impl ScratchArea {
    pub fn dir_name(&self) -> &'static str {
        match self {
            ScratchArea::Uploads => "temp_uploads",
            ScratchArea::Outputs => "temp_outputs",
        }
    }
}

/// Filesystem staging for converter input and output. Converters need real paths,
/// so every method hands back or takes a local path.
#[async_trait::async_trait]
pub trait ScratchStore: Send + Sync {
    async fn store(
        &self,
        area: ScratchArea,
        path: &ScratchPath,
        data: &[u8],
    ) -> Result<PathBuf, ScratchStoreError>;

    /// Creates the parent directory of `path` and returns where to write it.
    async fn reserve(&self, area: ScratchArea, path: &ScratchPath)
    -> Result<PathBuf, ScratchStoreError>;

    async fn fetch(&self, area: ScratchArea, path: &ScratchPath)
    -> Result<Vec<u8>, ScratchStoreError>;

    /// Removes everything staged for one upload, in both areas.
    async fn release(&self, upload_id: &UploadId) -> Result<(), ScratchStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ScratchStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("file not found: {0}")]
    NotFound(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
