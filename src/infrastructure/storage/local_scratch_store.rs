use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::application::ports::{ScratchArea, ScratchStore, ScratchStoreError};
use crate::domain::{ScratchPath, UploadId};

/// Scratch files under `<base>/temp_uploads` and `<base>/temp_outputs`.
pub struct LocalScratchStore {
    base_path: PathBuf,
}

impl LocalScratchStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ScratchStoreError> {
        for area in [ScratchArea::Uploads, ScratchArea::Outputs] {
            std::fs::create_dir_all(base_path.join(area.dir_name()))?;
        }
        Ok(Self { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn local_path(&self, area: ScratchArea, path: &ScratchPath) -> PathBuf {
        self.base_path.join(area.dir_name()).join(path.as_str())
    }

    async fn ensure_parent(path: &Path) -> Result<(), ScratchStoreError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ScratchStore for LocalScratchStore {
    async fn store(
        &self,
        area: ScratchArea,
        path: &ScratchPath,
        data: &[u8],
    ) -> Result<PathBuf, ScratchStoreError> {
        let local = self.local_path(area, path);
        Self::ensure_parent(&local).await?;

        tokio::fs::write(&local, data)
            .await
            .map_err(|e| ScratchStoreError::WriteFailed(format!("{}: {e}", path)))?;

        tracing::debug!(path = %local.display(), bytes = data.len(), "Staged scratch file");
        Ok(local)
    }

    async fn reserve(
        &self,
        area: ScratchArea,
        path: &ScratchPath,
    ) -> Result<PathBuf, ScratchStoreError> {
        let local = self.local_path(area, path);
        Self::ensure_parent(&local).await?;
        Ok(local)
    }

    async fn fetch(
        &self,
        area: ScratchArea,
        path: &ScratchPath,
    ) -> Result<Vec<u8>, ScratchStoreError> {
        let local = self.local_path(area, path);
        tokio::fs::read(&local).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ScratchStoreError::NotFound(path.to_string()),
            _ => ScratchStoreError::Io(e),
        })
    }

    async fn release(&self, upload_id: &UploadId) -> Result<(), ScratchStoreError> {
        for area in [ScratchArea::Uploads, ScratchArea::Outputs] {
            let dir = self
                .base_path
                .join(area.dir_name())
                .join(upload_id.as_uuid().to_string());

            match tokio::fs::remove_dir_all(&dir).await {
                Ok(()) => {}
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => {
                    return Err(ScratchStoreError::DeleteFailed(format!(
                        "{}: {e}",
                        dir.display()
                    )));
                }
            }
        }
        Ok(())
    }
}
