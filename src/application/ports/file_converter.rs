use std::io;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::ConversionKind;

use super::scratch_store::ScratchStoreError;

#[async_trait]
pub trait FileConverter: Send + Sync {
    fn kind(&self) -> ConversionKind;

    /// Reads the staged upload at `input` and writes the converted artifact to `output`.
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("unreadable input: {0}")]
    UnreadableInput(String),
    #[error("conversion failed: {0}")]
    ConversionFailed(String),
    #[error("conversion timed out after {0} seconds")]
    TimedOut(u64),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("scratch storage: {0}")]
    Scratch(#[from] ScratchStoreError),
}
