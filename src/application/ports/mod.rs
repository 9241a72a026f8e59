mod file_converter;
mod llm_client;
mod scratch_store;

pub use file_converter::{ConversionError, FileConverter};
pub use llm_client::{LlmClient, LlmClientError};
pub use scratch_store::{ScratchArea, ScratchStore, ScratchStoreError};
