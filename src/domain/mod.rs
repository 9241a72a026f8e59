mod cache_key;
mod chat_outcome;
mod conversion;
mod knowledge_base;
mod model;
mod scratch_path;
mod upload_id;

pub use cache_key::CacheKey;
pub use chat_outcome::{
    ChatOutcome, EMPTY_OUTPUT_REPLY, NO_MODEL_REPLY, PROVIDER_ERROR_REPLY,
};
pub use conversion::{ConversionKind, ConvertedFile, UploadedFile, output_filename};
pub use knowledge_base::{FactSection, KnowledgeBase};
pub use model::{GENERATE_CONTENT_METHOD, ModelDescriptor, ModelId};
pub use scratch_path::ScratchPath;
pub use upload_id::UploadId;
