mod chat_service;
mod conversion_service;
mod model_selector;
mod prompt_builder;
mod response_cache;

pub use chat_service::{ChatService, DEFAULT_REQUEST_TIMEOUT};
pub use conversion_service::{ConversionService, DEFAULT_CONVERSION_TIMEOUT};
pub use model_selector::{DEFAULT_PREFERRED_MODELS, ModelSelector, choose_model};
pub use prompt_builder::{DEFAULT_MAX_MESSAGE_CHARS, PromptBuilder};
pub use response_cache::{DEFAULT_CACHE_CAPACITY, ResponseCache};
