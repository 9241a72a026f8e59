mod environment;
mod knowledge_base_loader;
mod settings;

pub use environment::Environment;
pub use knowledge_base_loader::load_knowledge_base;
pub use settings::{
    CacheSettings, ConversionSettings, LlmSettings, LoggingSettings, PromptSettings,
    ServerSettings, Settings,
};
