use config::{Config, ConfigError, File};

use crate::domain::KnowledgeBase;

/// Loads prompt content from a TOML, YAML or JSON file, picked by extension.
pub fn load_knowledge_base(path: &str) -> Result<KnowledgeBase, ConfigError> {
    Config::builder()
        .add_source(File::with_name(path))
        .build()?
        .try_deserialize()
}
