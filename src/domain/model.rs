use std::fmt;

use serde::{Deserialize, Serialize};

pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Provider-side model identifier, e.g. `models/gemini-1.5-flash`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelId(String);

impl ModelId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDescriptor {
    pub id: ModelId,
    pub supported_generation_methods: Vec<String>,
}

impl ModelDescriptor {
    pub fn new(id: impl Into<String>, supported_generation_methods: Vec<String>) -> Self {
        Self {
            id: ModelId::new(id),
            supported_generation_methods,
        }
    }

    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT_METHOD)
    }
}
