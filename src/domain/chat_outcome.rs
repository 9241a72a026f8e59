pub const NO_MODEL_REPLY: &str = "Server Error: No AI model available.";
pub const EMPTY_OUTPUT_REPLY: &str = "Samawenna, mata kiyanna deyak hithaganna ba.";
pub const PROVIDER_ERROR_REPLY: &str = "Samawenna, podi aulak. Internet connection eka balanna.";

/// Result of a single generation call against the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatOutcome {
    /// Trimmed, non-empty model text.
    Success(String),
    EmptyOutput,
    ProviderError(String),
}

impl ChatOutcome {
    pub fn from_generated(text: Option<String>) -> Self {
        match text.map(|t| t.trim().to_string()) {
            Some(t) if !t.is_empty() => Self::Success(t),
            _ => Self::EmptyOutput,
        }
    }

    /// Only successful replies are worth caching.
    pub fn is_cacheable(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn into_reply(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::EmptyOutput => EMPTY_OUTPUT_REPLY.to_string(),
            Self::ProviderError(_) => PROVIDER_ERROR_REPLY.to_string(),
        }
    }
}
