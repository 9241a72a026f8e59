use std::fmt;

/// Cache key for a chat message: MD5 hex digest of the lowercased, trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn from_message(message: &str) -> Self {
        let normalized = message.trim().to_lowercase();
        Self(format!("{:x}", md5::compute(normalized.as_bytes())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
