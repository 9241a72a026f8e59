use std::fmt;
use std::path::Path;

use super::upload_id::UploadId;

/// Relative scratch location of one file: `<upload uuid>/<file name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScratchPath(String);

impl ScratchPath {
    pub fn new(upload_id: &UploadId, filename: &str) -> Self {
        Self(format!("{}/{}", upload_id.as_uuid(), sanitize_filename(filename)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScratchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Drops any directory components a client put into the upload name.
fn sanitize_filename(filename: &str) -> String {
    Path::new(filename.trim())
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .unwrap_or("upload")
        .to_string()
}
