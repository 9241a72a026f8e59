use std::path::Path;

use super::upload_id::UploadId;

const FALLBACK_STEM: &str = "converted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    ImageToPdf,
    PdfToWord,
}

impl ConversionKind {
    pub fn output_extension(&self) -> &'static str {
        match self {
            ConversionKind::ImageToPdf => "pdf",
            ConversionKind::PdfToWord => "docx",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            ConversionKind::ImageToPdf => "application/pdf",
            ConversionKind::PdfToWord => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionKind::ImageToPdf => "img-to-pdf",
            ConversionKind::PdfToWord => "pdf-to-word",
        }
    }
}

#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub id: UploadId,
    pub filename: String,
    pub data: Vec<u8>,
}

impl UploadedFile {
    pub fn new(filename: String, data: Vec<u8>) -> Self {
        Self {
            id: UploadId::new(),
            filename,
            data,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConvertedFile {
    pub filename: String,
    pub media_type: &'static str,
    pub data: Vec<u8>,
}

/// Download name for a converted upload: everything before the first `.` of the
/// upload's base name, plus the target extension.
pub fn output_filename(upload_filename: &str, kind: ConversionKind) -> String {
    let base = Path::new(upload_filename.trim())
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();

    let stem = base.split('.').next().unwrap_or_default();
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem };

    format!("{}.{}", stem, kind.output_extension())
}
