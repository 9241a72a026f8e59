use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use docx_rs::{BreakType, Docx, Paragraph, Run};
use pdf_oxide::PdfDocument;

use crate::application::ports::{ConversionError, FileConverter};
use crate::domain::ConversionKind;

/// Rebuilds the text of every PDF page as a Word document, one paragraph per
/// line and a page break between source pages.
#[derive(Default)]
pub struct PdfDocxConverter;

impl PdfDocxConverter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, ConversionError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            ConversionError::UnreadableInput(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            ConversionError::UnreadableInput(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            // Image-only pages have no text layer; keep them as empty pages.
            pages.push(doc.extract_text(page_index).unwrap_or_default());
        }

        Ok(pages)
    }

    fn write_docx(pages: &[String], output: &Path) -> Result<(), ConversionError> {
        let mut docx = Docx::new();

        for (index, page) in pages.iter().enumerate() {
            if index > 0 {
                docx = docx.add_paragraph(
                    Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
                );
            }
            for line in page.lines() {
                docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
            }
        }

        let file = File::create(output)?;
        docx.build()
            .pack(file)
            .map_err(|e| ConversionError::ConversionFailed(format!("failed to write docx: {e}")))
    }

    fn run(input: &Path, output: &Path) -> Result<(), ConversionError> {
        let pages = Self::extract_pages(input)?;
        tracing::info!(page_count = pages.len(), "PDF text extraction complete");
        Self::write_docx(&pages, output)
    }
}

#[async_trait]
impl FileConverter for PdfDocxConverter {
    fn kind(&self) -> ConversionKind {
        ConversionKind::PdfToWord
    }

    #[tracing::instrument(skip(self), fields(input = %input.display()))]
    async fn convert(&self, input: &Path, output: &Path) -> Result<(), ConversionError> {
        let input: PathBuf = input.to_path_buf();
        let output: PathBuf = output.to_path_buf();

        tokio::task::spawn_blocking(move || Self::run(&input, &output))
            .await
            .map_err(|e| ConversionError::ConversionFailed(format!("task join error: {e}")))?
    }
}
