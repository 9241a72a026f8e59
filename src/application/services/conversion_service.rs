use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ConversionError, FileConverter, ScratchArea, ScratchStore};
use crate::domain::{ConversionKind, ConvertedFile, ScratchPath, UploadedFile, output_filename};

pub const DEFAULT_CONVERSION_TIMEOUT: Duration = Duration::from_secs(120);

/// Stages an upload, runs the matching converter and reads the artifact back.
pub struct ConversionService {
    scratch_store: Arc<dyn ScratchStore>,
    image_to_pdf: Arc<dyn FileConverter>,
    pdf_to_word: Arc<dyn FileConverter>,
    timeout: Duration,
}

impl ConversionService {
    pub fn new(
        scratch_store: Arc<dyn ScratchStore>,
        image_to_pdf: Arc<dyn FileConverter>,
        pdf_to_word: Arc<dyn FileConverter>,
        timeout: Duration,
    ) -> Self {
        Self {
            scratch_store,
            image_to_pdf,
            pdf_to_word,
            timeout,
        }
    }

    #[tracing::instrument(
        skip(self, upload),
        fields(
            kind = kind.as_str(),
            upload_id = %upload.id.as_uuid(),
            filename = %upload.filename,
            bytes = upload.data.len(),
        )
    )]
    pub async fn convert(
        &self,
        kind: ConversionKind,
        upload: UploadedFile,
    ) -> Result<ConvertedFile, ConversionError> {
        let result = self.run(kind, &upload).await;

        if let Err(e) = self.scratch_store.release(&upload.id).await {
            tracing::warn!(error = %e, "Failed to clean up scratch files");
        }

        result
    }

    async fn run(
        &self,
        kind: ConversionKind,
        upload: &UploadedFile,
    ) -> Result<ConvertedFile, ConversionError> {
        let converter = self.converter_for(kind);

        let input_path = ScratchPath::new(&upload.id, &upload.filename);
        let input = self
            .scratch_store
            .store(ScratchArea::Uploads, &input_path, &upload.data)
            .await?;

        let filename = output_filename(&upload.filename, kind);
        let output_path = ScratchPath::new(&upload.id, &filename);
        let output = self
            .scratch_store
            .reserve(ScratchArea::Outputs, &output_path)
            .await?;

        tokio::time::timeout(self.timeout, converter.convert(&input, &output))
            .await
            .map_err(|_| ConversionError::TimedOut(self.timeout.as_secs()))??;

        let data = self
            .scratch_store
            .fetch(ScratchArea::Outputs, &output_path)
            .await?;

        tracing::info!(output = %filename, bytes = data.len(), "Conversion complete");

        Ok(ConvertedFile {
            filename,
            media_type: kind.media_type(),
            data,
        })
    }

    fn converter_for(&self, kind: ConversionKind) -> &Arc<dyn FileConverter> {
        match kind {
            ConversionKind::ImageToPdf => &self.image_to_pdf,
            ConversionKind::PdfToWord => &self.pdf_to_word,
        }
    }
}
