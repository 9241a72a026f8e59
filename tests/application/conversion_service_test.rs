use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;

use portfolio_assistant::application::ports::{ConversionError, FileConverter, ScratchArea};
use portfolio_assistant::application::services::ConversionService;
use portfolio_assistant::domain::{ConversionKind, UploadedFile};
use portfolio_assistant::infrastructure::conversion::{ImagePdfConverter, PdfDocxConverter};
use portfolio_assistant::infrastructure::storage::LocalScratchStore;

use crate::helpers::{page_size, rgba_png};

struct SlowConverter;

#[async_trait]
impl FileConverter for SlowConverter {
    fn kind(&self) -> ConversionKind {
        ConversionKind::PdfToWord
    }

    async fn convert(&self, _input: &Path, _output: &Path) -> Result<(), ConversionError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(())
    }
}

fn service_in(dir: &TempDir, pdf_to_word: Arc<dyn FileConverter>, timeout: Duration) -> ConversionService {
    let store = Arc::new(LocalScratchStore::new(dir.path().to_path_buf()).unwrap());
    ConversionService::new(store, Arc::new(ImagePdfConverter::new()), pdf_to_word, timeout)
}

fn area_is_empty(dir: &TempDir, area: ScratchArea) -> bool {
    std::fs::read_dir(dir.path().join(area.dir_name()))
        .unwrap()
        .next()
        .is_none()
}

#[tokio::test]
async fn given_rgba_png_when_converting_to_pdf_then_page_matches_image_size() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir, Arc::new(PdfDocxConverter::new()), Duration::from_secs(30));
    let upload = UploadedFile::new("photo.png".to_string(), rgba_png(40, 30));

    let converted = service.convert(ConversionKind::ImageToPdf, upload).await.unwrap();

    assert_eq!(converted.filename, "photo.pdf");
    assert_eq!(converted.media_type, "application/pdf");
    assert_eq!(page_size(&converted.data), (40, 30));
}

#[tokio::test]
async fn given_successful_conversion_when_done_then_scratch_files_are_removed() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir, Arc::new(PdfDocxConverter::new()), Duration::from_secs(30));
    let upload = UploadedFile::new("photo.png".to_string(), rgba_png(4, 4));

    service.convert(ConversionKind::ImageToPdf, upload).await.unwrap();

    assert!(area_is_empty(&dir, ScratchArea::Uploads));
    assert!(area_is_empty(&dir, ScratchArea::Outputs));
}

#[tokio::test]
async fn given_corrupt_image_when_converting_then_unreadable_input_and_scratch_cleaned() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir, Arc::new(PdfDocxConverter::new()), Duration::from_secs(30));
    let upload = UploadedFile::new("broken.png".to_string(), b"not an image".to_vec());

    let result = service.convert(ConversionKind::ImageToPdf, upload).await;

    assert!(matches!(result, Err(ConversionError::UnreadableInput(_))));
    assert!(area_is_empty(&dir, ScratchArea::Uploads));
}

#[tokio::test]
async fn given_hanging_converter_when_timeout_elapses_then_timed_out() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir, Arc::new(SlowConverter), Duration::from_millis(50));
    let upload = UploadedFile::new("doc.pdf".to_string(), b"%PDF-1.5".to_vec());

    let result = service.convert(ConversionKind::PdfToWord, upload).await;

    assert!(matches!(result, Err(ConversionError::TimedOut(_))));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn given_concurrent_uploads_with_same_filename_when_converting_then_each_gets_its_own_result() {
    let dir = TempDir::new().unwrap();
    let service = Arc::new(service_in(
        &dir,
        Arc::new(PdfDocxConverter::new()),
        Duration::from_secs(30),
    ));

    let mut handles = Vec::new();
    for size in [8_u32, 16, 24, 32] {
        let service = Arc::clone(&service);
        handles.push(tokio::spawn(async move {
            let upload = UploadedFile::new("same.png".to_string(), rgba_png(size, size));
            let converted = service
                .convert(ConversionKind::ImageToPdf, upload)
                .await
                .unwrap();
            (size, converted)
        }));
    }

    for handle in handles {
        let (size, converted) = handle.await.unwrap();
        assert_eq!(converted.filename, "same.pdf");
        assert_eq!(page_size(&converted.data), (i64::from(size), i64::from(size)));
    }
}

#[tokio::test]
async fn given_generated_pdf_when_converting_to_word_then_returns_docx_archive() {
    let dir = TempDir::new().unwrap();
    let service = service_in(&dir, Arc::new(PdfDocxConverter::new()), Duration::from_secs(30));
    let pdf = service
        .convert(
            ConversionKind::ImageToPdf,
            UploadedFile::new("scan.png".to_string(), rgba_png(10, 10)),
        )
        .await
        .unwrap();

    let docx = service
        .convert(
            ConversionKind::PdfToWord,
            UploadedFile::new("scan.pdf".to_string(), pdf.data),
        )
        .await
        .unwrap();

    assert_eq!(docx.filename, "scan.docx");
    assert!(docx.data.starts_with(b"PK"));
}
