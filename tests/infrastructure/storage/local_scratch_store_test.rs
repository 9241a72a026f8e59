use tempfile::TempDir;

use portfolio_assistant::application::ports::{ScratchArea, ScratchStore, ScratchStoreError};
use portfolio_assistant::domain::{ScratchPath, UploadId};
use portfolio_assistant::infrastructure::storage::LocalScratchStore;

#[test]
fn given_base_dir_when_creating_store_then_both_areas_exist() {
    let dir = TempDir::new().unwrap();

    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();

    assert_eq!(store.base_path(), dir.path());
    assert!(dir.path().join("temp_uploads").is_dir());
    assert!(dir.path().join("temp_outputs").is_dir());
}

#[tokio::test]
async fn given_stored_upload_when_fetching_then_returns_same_bytes() {
    let dir = TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();
    let id = UploadId::new();
    let path = ScratchPath::new(&id, "notes.pdf");

    let local = store
        .store(ScratchArea::Uploads, &path, b"%PDF-1.5")
        .await
        .unwrap();
    let data = store.fetch(ScratchArea::Uploads, &path).await.unwrap();

    assert!(local.starts_with(dir.path().join("temp_uploads")));
    assert_eq!(data, b"%PDF-1.5");
}

#[tokio::test]
async fn given_reserved_output_never_written_when_fetching_then_not_found() {
    let dir = TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();
    let path = ScratchPath::new(&UploadId::new(), "notes.docx");

    let reserved = store.reserve(ScratchArea::Outputs, &path).await.unwrap();
    let result = store.fetch(ScratchArea::Outputs, &path).await;

    assert!(reserved.parent().unwrap().is_dir());
    assert!(matches!(result, Err(ScratchStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_files_in_both_areas_when_releasing_then_only_that_upload_is_removed() {
    let dir = TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();
    let released = UploadId::new();
    let kept = UploadId::new();

    let input = store
        .store(ScratchArea::Uploads, &ScratchPath::new(&released, "a.png"), b"png")
        .await
        .unwrap();
    let output = store
        .store(ScratchArea::Outputs, &ScratchPath::new(&released, "a.pdf"), b"pdf")
        .await
        .unwrap();
    let other = store
        .store(ScratchArea::Uploads, &ScratchPath::new(&kept, "a.png"), b"png")
        .await
        .unwrap();

    store.release(&released).await.unwrap();

    assert!(!input.exists());
    assert!(!output.exists());
    assert!(other.exists());
}

#[tokio::test]
async fn given_unknown_upload_when_releasing_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let store = LocalScratchStore::new(dir.path().to_path_buf()).unwrap();

    assert!(store.release(&UploadId::new()).await.is_ok());
}
