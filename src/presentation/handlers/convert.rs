use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::LlmClient;
use crate::domain::{ConversionKind, ConvertedFile, UploadedFile};
use crate::presentation::state::AppState;

pub const UPLOAD_FIELD: &str = "file";

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorResponse { detail })).into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn img_to_pdf_handler<L>(
    State(state): State<AppState<L>>,
    multipart: Multipart,
) -> Response
where
    L: LlmClient + 'static,
{
    convert_upload(state, multipart, ConversionKind::ImageToPdf).await
}

#[tracing::instrument(skip(state, multipart))]
pub async fn pdf_to_word_handler<L>(
    State(state): State<AppState<L>>,
    multipart: Multipart,
) -> Response
where
    L: LlmClient + 'static,
{
    convert_upload(state, multipart, ConversionKind::PdfToWord).await
}

async fn convert_upload<L>(
    state: AppState<L>,
    mut multipart: Multipart,
    kind: ConversionKind,
) -> Response
where
    L: LlmClient + 'static,
{
    let upload = match read_upload(&mut multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    match state.conversion_service.convert(kind, upload).await {
        Ok(converted) => file_response(converted),
        Err(e) => {
            tracing::error!(error = %e, kind = kind.as_str(), "Conversion failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn read_upload(multipart: &mut Multipart) -> Result<UploadedFile, Response> {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                tracing::warn!("Conversion request without a file field");
                return Err(error_response(
                    StatusCode::BAD_REQUEST,
                    "No file uploaded".to_string(),
                ));
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return Err(error_response(
                    e.status(),
                    format!("Failed to read multipart: {}", e.body_text()),
                ));
            }
        };

        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or("upload").to_string();

        let data = field.bytes().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to read file bytes");
            error_response(e.status(), format!("Failed to read file: {}", e.body_text()))
        })?;

        tracing::debug!(filename = %filename, bytes = data.len(), "File data received");
        return Ok(UploadedFile::new(filename, data.to_vec()));
    }
}

fn file_response(converted: ConvertedFile) -> Response {
    let disposition = format!(
        "attachment; filename=\"{}\"",
        header_safe_filename(&converted.filename)
    );

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, converted.media_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        converted.data,
    )
        .into_response()
}

fn header_safe_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if (c.is_ascii_graphic() || c == ' ') && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
