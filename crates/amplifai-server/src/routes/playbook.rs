//! Playbook Routes
//!
//! - POST /upload-playbook - JSON body
//! - POST /upload-playbook-file - multipart form with a file

use axum::{
    extract::multipart::MultipartRejection,
    extract::rejection::JsonRejection,
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};

use amplifai::{parse_tags, PlaybookFile, PlaybookFileUpload};

use crate::error::ApiError;
use crate::models::{PlaybookUploadRequest, PlaybookUploadResponse};
use crate::AppState;

/// Upload a playbook as JSON
#[utoipa::path(
    post,
    path = "/upload-playbook",
    request_body = PlaybookUploadRequest,
    responses(
        (status = 200, description = "Playbook received", body = PlaybookUploadResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Invalid playbook", body = ErrorResponse)
    ),
    tag = "Playbook"
)]
pub async fn upload_playbook(
    State(state): State<AppState>,
    payload: Result<Json<PlaybookUploadRequest>, JsonRejection>,
) -> Result<Json<PlaybookUploadResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::info!("📚 Uploading playbook: {}", req.playbook_name);

    let receipt = state.ingest.upload_playbook(req.into()).await?;
    Ok(Json(PlaybookUploadResponse::from_receipt(
        receipt,
        "Playbook uploaded successfully",
    )))
}

/// Upload a playbook file (any type) with its metadata
#[utoipa::path(
    post,
    path = "/upload-playbook-file",
    request_body(content = PlaybookFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Playbook file received", body = PlaybookUploadResponse),
        (status = 400, description = "Malformed multipart body", body = ErrorResponse),
        (status = 422, description = "Missing file or playbook_name", body = ErrorResponse)
    ),
    tag = "Playbook"
)]
pub async fn upload_playbook_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<PlaybookUploadResponse>, ApiError> {
    let upload = read_form(multipart?).await?;
    tracing::info!(
        "📄 Uploading playbook file: {}",
        upload
            .file
            .as_ref()
            .and_then(|f| f.filename.as_deref())
            .unwrap_or("<unnamed>")
    );

    let receipt = state.ingest.upload_playbook_file(upload).await?;
    Ok(Json(PlaybookUploadResponse::from_receipt(
        receipt,
        "Playbook file uploaded successfully",
    )))
}

/// Collect the known form fields; anything else is drained and ignored
///
/// The file body is streamed to count its size and never buffered.
async fn read_form(mut multipart: Multipart) -> Result<PlaybookFileUpload, ApiError> {
    let mut upload = PlaybookFileUpload::default();

    while let Some(mut field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let filename = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let mut size_bytes = 0u64;
                while let Some(chunk) = field.chunk().await? {
                    size_bytes += chunk.len() as u64;
                }
                upload.file = Some(PlaybookFile {
                    filename,
                    content_type,
                    size_bytes,
                });
            }
            "playbook_name" => upload.playbook_name = Some(field.text().await?),
            "version" => upload.version = Some(field.text().await?),
            "tags" => upload.tags = parse_tags(&field.text().await?),
            _ => {
                while field.chunk().await?.is_some() {}
            }
        }
    }

    Ok(upload)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload-playbook", post(upload_playbook))
        .route(
            "/upload-playbook-file",
            post(upload_playbook_file).layer(DefaultBodyLimit::disable()),
        )
}
