use axum::{
    body::Body,
    extract::{Multipart, Path, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    infrastructure::{extraction, storage::DocumentStore},
};

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub session_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CleanupResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub text: String,
}

pub struct DocumentController {
    store: Arc<DocumentStore>,
}

impl DocumentController {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    /// POST /api/documents - upload a PDF, returns a session id
    pub async fn upload(
        State(controller): State<Arc<DocumentController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<UploadResponse>> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed upload: {}", e)))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let filename = field.file_name().unwrap_or_default().to_string();
            if filename.is_empty() {
                return Err(AppError::BadRequest("No file selected".to_string()));
            }
            if !filename.to_lowercase().ends_with(".pdf") {
                return Err(AppError::BadRequest("Only PDF files allowed".to_string()));
            }

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

            tracing::info!(
                filename = %filename,
                size_bytes = data.len(),
                "Document upload received"
            );

            let session_id = controller.store.save(&data).await?;
            return Ok(Json(UploadResponse {
                success: true,
                session_id,
            }));
        }

        Err(AppError::BadRequest("No file uploaded".to_string()))
    }

    /// GET /api/documents/:session_id - fetch the stored PDF
    pub async fn get_document(
        State(controller): State<Arc<DocumentController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<(HeaderMap, Body)> {
        let bytes = controller.store.load(session_id).await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "application/pdf".parse().unwrap());

        Ok((headers, Body::from(bytes)))
    }

    /// DELETE /api/documents/:session_id - remove the stored PDF
    pub async fn delete_document(
        State(controller): State<Arc<DocumentController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<CleanupResponse>> {
        controller.store.delete(session_id).await?;
        Ok(Json(CleanupResponse { success: true }))
    }

    /// POST /api/documents/:session_id/text - extract the document's text
    pub async fn extract_text(
        State(controller): State<Arc<DocumentController>>,
        Path(session_id): Path<Uuid>,
    ) -> AppResult<Json<ExtractResponse>> {
        let bytes = controller.store.load(session_id).await?;

        // PDF parsing is CPU-bound; keep it off the async workers.
        let text = tokio::task::spawn_blocking(move || extraction::extract_pages(&bytes))
            .await
            .map_err(|e| AppError::Internal(format!("Extraction task failed: {}", e)))?
            .map_err(AppError::Internal)?;

        tracing::info!(
            session_id = %session_id,
            text_length = text.len(),
            "Document text extracted"
        );

        Ok(Json(ExtractResponse { text }))
    }
}
