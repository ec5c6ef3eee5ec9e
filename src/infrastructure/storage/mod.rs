use crate::error::{AppError, AppResult};
use std::path::PathBuf;
use uuid::Uuid;

/// Uploaded documents, stored on disk keyed by a per-upload session id.
/// Documents live only for the duration of a viewing session; the client
/// calls delete when it is done.
pub struct DocumentStore {
    upload_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Ensure the upload directory exists.
    pub async fn init(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.upload_dir).await
    }

    fn path_for(&self, session_id: Uuid) -> PathBuf {
        self.upload_dir.join(format!("{}.pdf", session_id))
    }

    /// Store a new document and return its session id.
    pub async fn save(&self, bytes: &[u8]) -> AppResult<Uuid> {
        let session_id = Uuid::new_v4();
        let path = self.path_for(session_id);

        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store document: {}", e)))?;

        tracing::info!(
            session_id = %session_id,
            size_bytes = bytes.len(),
            "Document stored"
        );

        Ok(session_id)
    }

    pub async fn load(&self, session_id: Uuid) -> AppResult<Vec<u8>> {
        let path = self.path_for(session_id);

        tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::NotFound(format!("Document {} not found", session_id))
            } else {
                AppError::Internal(format!("Failed to read document: {}", e))
            }
        })
    }

    /// Remove a stored document. Deleting a document that is already gone
    /// is not an error.
    pub async fn delete(&self, session_id: Uuid) -> AppResult<()> {
        let path = self.path_for(session_id);

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(session_id = %session_id, "Document deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Internal(format!(
                "Failed to delete document: {}",
                e
            ))),
        }
    }
}
