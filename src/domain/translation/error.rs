use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum TranslationServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<TranslationServiceError> for AppError {
    fn from(err: TranslationServiceError) -> Self {
        match err {
            TranslationServiceError::Invalid(msg) => AppError::BadRequest(msg),
            TranslationServiceError::Dependency(msg) => AppError::ExternalService(msg),
            TranslationServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
