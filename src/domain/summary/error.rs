use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum SummaryServiceError {
    #[error("dependency error: {0}")]
    Dependency(String),
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<SummaryServiceError> for AppError {
    fn from(err: SummaryServiceError) -> Self {
        match err {
            SummaryServiceError::Invalid(msg) => AppError::BadRequest(msg),
            SummaryServiceError::Dependency(msg) => AppError::ExternalService(msg),
            SummaryServiceError::Other(e) => AppError::Internal(e.to_string()),
        }
    }
}
