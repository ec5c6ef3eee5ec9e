use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{domain::summary::SummaryService, error::AppResult};

/// Request for POST /api/summarize
#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    /// HTML formatted summary for the viewer
    pub summary: String,
    /// Original markdown, kept as a backup for clients that render it
    pub raw_summary: String,
}

pub struct SummarizeController {
    summary_service: Arc<SummaryService>,
}

impl SummarizeController {
    pub fn new(summary_service: Arc<SummaryService>) -> Self {
        Self { summary_service }
    }

    /// POST /api/summarize - summarize document text
    pub async fn summarize(
        State(controller): State<Arc<SummarizeController>>,
        Json(request): Json<SummarizeRequest>,
    ) -> AppResult<Json<SummarizeResponse>> {
        let result = controller.summary_service.summarize(&request.text).await?;

        Ok(Json(SummarizeResponse {
            summary: result.html,
            raw_summary: result.markdown,
        }))
    }
}
