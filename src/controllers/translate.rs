use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{domain::translation::TranslationService, error::AppResult};

fn default_target_lang() -> String {
    "en".to_string()
}

/// Request for POST /api/translate
#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
    pub successful_segments: usize,
    pub failed_segments: usize,
}

pub struct TranslateController {
    translation_service: Arc<TranslationService>,
}

impl TranslateController {
    pub fn new(translation_service: Arc<TranslationService>) -> Self {
        Self {
            translation_service,
        }
    }

    /// POST /api/translate - translate text to the target language
    pub async fn translate(
        State(controller): State<Arc<TranslateController>>,
        Json(request): Json<TranslateRequest>,
    ) -> AppResult<Json<TranslateResponse>> {
        let report = controller
            .translation_service
            .translate(&request.text, &request.target_lang)
            .await?;

        Ok(Json(TranslateResponse {
            translated_text: report.translated_text,
            successful_segments: report.successful_segments,
            failed_segments: report.failed_segments,
        }))
    }
}
