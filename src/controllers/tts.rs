use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    domain::tts::{resolve_voice, TtsService, VoiceGender, SUPPORTED_LANGUAGES},
    error::AppResult,
};

/// Request text is capped before entering the pipeline; longer documents are
/// synthesized page by page on the client side.
const MAX_TTS_CHARS: usize = 5000;

fn default_lang() -> String {
    "en".to_string()
}

fn default_voice_type() -> String {
    "female".to_string()
}

fn default_speed() -> f32 {
    1.0
}

/// Request for POST /api/tts/synthesize
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default = "default_voice_type")]
    pub voice_type: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

#[derive(Debug, Deserialize)]
pub struct VoicesQuery {
    pub lang: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub male: String,
    pub female: String,
    pub supported_languages: Vec<String>,
}

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /api/tts/synthesize - convert text to speech
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let text = truncate_chars(&request.text, MAX_TTS_CHARS);

        tracing::info!(
            lang = %request.lang,
            voice_type = %request.voice_type,
            speed = request.speed,
            text_length = text.len(),
            "TTS request"
        );

        let audio = controller
            .tts_service
            .synthesize(text, &request.voice_type, request.speed, &request.lang)
            .await?;

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, "audio/mpeg".parse().unwrap());
        headers.insert(
            "X-Character-Count",
            character_count(text).to_string().parse().unwrap(),
        );

        Ok((StatusCode::OK, headers, Body::from(audio)))
    }

    /// GET /api/tts/voices - available voices for a language
    pub async fn voices(Query(query): Query<VoicesQuery>) -> AppResult<Json<VoicesResponse>> {
        let lang = query.lang.unwrap_or_else(default_lang);

        Ok(Json(VoicesResponse {
            male: resolve_voice(&lang, VoiceGender::Male).to_string(),
            female: resolve_voice(&lang, VoiceGender::Female).to_string(),
            supported_languages: SUPPORTED_LANGUAGES.iter().map(|s| s.to_string()).collect(),
        }))
    }
}

/// Truncate to a character count without splitting a UTF-8 boundary.
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((offset, _)) => &text[..offset],
        None => text,
    }
}

/// Characters, not bytes, so the header matches the truncation limit.
fn character_count(text: &str) -> usize {
    text.chars().count()
}
