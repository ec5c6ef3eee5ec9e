use super::TranslationProvider;
use async_trait::async_trait;
use std::sync::Arc;

const TRANSLATE_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Google Translate implementation of the translation provider.
/// Uses the public `translate_a/single` endpoint, which returns a nested
/// JSON array with the translated sentences at `[0][i][0]`.
pub struct GoogleTranslateClient {
    http: Arc<reqwest::Client>,
}

impl GoogleTranslateClient {
    pub fn new(http: Arc<reqwest::Client>) -> Self {
        Self { http }
    }

    fn extract_translation(payload: &serde_json::Value) -> String {
        payload
            .get(0)
            .and_then(|sentences| sentences.as_array())
            .map(|sentences| {
                sentences
                    .iter()
                    .filter_map(|sentence| sentence.get(0).and_then(|s| s.as_str()))
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            source = source_lang,
            target = target_lang,
            text_length = text.len(),
            "Calling translation provider"
        );

        let url = format!(
            "{}?client=gtx&sl={}&tl={}&dt=t&q={}",
            TRANSLATE_ENDPOINT,
            urlencoding::encode(source_lang),
            urlencoding::encode(target_lang),
            urlencoding::encode(text)
        );

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, "Translation provider request failed");
            format!("Translation request failed: {}", e)
        })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, "Translation provider returned error status");
            return Err(format!("Translation provider returned {}", status));
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to decode translation response");
            format!("Failed to decode translation response: {}", e)
        })?;

        let translated = Self::extract_translation(&payload);

        tracing::debug!(
            latency_ms = start_time.elapsed().as_millis(),
            translated_length = translated.len(),
            "Translation provider call completed"
        );

        Ok(translated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_translation_joins_sentences() {
        let payload = json!([
            [
                ["Bonjour le monde. ", "Hello world. ", null],
                ["Comment vas-tu?", "How are you?", null]
            ],
            null,
            "en"
        ]);
        assert_eq!(
            GoogleTranslateClient::extract_translation(&payload),
            "Bonjour le monde. Comment vas-tu?"
        );
    }

    #[test]
    fn test_extract_translation_handles_malformed_payload() {
        assert_eq!(
            GoogleTranslateClient::extract_translation(&json!({"error": "nope"})),
            ""
        );
        assert_eq!(GoogleTranslateClient::extract_translation(&json!([])), "");
    }
}
