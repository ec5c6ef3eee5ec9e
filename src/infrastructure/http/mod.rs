use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{
    document::DocumentController, health, summarize::SummarizeController,
    translate::TranslateController, tts::TtsController,
};
use crate::infrastructure::config::Config;

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    document_controller: Arc<DocumentController>,
    translate_controller: Arc<TranslateController>,
    summarize_controller: Arc<SummarizeController>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Document routes carry the large-upload body limit
    let document_routes = Router::new()
        .route("/api/documents", post(DocumentController::upload))
        .route(
            "/api/documents/:session_id",
            get(DocumentController::get_document).delete(DocumentController::delete_document),
        )
        .route(
            "/api/documents/:session_id/text",
            post(DocumentController::extract_text),
        )
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .with_state(document_controller);

    let translate_routes = Router::new()
        .route("/api/translate", post(TranslateController::translate))
        .with_state(translate_controller);

    let summarize_routes = Router::new()
        .route("/api/summarize", post(SummarizeController::summarize))
        .with_state(summarize_controller);

    let tts_routes = Router::new()
        .route("/api/tts/synthesize", post(TtsController::synthesize))
        .route("/api/tts/voices", get(TtsController::voices))
        .with_state(tts_controller);

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .merge(document_routes)
        .merge(translate_routes)
        .merge(summarize_routes)
        .merge(tts_routes)
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
