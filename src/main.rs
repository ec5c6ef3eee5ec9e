use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docvoice_backend::controllers::{
    document::DocumentController, summarize::SummarizeController, translate::TranslateController,
    tts::TtsController,
};
use docvoice_backend::domain::summary::SummaryService;
use docvoice_backend::domain::translation::TranslationService;
use docvoice_backend::domain::tts::TtsService;
use docvoice_backend::infrastructure::config::{Config, LogFormat};
use docvoice_backend::infrastructure::http::start_http_server;
use docvoice_backend::infrastructure::providers::{
    GoogleTranslateClient, GroqClient, NeuralSpeechClient, TranslateTtsClient,
};
use docvoice_backend::infrastructure::storage::DocumentStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting DocVoice Backend on {}:{}",
        config.host,
        config.port
    );

    // Shared HTTP client for all external providers
    let http_client = Arc::new(reqwest::Client::new());

    // Document store (ensure the upload directory exists)
    let document_store = Arc::new(DocumentStore::new(config.upload_dir.clone()));
    document_store.init().await?;
    tracing::info!(upload_dir = %config.upload_dir, "Document store ready");

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate provider clients (inject http client)
    tracing::info!("Instantiating provider clients...");
    let translation_provider = Arc::new(GoogleTranslateClient::new(http_client.clone()));
    let neural_speech = Arc::new(NeuralSpeechClient::new(
        http_client.clone(),
        config.speech_gateway_url.clone(),
    ));
    let fallback_speech = Arc::new(TranslateTtsClient::new(http_client.clone()));
    let groq_client = Arc::new(GroqClient::new(
        http_client.clone(),
        config.groq_api_key.clone(),
        config.groq_model.clone(),
    ));

    // 2. Instantiate services (inject providers)
    tracing::info!("Instantiating services...");
    let translation_service = Arc::new(TranslationService::new(translation_provider));
    let tts_service = Arc::new(TtsService::new(neural_speech, fallback_speech));
    let summary_service = Arc::new(SummaryService::new(groq_client));

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let document_controller = Arc::new(DocumentController::new(document_store));
    let translate_controller = Arc::new(TranslateController::new(translation_service));
    let summarize_controller = Arc::new(SummarizeController::new(summary_service));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    // Start HTTP server with all routes
    start_http_server(
        config,
        document_controller,
        translate_controller,
        summarize_controller,
        tts_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "docvoice_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "docvoice_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
