pub mod error;
pub mod normalize;
pub mod service;
pub mod voice;

pub use error::TtsServiceError;
pub use normalize::normalize_for_speech;
pub use service::TtsService;
pub use voice::{
    fallback_language, is_slow_speed, rate_adjustment, resolve_voice, VoiceGender,
    SUPPORTED_LANGUAGES,
};
