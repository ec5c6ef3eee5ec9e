pub mod summary;
pub mod translation;
pub mod tts;
