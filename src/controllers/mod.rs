pub mod document;
pub mod health;
pub mod summarize;
pub mod translate;
pub mod tts;
