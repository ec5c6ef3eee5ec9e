pub mod chunker;
pub mod error;
pub mod language;
pub mod service;

pub use chunker::{split_text, TextSegment, DEFAULT_CHUNK_SIZE};
pub use error::TranslationServiceError;
pub use language::normalize_target_language;
pub use service::{TranslationReport, TranslationService};
