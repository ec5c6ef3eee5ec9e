pub mod error;
pub mod format;
pub mod service;

pub use error::SummaryServiceError;
pub use format::markdown_to_html;
pub use service::{SummaryResult, SummaryService};
