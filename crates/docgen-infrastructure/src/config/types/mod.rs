//! Configuration types module

pub mod app;
pub mod extraction;
pub mod history;
pub mod logging;
pub mod server;
pub mod summarization;

// Re-export main types
pub use app::AppConfig;
pub use extraction::ExtractionConfig;
pub use history::HistoryConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
pub use summarization::SummarizationConfig;
