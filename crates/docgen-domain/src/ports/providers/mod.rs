//! Provider ports

pub mod entity_extraction;
pub mod summarization;

pub use entity_extraction::EntityExtractor;
pub use summarization::SummarizationProvider;
