//! Use Case Implementations

pub mod documentation_service;
pub mod markdown_export;

pub use documentation_service::DocumentationServiceImpl;
pub use markdown_export::render_markdown;
