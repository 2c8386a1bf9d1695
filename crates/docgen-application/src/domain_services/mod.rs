//! Application Service Interfaces
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DocumentationServiceInterface`] | Generate summaries for a document and read run history |

/// Documentation use case interface
pub mod documentation;

pub use documentation::DocumentationServiceInterface;
