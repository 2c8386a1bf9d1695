//! History store implementations
//!
//! | Store | Durability | Notes |
//! |-------|------------|-------|
//! | [`JsonFileHistoryRepository`] | JSON array file | Whole-file rewrite per append |
//! | [`InMemoryHistoryRepository`] | Process memory | Tests and ephemeral runs |

pub mod in_memory;
pub mod json_file;

pub use in_memory::InMemoryHistoryRepository;
pub use json_file::JsonFileHistoryRepository;
