//! Repository ports
//!
//! Persistence contracts. The history repository is the only store and the
//! sole owner of persisted runs.

pub mod history_repository;

pub use history_repository::HistoryRepository;
