//! Endpoint handlers
//!
//! Each handler only translates between HTTP and the documentation use case;
//! no business rule lives here.

pub mod docs;
pub mod generate_docs;
pub mod health;
pub mod history;
