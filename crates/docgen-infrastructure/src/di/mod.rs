//! Dependency wiring
//!
//! ```text
//! AppConfig → resolvers → linkme registries → Arc<dyn Port>
//!                                  ↓
//!                  SummarizerHandle (readiness) → DocumentationServiceImpl
//! ```

pub mod bootstrap;
pub mod handle;
pub mod resolvers;

pub use bootstrap::{AppContext, init_app};
pub use handle::SummarizerHandle;
