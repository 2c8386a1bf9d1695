//! Value objects
//!
//! Immutable values describing how a documentation request is carried out.

pub mod request;
pub mod verbosity;

pub use request::DocumentationRequest;
pub use verbosity::{DecodingPreset, Verbosity};
