//! Application ports
//!
//! The provider traits themselves live in `docgen_domain::ports`; this module
//! holds the registries used to discover their implementations.

pub mod registry;
