//! Context helpers for foreign errors
//!
//! Filesystem and configuration failures cross into the domain through these
//! two methods so the resulting message always names the operation that failed.

use docgen_domain::error::{Error, Result};
use std::fmt::Display;

/// Attach an operation description while converting into [`Error`]
///
/// ```ignore
/// use docgen_infrastructure::error_ext::ErrorContext;
///
/// let source = std::fs::read_to_string(&path)
///     .io_context(format!("Failed to read source file: {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Convert into [`Error::Io`], keeping the original error as source
    fn io_context<C: Display>(self, context: C) -> Result<T>;

    /// Convert into [`Error::Configuration`], keeping the original error as source
    fn config_context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::Io {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|err| Error::Configuration {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }
}
