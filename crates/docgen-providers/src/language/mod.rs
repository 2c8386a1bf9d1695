//! Entity extractors
//!
//! Each extractor parses one source language with tree-sitter and walks only
//! the top level of the tree (plus one level into class bodies).

#[cfg(feature = "lang-python")]
pub mod python;

#[cfg(feature = "lang-python")]
pub use python::PythonEntityExtractor;
