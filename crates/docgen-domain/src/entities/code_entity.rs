//! Documentable code units

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::constants::METHOD_NAME_SEPARATOR;

/// Kind of a documentable unit
///
/// The set is closed: extraction only ever yields these three kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Top-level function (sync or async)
    Function,
    /// Top-level class
    Class,
    /// Function defined directly inside a top-level class
    Method,
}

impl EntityKind {
    /// Lowercase wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "function",
            Self::Class => "class",
            Self::Method => "method",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One documentable unit of source code
///
/// `source_text` is always a verbatim slice of the document it was extracted
/// from, original formatting included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CodeEntity {
    /// Entity name; methods are named `<Class>.<method>`
    #[serde(rename = "entity_name", alias = "entityName")]
    pub name: String,
    /// Kind of the entity
    #[serde(rename = "entity_type", alias = "entityType")]
    pub kind: EntityKind,
    /// Exact source span of the definition
    #[serde(rename = "original_code", alias = "originalCode")]
    pub source_text: String,
}

impl CodeEntity {
    /// Create a top-level function entity
    pub fn function(name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Function,
            source_text: source_text.into(),
        }
    }

    /// Create a top-level class entity
    pub fn class(name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Class,
            source_text: source_text.into(),
        }
    }

    /// Create a method entity, composing the qualified `<Class>.<method>` name
    pub fn method(
        class_name: &str,
        method_name: &str,
        source_text: impl Into<String>,
    ) -> Self {
        Self {
            name: format!("{class_name}{METHOD_NAME_SEPARATOR}{method_name}"),
            kind: EntityKind::Method,
            source_text: source_text.into(),
        }
    }
}
