//! Domain entities

pub mod code_entity;
pub mod documentation_run;

pub use code_entity::{CodeEntity, EntityKind};
pub use documentation_run::{DocumentationRun, SummaryResult};
