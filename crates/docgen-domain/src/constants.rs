//! Domain constants
//!
//! Values that are part of the observable contract of the domain types.

/// Title given to a persisted run that produced no entities
pub const UNTITLED_RUN_TITLE: &str = "Untitled";

/// Session used when a caller does not supply one
pub const DEFAULT_SESSION_ID: &str = "default";

/// Local date/time format stored on every run (minute precision)
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Separator between class name and method name in method entity names
pub const METHOD_NAME_SEPARATOR: &str = ".";

/// Pretrained sequence-to-sequence model used for code summarization
pub const DEFAULT_SUMMARIZATION_MODEL: &str = "Salesforce/codet5-base-multi-sum";

/// Language understood by the default entity extractor
pub const DEFAULT_SOURCE_LANGUAGE: &str = "python";
