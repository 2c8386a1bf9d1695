//! Infrastructure constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "docgen.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "docgen";

/// Environment variable prefix; nested keys are separated by `__`
pub const CONFIG_ENV_PREFIX: &str = "DOCGEN";

/// Separator between env prefix and nested keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER
// ============================================================================

/// Default HTTP host
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8000;

/// Maximum accepted JSON request body
pub const MAX_REQUEST_BODY_SIZE: u64 = 10 * 1024 * 1024;

// ============================================================================
// LOGGING
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_ENV_FILTER_VAR: &str = "DOCGEN_LOG";

/// File name prefix for rotated log files
pub const LOG_FILE_PREFIX: &str = "docgen";

// ============================================================================
// PROVIDERS
// ============================================================================

/// Default summarization adapter
pub const DEFAULT_SUMMARIZATION_PROVIDER: &str = "huggingface";

/// Default model request timeout in seconds
pub const DEFAULT_SUMMARIZATION_TIMEOUT_SECS: u64 = 120;

/// Default history store
pub const DEFAULT_HISTORY_PROVIDER: &str = "json_file";

/// Default history file
pub const DEFAULT_HISTORY_PATH: &str = "history.json";

/// History provider that needs a file path
pub const FILE_HISTORY_PROVIDER: &str = "json_file";
