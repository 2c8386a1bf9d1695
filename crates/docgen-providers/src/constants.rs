//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in docgen-domain) and infrastructure constants.

// ============================================================================
// HTTP CONSTANTS
// ============================================================================

/// JSON content type header value
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

/// Default timeout for model API requests in seconds
pub const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 120;

// ============================================================================
// SUMMARIZATION PROVIDER CONSTANTS
// ============================================================================

/// Hugging Face Inference API base URL
pub const HUGGINGFACE_DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Ollama local server base URL
pub const OLLAMA_DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Ollama model used when none is configured
pub const OLLAMA_DEFAULT_MODEL: &str = "codellama";

/// Model name reported by the null adapter
pub const NULL_MODEL_NAME: &str = "null-summarizer";

// ============================================================================
// TREE-SITTER NODE TYPES (Python)
// ============================================================================

/// `def` / `async def`
pub const TS_NODE_FUNCTION_DEFINITION: &str = "function_definition";

/// `class`
pub const TS_NODE_CLASS_DEFINITION: &str = "class_definition";

/// Decorated function or class
pub const TS_NODE_DECORATED_DEFINITION: &str = "decorated_definition";

/// Indented statement block of a compound statement
pub const TS_NODE_BLOCK: &str = "block";

/// Comment, attached wherever the parser happens to be
pub const TS_NODE_COMMENT: &str = "comment";

/// Suffix shared by `else`, `elif`, `except`, `finally` and `case` clauses
pub const TS_NODE_CLAUSE_SUFFIX: &str = "_clause";

/// Python 2 `print x` statement
pub const TS_NODE_PRINT_STATEMENT: &str = "print_statement";

/// Python 2 `exec code` statement
pub const TS_NODE_EXEC_STATEMENT: &str = "exec_statement";
