//! Server-specific constants

/// Path the root redirects to
pub const DOCS_PATH: &str = "/docs/";

/// Mount pattern of the interactive API page and its assets
pub const DOCS_ROUTE: &str = "/docs/<_..>";

/// Path of the generated OpenAPI document
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Health status reported when the model is loaded
pub const HEALTH_READY: &str = "ready";

/// Health status reported when the model is not loaded
pub const HEALTH_UNAVAILABLE: &str = "unavailable";

/// Detail returned for request bodies that are not valid JSON
pub const ERROR_MALFORMED_BODY: &str = "Request body is not valid JSON.";

/// Detail returned for JSON bodies that do not match the request schema
pub const ERROR_INVALID_BODY: &str =
    "Request body does not match the expected schema (source_code: string, verbosity: concise|detailed, persist: bool, session_id: string).";

/// Detail returned when the body exceeds the configured limit
pub const ERROR_BODY_TOO_LARGE: &str = "Request body exceeds the configured size limit.";

/// Detail returned by the unknown-route catcher
pub const ERROR_ROUTE_NOT_FOUND: &str = "Not Found";

/// Detail returned by the fallback catcher
pub const ERROR_INTERNAL: &str = "Internal Server Error";

/// Rocket's own log output; tracing carries the application logs
pub const ROCKET_LOG_LEVEL: &str = "critical";
