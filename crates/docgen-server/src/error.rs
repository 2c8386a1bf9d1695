//! HTTP error mapping
//!
//! Domain errors become `(Status, Json<ErrorResponse>)` pairs; Rocket's own
//! failures (unknown routes, unparsable bodies) go through the catchers below
//! so that every error body carries a single `detail` field.

use docgen_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, catch, catchers};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::constants::{
    ERROR_BODY_TOO_LARGE, ERROR_INTERNAL, ERROR_INVALID_BODY, ERROR_MALFORMED_BODY,
    ERROR_ROUTE_NOT_FOUND,
};

/// Error body returned by every endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable description of the failure
    pub detail: String,
}

impl ErrorResponse {
    /// Wrap a description
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Failure half of every handler result
pub type ApiError = (Status, Json<ErrorResponse>);

/// Handler result
pub type ApiResult<T> = Result<T, ApiError>;

/// HTTP status for a domain error
pub fn status_for(err: &Error) -> Status {
    if err.is_unavailable() {
        Status::ServiceUnavailable
    } else if err.is_client_error() {
        match err {
            Error::NotFound { .. } => Status::NotFound,
            _ => Status::BadRequest,
        }
    } else {
        Status::InternalServerError
    }
}

/// Convert a domain error into the handler failure pair
pub fn api_error(err: &Error) -> ApiError {
    let status = status_for(err);
    if status == Status::InternalServerError {
        error!(error = %err, "Request failed");
    } else {
        warn!(status = status.code, error = %err, "Request rejected");
    }
    (status, Json(ErrorResponse::new(err.to_string())))
}

#[catch(400)]
fn bad_request(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(ERROR_MALFORMED_BODY))
}

#[catch(404)]
fn not_found(req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(format!(
        "{ERROR_ROUTE_NOT_FOUND}: {}",
        req.uri().path()
    )))
}

#[catch(413)]
fn payload_too_large(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(ERROR_BODY_TOO_LARGE))
}

#[catch(422)]
fn unprocessable(_req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(ERROR_INVALID_BODY))
}

#[catch(default)]
fn fallback(status: Status, _req: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        status.reason().unwrap_or(ERROR_INTERNAL).to_string(),
    ))
}

/// Catchers registered at the root
pub fn json_catchers() -> Vec<Catcher> {
    catchers![bad_request, not_found, payload_too_large, unprocessable, fallback]
}
