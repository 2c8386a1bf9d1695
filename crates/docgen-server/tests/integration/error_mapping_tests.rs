//! Domain error to HTTP status mapping

use docgen_domain::Error;
use docgen_server::error::{api_error, status_for};
use rocket::http::Status;

#[test]
fn test_client_errors_map_to_4xx() {
    assert_eq!(
        status_for(&Error::invalid_argument("Source code cannot be empty.")),
        Status::BadRequest
    );
    assert_eq!(
        status_for(&Error::not_found("run r-1 in session alpha")),
        Status::NotFound
    );
}

#[test]
fn test_unavailable_model_maps_to_503() {
    assert_eq!(
        status_for(&Error::model_unavailable("still loading")),
        Status::ServiceUnavailable
    );
}

#[test]
fn test_everything_else_maps_to_500() {
    assert_eq!(
        status_for(&Error::summarization("upstream returned 502")),
        Status::InternalServerError
    );
    assert_eq!(
        status_for(&Error::extraction("parser rejected input")),
        Status::InternalServerError
    );
    assert_eq!(
        status_for(&Error::config("bad provider")),
        Status::InternalServerError
    );
}

#[test]
fn test_api_error_carries_display_as_detail() {
    let (status, body) = api_error(&Error::invalid_argument("Source code cannot be empty."));
    assert_eq!(status, Status::BadRequest);
    assert_eq!(body.detail, "Source code cannot be empty.");
}
