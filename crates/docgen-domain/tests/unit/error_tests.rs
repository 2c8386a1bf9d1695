//! Unit tests for domain errors

use docgen_domain::Error;

#[test]
fn test_invalid_argument_displays_message_only() {
    let err = Error::invalid_argument("Source code cannot be empty.");
    assert_eq!(err.to_string(), "Source code cannot be empty.");
    assert!(err.is_client_error());
}

#[test]
fn test_model_unavailable_is_not_client_error() {
    let err = Error::model_unavailable("connection refused");

    assert!(err.is_unavailable());
    assert!(!err.is_client_error());
    assert!(err.to_string().contains("connection refused"));
}

#[test]
fn test_summarization_error_message() {
    let err = Error::summarization("huggingface server error (503): loading");
    assert_eq!(
        err.to_string(),
        "Summarization error: huggingface server error (503): loading"
    );
}

#[test]
fn test_io_error_conversion() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(matches!(err, Error::IoSimple { .. }));
}

#[test]
fn test_not_found_is_client_error_not_unavailable() {
    let err = Error::not_found("run r-1 in session alpha");

    assert!(err.is_client_error());
    assert!(!err.is_unavailable());
}

#[test]
fn test_internal_errors_are_neither_client_nor_unavailable() {
    let err = Error::internal("history lock poisoned");

    assert!(!err.is_client_error());
    assert!(!err.is_unavailable());
}
