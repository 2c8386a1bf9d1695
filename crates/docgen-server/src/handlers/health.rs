//! Model readiness endpoint

use docgen_domain::ports::providers::SummarizationProvider;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::constants::{HEALTH_READY, HEALTH_UNAVAILABLE};
use crate::models::HealthResponse;
use crate::routes::ApiState;

/// Report whether the summarization model can serve requests
///
/// Answers 503 while the model slot is empty.
#[utoipa::path(
    get,
    path = "/health",
    tag = "service",
    responses(
        (status = 200, description = "Model loaded", body = HealthResponse),
        (status = 503, description = "Model not loaded", body = HealthResponse)
    )
)]
#[get("/health")]
pub fn health(state: &State<ApiState>) -> (Status, Json<HealthResponse>) {
    let handle = &state.summarizer;
    let (status, label) = if handle.is_ready() {
        (Status::Ok, HEALTH_READY)
    } else {
        (Status::ServiceUnavailable, HEALTH_UNAVAILABLE)
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            provider: handle.provider_name().to_string(),
            model: handle.model().to_string(),
        }),
    )
}
