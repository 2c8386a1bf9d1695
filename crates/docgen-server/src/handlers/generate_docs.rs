//! Documentation generation endpoint

use rocket::serde::json::Json;
use rocket::{State, post};
use tracing::info;

use crate::error::{ApiResult, ErrorResponse, api_error};
use crate::models::{GenerateDocsRequest, GenerateDocsResponse};
use crate::routes::ApiState;

/// Extract every entity of the submitted document and summarize it
///
/// Returns 400 for an empty document, 503 when the model is not loaded and
/// 500 for any other failure. Nothing is stored when the call fails.
#[utoipa::path(
    post,
    path = "/generate-docs",
    tag = "documentation",
    request_body = GenerateDocsRequest,
    responses(
        (status = 200, description = "One result per entity, in source order", body = GenerateDocsResponse),
        (status = 400, description = "Empty source code or body that is not JSON", body = ErrorResponse),
        (status = 422, description = "Body does not match the request schema", body = ErrorResponse),
        (status = 500, description = "Summarization or storage failure", body = ErrorResponse),
        (status = 503, description = "Summarization model not loaded", body = ErrorResponse)
    )
)]
#[post("/generate-docs", data = "<body>")]
pub async fn generate_docs(
    state: &State<ApiState>,
    body: Json<GenerateDocsRequest>,
) -> ApiResult<Json<GenerateDocsResponse>> {
    let body = body.into_inner();
    info!(
        session_id = %body.session_id,
        verbosity = %body.verbosity,
        persist = body.persist,
        "Documentation requested"
    );

    let results = state
        .documentation
        .generate(body.into())
        .await
        .map_err(|e| api_error(&e))?;

    Ok(Json(GenerateDocsResponse { results }))
}
