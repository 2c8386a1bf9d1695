//! History endpoints
//!
//! Sessions are opaque strings; any caller may read any session.

use docgen_application::use_cases::render_markdown;
use docgen_domain::entities::DocumentationRun;
use rocket::http::ContentType;
use rocket::serde::json::Json;
use rocket::{State, get};

use crate::error::{ApiResult, ErrorResponse, api_error};
use crate::routes::ApiState;

/// Stored runs of a session, most recent first
///
/// An unknown session is not an error; it simply has no runs.
#[utoipa::path(
    get,
    path = "/history/{session_id}",
    tag = "history",
    params(("session_id" = String, Path, description = "Session whose runs are listed")),
    responses(
        (status = 200, description = "Runs of the session, possibly empty", body = Vec<DocumentationRun>),
        (status = 500, description = "History store failure", body = ErrorResponse)
    )
)]
#[get("/history/<session_id>")]
pub async fn session_history(
    state: &State<ApiState>,
    session_id: &str,
) -> ApiResult<Json<Vec<DocumentationRun>>> {
    state
        .documentation
        .history(session_id)
        .await
        .map(Json)
        .map_err(|e| api_error(&e))
}

/// Markdown export of one stored run
#[utoipa::path(
    get,
    path = "/history/{session_id}/{run_id}/markdown",
    tag = "history",
    params(
        ("session_id" = String, Path, description = "Session the run was filed under"),
        ("run_id" = String, Path, description = "Run identifier")
    ),
    responses(
        (status = 200, description = "Markdown document", body = String, content_type = "text/markdown"),
        (status = 404, description = "Run not found in this session", body = ErrorResponse)
    )
)]
#[get("/history/<session_id>/<run_id>/markdown")]
pub async fn run_markdown(
    state: &State<ApiState>,
    session_id: &str,
    run_id: &str,
) -> ApiResult<(ContentType, String)> {
    let run = state
        .documentation
        .find_run(session_id, run_id)
        .await
        .map_err(|e| api_error(&e))?;

    Ok((
        ContentType::new("text", "markdown"),
        render_markdown(&run.results),
    ))
}
