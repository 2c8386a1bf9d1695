//! Rocket assembly

use std::sync::Arc;

use docgen_application::domain_services::DocumentationServiceInterface;
use docgen_infrastructure::config::ServerConfig;
use docgen_infrastructure::{AppContext, SummarizerHandle};
use rocket::data::{Limits, ToByteUnit};
use rocket::figment::Figment;
use docgen_domain::entities::{CodeEntity, DocumentationRun, EntityKind, SummaryResult};
use docgen_domain::value_objects::Verbosity;
use rocket::{Build, Rocket, routes};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::constants::{DOCS_ROUTE, OPENAPI_PATH, ROCKET_LOG_LEVEL};
use crate::cors::{Cors, preflight};
use crate::error::{ErrorResponse, json_catchers};
use crate::handlers::{docs, generate_docs, health, history};
use crate::models::{GenerateDocsRequest, GenerateDocsResponse, HealthResponse};

/// OpenAPI description of the HTTP surface
#[derive(OpenApi)]
#[openapi(
    info(
        title = "docgen",
        description = "Generates natural-language explanations for the functions, classes and methods of a source document."
    ),
    paths(
        generate_docs::generate_docs,
        history::session_history,
        history::run_markdown,
        health::health,
    ),
    components(schemas(
        GenerateDocsRequest,
        GenerateDocsResponse,
        HealthResponse,
        ErrorResponse,
        SummaryResult,
        CodeEntity,
        EntityKind,
        DocumentationRun,
        Verbosity,
    )),
    tags(
        (name = "documentation", description = "Entity extraction and summarization"),
        (name = "history", description = "Stored documentation runs"),
        (name = "service", description = "Service status")
    )
)]
pub struct ApiDoc;

/// State shared by all handlers
#[derive(Clone)]
pub struct ApiState {
    /// Documentation use case
    pub documentation: Arc<dyn DocumentationServiceInterface>,
    /// Summarizer handle, consulted for readiness
    pub summarizer: Arc<SummarizerHandle>,
}

impl From<&AppContext> for ApiState {
    fn from(context: &AppContext) -> Self {
        Self {
            documentation: context.documentation(),
            summarizer: context.summarizer(),
        }
    }
}

/// Rocket configuration derived from the server section
///
/// Rocket's own logger is kept quiet; request logging goes through tracing.
pub fn rocket_figment(config: &ServerConfig) -> Figment {
    let limits = Limits::default().limit("json", config.max_request_body_bytes.bytes());
    rocket::Config::figment()
        .merge(("address", config.host.clone()))
        .merge(("port", config.port))
        .merge(("limits", limits))
        .merge(("log_level", ROCKET_LOG_LEVEL))
}

/// Build the Rocket application for `context`
pub fn docgen_rocket(context: &AppContext) -> Rocket<Build> {
    let server = &context.config.server;

    let mut rocket = rocket::custom(rocket_figment(server))
        .manage(ApiState::from(context))
        .mount(
            "/",
            routes![
                generate_docs::generate_docs,
                history::session_history,
                history::run_markdown,
                health::health,
                docs::index,
            ],
        )
        .mount("/", SwaggerUi::new(DOCS_ROUTE).url(OPENAPI_PATH, ApiDoc::openapi()))
        .register("/", json_catchers());

    if server.cors_enabled {
        rocket = rocket.attach(Cors).mount("/", routes![preflight]);
    }

    rocket
}
