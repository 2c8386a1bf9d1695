//! API documentation entry point
//!
//! The OpenAPI document and the interactive page are served by `SwaggerUi`,
//! mounted in `routes.rs`.

use rocket::get;
use rocket::response::Redirect;

use crate::constants::DOCS_PATH;

/// Send visitors of the root to the API page (307)
#[get("/")]
pub fn index() -> Redirect {
    Redirect::temporary(DOCS_PATH)
}
