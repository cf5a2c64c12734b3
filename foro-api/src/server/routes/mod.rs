use crate::server::ServerRouter;
use openapi::ApiDoc;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

mod comments;
mod openapi;
mod posts;
mod users;

const OPENAPI_JSON_PATH: &str = "/api/openapi.json";
const SWAGGER_UI_PATH: &str = "/api/docs";

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .merge(users::routes())
        .merge(posts::routes())
        .merge(comments::routes())
}

/// Swagger UI and the document it renders. Mounted at the root since the UI
/// needs the document's full path.
pub fn docs() -> ServerRouter {
    SwaggerUi::new(SWAGGER_UI_PATH)
        .url(OPENAPI_JSON_PATH, ApiDoc::openapi())
        .into()
}

/// Reply to updates and deletes. These succeed whether or not a row matched.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize, ToSchema)]
struct MessageResponse {
    #[schema(value_type = String)]
    message: &'static str,
}

impl MessageResponse {
    fn new(message: &'static str) -> Self {
        Self { message }
    }
}
