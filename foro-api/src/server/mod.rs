use axum::{
    Router,
    extract::{
        FromRef, Request,
        rejection::{FormRejection, JsonRejection, PathRejection},
    },
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};
use foro_db::client::{DbClient, DbError};
use operation::{Operation, Resource};
use serde::{Deserialize, Serialize};
use std::{borrow::Cow, sync::Arc};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

mod body;
mod json;
pub mod operation;
mod routes;

pub type ServerRouter = Router<ServerState>;

#[derive(Clone, Debug, FromRef)]
pub struct ServerState {
    pub db_client: Arc<DbClient>,
}

/// All endpoints, mounted under `/api`, plus their OpenAPI document and
/// Swagger UI.
///
/// A known path requested with a method it doesn't serve is answered like an
/// unknown route.
pub fn routes() -> ServerRouter {
    Router::new()
        .nest("/api", routes::routes())
        .merge(routes::docs())
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
}

pub async fn fallback(request: Request) -> ServerError {
    ServerError::UnknownRoute(request.into_parts().0.uri)
}

pub type Result<T, E = ServerError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Unknown route requested: {0}")]
    UnknownRoute(Uri),
    #[error("Path rejected: {0}")]
    PathRejection(#[from] PathRejection),
    #[error("Incoming JSON rejected: {0}")]
    JsonRejection(#[from] JsonRejection),
    #[error("Incoming form rejected: {0}")]
    FormRejection(#[from] FormRejection),
    #[error("JSON response could not be serialized: {0}")]
    JsonResponse(#[from] serde_json::Error),
    #[error("{resource} with id {id} was not found")]
    NotFound { resource: Resource, id: String },
    #[error("Failed {operation}: {source}")]
    Database {
        operation: Operation,
        #[source]
        source: DbError,
    },
}

impl ServerError {
    /// Adapter for `map_err` that remembers which operation hit the database.
    pub fn database(operation: Operation) -> impl FnOnce(DbError) -> Self {
        move |source| Self::Database { operation, source }
    }

    pub fn not_found(resource: Resource, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::UnknownRoute(_) | ServerError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::PathRejection(_) => StatusCode::BAD_REQUEST,
            ServerError::JsonRejection(rejection) => rejection.status(),
            ServerError::FormRejection(rejection) => rejection.status(),
            ServerError::JsonResponse(_) | ServerError::Database { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// What the client gets to see. Storage details stay in the logs.
    pub fn client_message(&self) -> Cow<'static, str> {
        match self {
            ServerError::UnknownRoute(_) => Cow::Borrowed("Ruta no encontrada"),
            ServerError::PathRejection(_) => Cow::Borrowed("Parámetro de ruta inválido"),
            ServerError::JsonRejection(rejection) => Cow::Owned(rejection.body_text()),
            ServerError::FormRejection(rejection) => Cow::Owned(rejection.body_text()),
            ServerError::JsonResponse(_) => Cow::Borrowed("Error interno del servidor"),
            ServerError::NotFound { resource, .. } => Cow::Borrowed(resource.not_found_message()),
            ServerError::Database { operation, .. } => Cow::Borrowed(operation.failure_message()),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorResponse {
    #[schema(value_type = String)]
    error: Cow<'static, str>,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();

        error!(error = %self, %status, "Replying with error");

        let error_response = ErrorResponse {
            error: self.client_message(),
        };
        json::reply(status, &error_response)
    }
}
