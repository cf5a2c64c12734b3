use crate::server::{
    ErrorResponse, Result, ServerError, ServerRouter,
    body::Body,
    json::{Created, Json},
    operation::{Operation, Resource},
    routes::MessageResponse,
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use foro_common::model::{
    Id,
    user::{User, UserFields, UserMarker},
};
use foro_db::client::DbClient;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

const USER_CREATED: &str = "Usuario creado correctamente";
const USER_UPDATED: &str = "Datos de usuario actualizados correctamente";
const USER_DELETED: &str = "Cuenta de usuario eliminada correctamente";

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_users)
        .typed_get(list_admin_users)
        .typed_post(create_user)
        .typed_get(get_user)
        .typed_put(update_user)
        .typed_delete(delete_user)
}

#[derive(TypedPath)]
#[typed_path("/users")]
pub(super) struct UsersPath;

#[derive(TypedPath)]
#[typed_path("/admin/users")]
pub(super) struct AdminUsersPath;

#[derive(TypedPath, Deserialize)]
#[typed_path("/users/{id}", rejection(ServerError))]
pub(super) struct UserPath {
    id: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, ToSchema)]
pub(super) struct CreatedUserResponse {
    #[schema(value_type = String)]
    message: &'static str,
    #[serde(rename = "userId")]
    #[schema(value_type = i64)]
    user_id: Id<UserMarker>,
}

async fn fetch_users(db: &DbClient) -> Result<Json<Vec<User>>> {
    let users = db
        .fetch_users()
        .await
        .map_err(ServerError::database(Operation::ListUsers))?;

    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "usuarios",
    responses(
        (status = 200, description = "Every user", body = [User]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn list_users(
    UsersPath: UsersPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<User>>> {
    fetch_users(&db).await
}

/// Same listing as `GET /api/users`.
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = "usuarios",
    responses(
        (status = 200, description = "Every user", body = [User]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn list_admin_users(
    AdminUsersPath: AdminUsersPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<User>>> {
    fetch_users(&db).await
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "usuarios",
    params(("id" = String, Path, description = "`usuarios_id` of the user")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "No such user", body = ErrorResponse),
        (status = 500, description = "Storage failure, including a non-numeric id", body = ErrorResponse),
    ),
)]
pub(super) async fn get_user(
    UserPath { id }: UserPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<User>> {
    let user = db
        .fetch_user(&id)
        .await
        .map_err(ServerError::database(Operation::GetUser))?
        .ok_or_else(|| ServerError::not_found(Resource::User, id))?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "usuarios",
    request_body(content(
        (UserFields = "application/json"),
        (UserFields = "application/x-www-form-urlencoded"),
    )),
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn create_user(
    UsersPath: UsersPath,
    State(db): State<Arc<DbClient>>,
    Body(user): Body<UserFields>,
) -> Result<Created<CreatedUserResponse>> {
    let user_id = db
        .create_user(&user)
        .await
        .map_err(ServerError::database(Operation::CreateUser))?;

    Ok(Created(CreatedUserResponse {
        message: USER_CREATED,
        user_id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "usuarios",
    params(("id" = String, Path, description = "`usuarios_id` of the user")),
    request_body(content(
        (UserFields = "application/json"),
        (UserFields = "application/x-www-form-urlencoded"),
    )),
    responses(
        (status = 200, description = "Update ran, whether or not a row matched", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn update_user(
    UserPath { id }: UserPath,
    State(db): State<Arc<DbClient>>,
    Body(user): Body<UserFields>,
) -> Result<Json<MessageResponse>> {
    db.update_user(&id, &user)
        .await
        .map_err(ServerError::database(Operation::UpdateUser))?;

    Ok(Json(MessageResponse::new(USER_UPDATED)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "usuarios",
    params(("id" = String, Path, description = "`usuarios_id` of the user")),
    responses(
        (status = 200, description = "Delete ran, whether or not a row matched", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn delete_user(
    UserPath { id }: UserPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<MessageResponse>> {
    db.delete_user(&id)
        .await
        .map_err(ServerError::database(Operation::DeleteUser))?;

    Ok(Json(MessageResponse::new(USER_DELETED)))
}
