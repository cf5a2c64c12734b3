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
    post::{NewPost, Post, PostFields, PostMarker},
};
use foro_db::client::DbClient;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use utoipa::ToSchema;

const POST_CREATED: &str = "Publicación creada correctamente";
const POST_UPDATED: &str = "Publicación actualizada correctamente";
const POST_DELETED: &str = "Publicación eliminada correctamente";

pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_posts)
        .typed_post(create_post)
        .typed_get(get_post)
        .typed_put(update_post)
        .typed_delete(delete_post)
        .typed_get(list_posts_by_category)
        .typed_get(search_posts_by_title)
}

#[derive(TypedPath)]
#[typed_path("/publicaciones")]
pub(super) struct PostsPath;

#[derive(TypedPath, Deserialize)]
#[typed_path("/publicaciones/{id}", rejection(ServerError))]
pub(super) struct PostPath {
    id: String,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/publicaciones/categorias/{categoria_id}", rejection(ServerError))]
pub(super) struct PostsByCategoryPath {
    categoria_id: String,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/publicaciones/buscar/{titulo}", rejection(ServerError))]
pub(super) struct PostSearchPath {
    titulo: String,
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Serialize, ToSchema)]
pub(super) struct CreatedPostResponse {
    #[schema(value_type = String)]
    message: &'static str,
    #[serde(rename = "publicacionId")]
    #[schema(value_type = i64)]
    post_id: Id<PostMarker>,
}

/// Full rows, including columns this service doesn't otherwise know about.
#[utoipa::path(
    get,
    path = "/api/publicaciones",
    tag = "publicaciones",
    responses(
        (status = 200, description = "Every post with all of its columns", body = [Object]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn list_posts(
    PostsPath: PostsPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<JsonValue>>> {
    let posts = db
        .fetch_post_rows()
        .await
        .map_err(ServerError::database(Operation::ListPosts))?;

    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/api/publicaciones/{id}",
    tag = "publicaciones",
    params(("id" = String, Path, description = "`publicaciones_id` of the post")),
    responses(
        (status = 200, description = "The post", body = Post),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Storage failure, including a non-numeric id", body = ErrorResponse),
    ),
)]
pub(super) async fn get_post(
    PostPath { id }: PostPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Post>> {
    let post = db
        .fetch_post(&id)
        .await
        .map_err(ServerError::database(Operation::GetPost))?
        .ok_or_else(|| ServerError::not_found(Resource::Post, id))?;

    Ok(Json(post))
}

#[utoipa::path(
    post,
    path = "/api/publicaciones",
    tag = "publicaciones",
    request_body(content(
        (NewPost = "application/json"),
        (NewPost = "application/x-www-form-urlencoded"),
    )),
    responses(
        (status = 201, description = "Post created", body = CreatedPostResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn create_post(
    PostsPath: PostsPath,
    State(db): State<Arc<DbClient>>,
    Body(post): Body<NewPost>,
) -> Result<Created<CreatedPostResponse>> {
    let post_id = db
        .create_post(&post)
        .await
        .map_err(ServerError::database(Operation::CreatePost))?;

    Ok(Created(CreatedPostResponse {
        message: POST_CREATED,
        post_id,
    }))
}

#[utoipa::path(
    put,
    path = "/api/publicaciones/{id}",
    tag = "publicaciones",
    params(("id" = String, Path, description = "`publicaciones_id` of the post")),
    request_body(content(
        (PostFields = "application/json"),
        (PostFields = "application/x-www-form-urlencoded"),
    )),
    responses(
        (status = 200, description = "Update ran, whether or not a row matched", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn update_post(
    PostPath { id }: PostPath,
    State(db): State<Arc<DbClient>>,
    Body(post): Body<PostFields>,
) -> Result<Json<MessageResponse>> {
    db.update_post(&id, &post)
        .await
        .map_err(ServerError::database(Operation::UpdatePost))?;

    Ok(Json(MessageResponse::new(POST_UPDATED)))
}

#[utoipa::path(
    delete,
    path = "/api/publicaciones/{id}",
    tag = "publicaciones",
    params(("id" = String, Path, description = "`publicaciones_id` of the post")),
    responses(
        (status = 200, description = "Delete ran, whether or not a row matched", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn delete_post(
    PostPath { id }: PostPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<MessageResponse>> {
    db.delete_post(&id)
        .await
        .map_err(ServerError::database(Operation::DeletePost))?;

    Ok(Json(MessageResponse::new(POST_DELETED)))
}

#[utoipa::path(
    get,
    path = "/api/publicaciones/categorias/{categoria_id}",
    tag = "publicaciones",
    params(("categoria_id" = String, Path, description = "Category to filter on")),
    responses(
        (status = 200, description = "Posts of that category, all columns", body = [Object]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn list_posts_by_category(
    PostsByCategoryPath { categoria_id }: PostsByCategoryPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<JsonValue>>> {
    let posts = db
        .fetch_post_rows_by_category(&categoria_id)
        .await
        .map_err(ServerError::database(Operation::ListPostsByCategory))?;

    Ok(Json(posts))
}

#[utoipa::path(
    get,
    path = "/api/publicaciones/buscar/{titulo}",
    tag = "publicaciones",
    params(("titulo" = String, Path, description = "Text the title has to contain")),
    responses(
        (status = 200, description = "Matching posts, all columns", body = [Object]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn search_posts_by_title(
    PostSearchPath { titulo }: PostSearchPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<JsonValue>>> {
    let posts = db
        .search_post_rows_by_title(&titulo)
        .await
        .map_err(ServerError::database(Operation::SearchPostsByTitle))?;

    Ok(Json(posts))
}
