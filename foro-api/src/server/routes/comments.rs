use crate::server::{
    ErrorResponse, Result, ServerError, ServerRouter,
    body::Body,
    json::Json,
    operation::{Operation, Resource},
    routes::MessageResponse,
};
use axum::extract::State;
use axum_extra::routing::{RouterExt, TypedPath};
use foro_common::model::comment::{Comment, CommentFields, PartialComment};
use foro_db::client::DbClient;
use serde::Deserialize;
use std::sync::Arc;

const COMMENT_UPDATED: &str = "Comentario actualizado correctamente";
const COMMENT_DELETED: &str = "Comentario eliminado correctamente";

// There is no route for creating comments.
pub fn routes() -> ServerRouter {
    ServerRouter::new()
        .typed_get(list_post_comments)
        .typed_get(get_comment)
        .typed_put(update_comment)
        .typed_delete(delete_comment)
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/publicaciones/{id}/comentarios", rejection(ServerError))]
pub(super) struct PostCommentsPath {
    id: String,
}

#[derive(TypedPath, Deserialize)]
#[typed_path("/comentarios/{id}", rejection(ServerError))]
pub(super) struct CommentPath {
    id: String,
}

#[utoipa::path(
    get,
    path = "/api/publicaciones/{id}/comentarios",
    tag = "comentarios",
    params(("id" = String, Path, description = "`publicaciones_id` of the post")),
    responses(
        (status = 200, description = "Comments of the post, possibly none", body = [PartialComment]),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn list_post_comments(
    PostCommentsPath { id }: PostCommentsPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Vec<PartialComment>>> {
    let comments = db
        .fetch_post_comments(&id)
        .await
        .map_err(ServerError::database(Operation::ListPostComments))?;

    Ok(Json(comments))
}

#[utoipa::path(
    get,
    path = "/api/comentarios/{id}",
    tag = "comentarios",
    params(("id" = String, Path, description = "`comentario_id` of the comment")),
    responses(
        (status = 200, description = "The comment", body = Comment),
        (status = 404, description = "No such comment", body = ErrorResponse),
        (status = 500, description = "Storage failure, including a non-numeric id", body = ErrorResponse),
    ),
)]
pub(super) async fn get_comment(
    CommentPath { id }: CommentPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<Comment>> {
    let comment = db
        .fetch_comment(&id)
        .await
        .map_err(ServerError::database(Operation::GetComment))?
        .ok_or_else(|| ServerError::not_found(Resource::Comment, id))?;

    Ok(Json(comment))
}

#[utoipa::path(
    put,
    path = "/api/comentarios/{id}",
    tag = "comentarios",
    params(("id" = String, Path, description = "`comentario_id` of the comment")),
    request_body(content(
        (CommentFields = "application/json"),
        (CommentFields = "application/x-www-form-urlencoded"),
    )),
    responses(
        (status = 200, description = "Update ran, whether or not a row matched", body = MessageResponse),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn update_comment(
    CommentPath { id }: CommentPath,
    State(db): State<Arc<DbClient>>,
    Body(comment): Body<CommentFields>,
) -> Result<Json<MessageResponse>> {
    db.update_comment(&id, &comment)
        .await
        .map_err(ServerError::database(Operation::UpdateComment))?;

    Ok(Json(MessageResponse::new(COMMENT_UPDATED)))
}

#[utoipa::path(
    delete,
    path = "/api/comentarios/{id}",
    tag = "comentarios",
    params(("id" = String, Path, description = "`comentario_id` of the comment")),
    responses(
        (status = 200, description = "Delete ran, whether or not a row matched", body = MessageResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    ),
)]
pub(super) async fn delete_comment(
    CommentPath { id }: CommentPath,
    State(db): State<Arc<DbClient>>,
) -> Result<Json<MessageResponse>> {
    db.delete_comment(&id)
        .await
        .map_err(ServerError::database(Operation::DeleteComment))?;

    Ok(Json(MessageResponse::new(COMMENT_DELETED)))
}
