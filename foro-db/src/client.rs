use crate::record::{CommentRecord, PartialCommentRecord, PostRecord, UserRecord};
use foro_common::model::{
    Id,
    comment::{Comment, CommentFields, PartialComment},
    post::{NewPost, Post, PostFields, PostMarker},
    user::{User, UserFields, UserMarker},
};
use serde_json::Value as JsonValue;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
    query, query_as, query_scalar,
};
use thiserror::Error;
use tracing::debug;

pub const MAX_CONNECTIONS: u32 = 10;

pub type Result<T, E = DbError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Runs the gateway's statements against a shared connection pool.
///
/// Row identifiers coming from request paths are bound as text and cast by
/// the database, so a malformed identifier fails the statement instead of
/// being rejected here. Key columns may be any integer width; they are read
/// back as `BIGINT`.
#[derive(Debug, Clone)]
pub struct DbClient {
    pool: PgPool,
}

impl DbClient {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(options: PgConnectOptions) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        Ok(Self::new(pool))
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>> {
        let records = query_as::<_, UserRecord>(
            "
            SELECT
                usuarios_id::BIGINT AS usuarios_id,
                usuarios_nombre,
                email
            FROM
                usuarios
            ORDER BY
                usuarios_id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(User::from).collect())
    }

    pub async fn fetch_user(&self, user_id: &str) -> Result<Option<User>> {
        let record = query_as::<_, UserRecord>(
            "
            SELECT
                usuarios_id::BIGINT AS usuarios_id,
                usuarios_nombre,
                email
            FROM
                usuarios
            WHERE
                usuarios_id = $1::BIGINT
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(User::from))
    }

    pub async fn create_user(&self, user: &UserFields) -> Result<Id<UserMarker>> {
        let user_id = query_scalar::<_, i64>(
            "
            INSERT INTO usuarios (usuarios_nombre, email)
            VALUES ($1, $2)
            RETURNING usuarios_id::BIGINT
            ",
        )
        .bind(user.name.as_deref())
        .bind(user.email.as_deref())
        .fetch_one(&self.pool)
        .await?;

        Ok(user_id.into())
    }

    pub async fn update_user(&self, user_id: &str, user: &UserFields) -> Result<()> {
        let result = query(
            "
            UPDATE usuarios
            SET usuarios_nombre = $1, email = $2
            WHERE usuarios_id = $3::BIGINT
            ",
        )
        .bind(user.name.as_deref())
        .bind(user.email.as_deref())
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        debug!(user_id, rows_affected = result.rows_affected(), "Updated user");
        Ok(())
    }

    pub async fn delete_user(&self, user_id: &str) -> Result<()> {
        let result = query("DELETE FROM usuarios WHERE usuarios_id = $1::BIGINT")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        debug!(user_id, rows_affected = result.rows_affected(), "Deleted user");
        Ok(())
    }

    /// Every column of every post, one JSON object per row.
    pub async fn fetch_post_rows(&self) -> Result<Vec<JsonValue>> {
        let rows = query_scalar::<_, JsonValue>(
            "
            SELECT
                to_jsonb(publicaciones)
            FROM
                publicaciones
            ORDER BY
                publicaciones_id
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn fetch_post_rows_by_category(&self, category_id: &str) -> Result<Vec<JsonValue>> {
        let rows = query_scalar::<_, JsonValue>(
            "
            SELECT
                to_jsonb(publicaciones)
            FROM
                publicaciones
            WHERE
                categoria_id = $1::BIGINT
            ORDER BY
                publicaciones_id
            ",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Posts whose title contains `title`. `%` and `_` in `title` keep their
    /// `LIKE` meaning.
    pub async fn search_post_rows_by_title(&self, title: &str) -> Result<Vec<JsonValue>> {
        let rows = query_scalar::<_, JsonValue>(
            "
            SELECT
                to_jsonb(publicaciones)
            FROM
                publicaciones
            WHERE
                titulo LIKE $1
            ORDER BY
                publicaciones_id
            ",
        )
        .bind(title_pattern(title))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn fetch_post(&self, post_id: &str) -> Result<Option<Post>> {
        let record = query_as::<_, PostRecord>(
            "
            SELECT
                publicaciones_id::BIGINT AS publicaciones_id,
                titulo,
                contenido,
                usuarios_id::BIGINT AS usuarios_id
            FROM
                publicaciones
            WHERE
                publicaciones_id = $1::BIGINT
            ",
        )
        .bind(post_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Post::from))
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Id<PostMarker>> {
        let post_id = query_scalar::<_, i64>(
            "
            INSERT INTO publicaciones (titulo, contenido, usuarios_id)
            VALUES ($1, $2, $3)
            RETURNING publicaciones_id::BIGINT
            ",
        )
        .bind(post.title.as_deref())
        .bind(post.content.as_deref())
        .bind(post.author_id.map(Id::get))
        .fetch_one(&self.pool)
        .await?;

        Ok(post_id.into())
    }

    pub async fn update_post(&self, post_id: &str, post: &PostFields) -> Result<()> {
        let result = query(
            "
            UPDATE publicaciones
            SET titulo = $1, contenido = $2
            WHERE publicaciones_id = $3::BIGINT
            ",
        )
        .bind(post.title.as_deref())
        .bind(post.content.as_deref())
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        debug!(post_id, rows_affected = result.rows_affected(), "Updated post");
        Ok(())
    }

    pub async fn delete_post(&self, post_id: &str) -> Result<()> {
        let result = query("DELETE FROM publicaciones WHERE publicaciones_id = $1::BIGINT")
            .bind(post_id)
            .execute(&self.pool)
            .await?;

        debug!(post_id, rows_affected = result.rows_affected(), "Deleted post");
        Ok(())
    }

    pub async fn fetch_post_comments(&self, post_id: &str) -> Result<Vec<PartialComment>> {
        let records = query_as::<_, PartialCommentRecord>(
            "
            SELECT
                comentario_id::BIGINT AS comentario_id,
                comentario,
                usuario_id::BIGINT AS usuario_id
            FROM
                comentarios
            WHERE
                publicacion_id = $1::BIGINT
            ORDER BY
                comentario_id
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records.into_iter().map(PartialComment::from).collect())
    }

    pub async fn fetch_comment(&self, comment_id: &str) -> Result<Option<Comment>> {
        let record = query_as::<_, CommentRecord>(
            "
            SELECT
                comentario_id::BIGINT AS comentario_id,
                comentario,
                usuario_id::BIGINT AS usuario_id,
                publicacion_id::BIGINT AS publicacion_id
            FROM
                comentarios
            WHERE
                comentario_id = $1::BIGINT
            ",
        )
        .bind(comment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record.map(Comment::from))
    }

    pub async fn update_comment(&self, comment_id: &str, comment: &CommentFields) -> Result<()> {
        let result = query(
            "
            UPDATE comentarios
            SET comentario = $1
            WHERE comentario_id = $2::BIGINT
            ",
        )
        .bind(comment.text.as_deref())
        .bind(comment_id)
        .execute(&self.pool)
        .await?;

        debug!(comment_id, rows_affected = result.rows_affected(), "Updated comment");
        Ok(())
    }

    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let result = query("DELETE FROM comentarios WHERE comentario_id = $1::BIGINT")
            .bind(comment_id)
            .execute(&self.pool)
            .await?;

        debug!(comment_id, rows_affected = result.rows_affected(), "Deleted comment");
        Ok(())
    }
}

fn title_pattern(title: &str) -> String {
    format!("%{title}%")
}
