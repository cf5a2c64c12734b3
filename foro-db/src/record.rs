use foro_common::model::{
    comment::{Comment, PartialComment},
    post::Post,
    user::User,
};
use sqlx::FromRow;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct UserRecord {
    pub usuarios_id: i64,
    pub usuarios_nombre: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct PostRecord {
    pub publicaciones_id: i64,
    pub titulo: Option<String>,
    pub contenido: Option<String>,
    pub usuarios_id: Option<i64>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct CommentRecord {
    pub comentario_id: i64,
    pub comentario: Option<String>,
    pub usuario_id: Option<i64>,
    pub publicacion_id: Option<i64>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, FromRow)]
pub(crate) struct PartialCommentRecord {
    pub comentario_id: i64,
    pub comentario: Option<String>,
    pub usuario_id: Option<i64>,
}

impl From<UserRecord> for User {
    fn from(value: UserRecord) -> Self {
        Self {
            id: value.usuarios_id.into(),
            name: value.usuarios_nombre,
            email: value.email,
        }
    }
}

impl From<PostRecord> for Post {
    fn from(value: PostRecord) -> Self {
        Self {
            id: value.publicaciones_id.into(),
            title: value.titulo,
            content: value.contenido,
            author_id: value.usuarios_id.map(Into::into),
        }
    }
}

impl From<CommentRecord> for Comment {
    fn from(value: CommentRecord) -> Self {
        Self {
            id: value.comentario_id.into(),
            text: value.comentario,
            author_id: value.usuario_id.map(Into::into),
            post_id: value.publicacion_id.map(Into::into),
        }
    }
}

impl From<PartialCommentRecord> for PartialComment {
    fn from(value: PartialCommentRecord) -> Self {
        Self {
            id: value.comentario_id.into(),
            text: value.comentario,
            author_id: value.usuario_id.map(Into::into),
        }
    }
}
