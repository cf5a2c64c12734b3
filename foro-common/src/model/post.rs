use crate::model::{Id, user::UserMarker};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct PostMarker;

/// A row of `publicaciones` as returned by `GET /publicaciones/{id}`.
///
/// Listing endpoints return every column instead, see
/// `DbClient::fetch_post_rows`.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct Post {
    #[serde(rename = "publicaciones_id")]
    #[schema(value_type = i64)]
    pub id: Id<PostMarker>,
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "contenido")]
    pub content: Option<String>,
    #[serde(rename = "usuarios_id")]
    #[schema(value_type = Option<i64>)]
    pub author_id: Option<Id<UserMarker>>,
}

/// Body of `POST /publicaciones`.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct NewPost {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "contenido")]
    pub content: Option<String>,
    #[serde(rename = "usuariosId")]
    #[schema(value_type = Option<i64>)]
    pub author_id: Option<Id<UserMarker>>,
}

/// Body of `PUT /publicaciones/{id}`. The author can't be changed.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct PostFields {
    #[serde(rename = "titulo")]
    pub title: Option<String>,
    #[serde(rename = "contenido")]
    pub content: Option<String>,
}
