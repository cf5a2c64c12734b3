use crate::model::{Id, post::PostMarker, user::UserMarker};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct CommentMarker;

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct Comment {
    #[serde(rename = "comentario_id")]
    #[schema(value_type = i64)]
    pub id: Id<CommentMarker>,
    #[serde(rename = "comentario")]
    pub text: Option<String>,
    #[serde(rename = "usuario_id")]
    #[schema(value_type = Option<i64>)]
    pub author_id: Option<Id<UserMarker>>,
    #[serde(rename = "publicacion_id")]
    #[schema(value_type = Option<i64>)]
    pub post_id: Option<Id<PostMarker>>,
}

/// A comment listed under its post, so the post id is left out.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct PartialComment {
    #[serde(rename = "comentario_id")]
    #[schema(value_type = i64)]
    pub id: Id<CommentMarker>,
    #[serde(rename = "comentario")]
    pub text: Option<String>,
    #[serde(rename = "usuario_id")]
    #[schema(value_type = Option<i64>)]
    pub author_id: Option<Id<UserMarker>>,
}

#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct CommentFields {
    #[serde(rename = "comentario")]
    pub text: Option<String>,
}
