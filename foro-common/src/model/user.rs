use crate::model::Id;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Default, Hash)]
pub struct UserMarker;

/// A row of `usuarios`, restricted to the columns the API exposes.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct User {
    #[serde(rename = "usuarios_id")]
    #[schema(value_type = i64)]
    pub id: Id<UserMarker>,
    #[serde(rename = "usuarios_nombre")]
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Body of `POST /users` and `PUT /users/{id}`.
///
/// Missing fields stay `None` and are written as `NULL`; the table's own
/// constraints decide whether that is acceptable.
#[derive(Clone, Eq, PartialEq, Debug, Default, Hash, Deserialize, Serialize, ToSchema)]
pub struct UserFields {
    #[serde(rename = "usuariosNombre")]
    pub name: Option<String>,
    pub email: Option<String>,
}
