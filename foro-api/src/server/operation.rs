use std::fmt::{Display, Formatter};

/// A single gateway statement, used to label storage failures.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Operation {
    ListUsers,
    GetUser,
    CreateUser,
    UpdateUser,
    DeleteUser,
    ListPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
    ListPostsByCategory,
    SearchPostsByTitle,
    ListPostComments,
    GetComment,
    UpdateComment,
    DeleteComment,
}

impl Operation {
    /// The message sent to the client when the statement fails.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListUsers => "Error al obtener usuarios",
            Operation::GetUser => "Error al obtener usuario",
            Operation::CreateUser => "Error al crear usuario",
            Operation::UpdateUser => "Error al actualizar datos de usuario",
            Operation::DeleteUser => "Error al eliminar cuenta de usuario",
            Operation::ListPosts => "Error al obtener publicaciones",
            Operation::GetPost => "Error al obtener publicación",
            Operation::CreatePost => "Error al crear la publicación",
            Operation::UpdatePost => "Error al actualizar la publicación",
            Operation::DeletePost => "Error al eliminar la publicación",
            Operation::ListPostsByCategory => "Error al obtener publicaciones por categoría",
            Operation::SearchPostsByTitle => "Error al buscar publicaciones por título",
            Operation::ListPostComments => "Error al obtener comentarios de la publicación",
            Operation::GetComment => "Error al obtener comentario",
            Operation::UpdateComment => "Error al actualizar el comentario",
            Operation::DeleteComment => "Error al eliminar el comentario",
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let description = match self {
            Operation::ListUsers => "listing users",
            Operation::GetUser => "fetching a user",
            Operation::CreateUser => "creating a user",
            Operation::UpdateUser => "updating a user",
            Operation::DeleteUser => "deleting a user",
            Operation::ListPosts => "listing posts",
            Operation::GetPost => "fetching a post",
            Operation::CreatePost => "creating a post",
            Operation::UpdatePost => "updating a post",
            Operation::DeletePost => "deleting a post",
            Operation::ListPostsByCategory => "listing posts by category",
            Operation::SearchPostsByTitle => "searching posts by title",
            Operation::ListPostComments => "listing the comments of a post",
            Operation::GetComment => "fetching a comment",
            Operation::UpdateComment => "updating a comment",
            Operation::DeleteComment => "deleting a comment",
        };

        f.write_str(description)
    }
}

/// The kind of row a single-row lookup was looking for.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Resource {
    User,
    Post,
    Comment,
}

impl Resource {
    #[must_use]
    pub fn not_found_message(self) -> &'static str {
        match self {
            Resource::User => "Usuario no encontrado",
            Resource::Post => "Publicación no encontrada",
            Resource::Comment => "Comentario no encontrado",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Resource::User => "User",
            Resource::Post => "Post",
            Resource::Comment => "Comment",
        })
    }
}
