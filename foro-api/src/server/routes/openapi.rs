use crate::server::routes::{comments, posts, users};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foro API",
        version = "0.1.0",
        description = "Users, posts and their comments, read and written straight from their tables.",
    ),
    paths(
        users::list_users,
        users::list_admin_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        posts::list_posts,
        posts::get_post,
        posts::create_post,
        posts::update_post,
        posts::delete_post,
        posts::list_posts_by_category,
        posts::search_posts_by_title,
        comments::list_post_comments,
        comments::get_comment,
        comments::update_comment,
        comments::delete_comment,
    ),
    tags(
        (name = "usuarios", description = "User accounts"),
        (name = "publicaciones", description = "Posts, by id, category or title"),
        (name = "comentarios", description = "Comments on posts. They can't be created here"),
    ),
)]
pub(super) struct ApiDoc;
