//! Route definitions for the posts API.
//!
//! The collection paths keep their trailing slashes; `/post/` (create) and
//! `/posts/` (list) are distinct routes from `/posts/{id}`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::posts;
use crate::state::AppState;

/// Post routes.
///
/// ```text
/// POST   /post/        -> create_post
/// GET    /posts/       -> list_posts (?offset, ?limit)
/// GET    /posts/{id}   -> get_post
/// PATCH  /posts/{id}   -> update_post
/// DELETE /posts/{id}   -> delete_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/post/", post(posts::create_post))
        .route("/posts/", get(posts::list_posts))
        .route(
            "/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
}
