//! Handlers for post CRUD endpoints.
//!
//! Each handler performs one logical unit of work against the store and
//! shapes the row into the [`PostOut`] response projection.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use postbin_core::error::CoreError;
use postbin_core::posts::{validate_list_limit, DEFAULT_LIST_LIMIT, DEFAULT_LIST_OFFSET};
use postbin_core::types::DbId;
use postbin_db::models::post::{CreatePost, PostOut, UpdatePost};
use postbin_db::repositories::PostRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter and response structs
// ---------------------------------------------------------------------------

/// Query parameters for listing posts.
#[derive(Debug, serde::Deserialize)]
pub struct ListPostsParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// Acknowledgement body for a successful delete.
#[derive(Debug, Serialize)]
pub struct DeleteAck {
    #[serde(rename = "Ok")]
    pub ok: bool,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /post/
///
/// Create a new post. The store assigns `id` and `published_at`.
pub async fn create_post(
    State(state): State<AppState>,
    Json(input): Json<CreatePost>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::create(&state.pool, &input).await?;

    tracing::info!(post_id = post.id, title = %post.title, "Post created");

    Ok(Json(PostOut::from(post)))
}

/// GET /posts/?offset=&limit=
///
/// List posts in insertion order. `limit` defaults to 100 and may not
/// exceed 100; `offset` defaults to 0 with no lower bound enforced.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> AppResult<impl IntoResponse> {
    let offset = params.offset.unwrap_or(DEFAULT_LIST_OFFSET);
    let limit = params.limit.unwrap_or(DEFAULT_LIST_LIMIT);

    validate_list_limit(limit).map_err(CoreError::Validation)?;

    let posts = PostRepo::list(&state.pool, offset, limit).await?;
    let posts: Vec<PostOut> = posts.into_iter().map(PostOut::from).collect();

    Ok(Json(posts))
}

/// GET /posts/{id}
///
/// Get a single post by ID.
pub async fn get_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let post = PostRepo::find_by_id(&state.pool, post_id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Post" })?;

    Ok(Json(PostOut::from(post)))
}

/// PATCH /posts/{id}
///
/// Partially update a post. Only fields present in the request body are
/// applied; an explicit null on `content` clears it, while an explicit
/// null on the non-nullable fields `title` and `published` is rejected.
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
    Json(input): Json<UpdatePost>,
) -> AppResult<impl IntoResponse> {
    if matches!(input.title, Some(None)) {
        return Err(AppError::Core(CoreError::Validation(
            "title must not be null".to_string(),
        )));
    }
    if matches!(input.published, Some(None)) {
        return Err(AppError::Core(CoreError::Validation(
            "published must not be null".to_string(),
        )));
    }

    let post = PostRepo::update(&state.pool, post_id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Post" })?;

    tracing::info!(post_id, "Post updated");

    Ok(Json(PostOut::from(post)))
}

/// DELETE /posts/{id}
///
/// Hard-delete a post. Irreversible.
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = PostRepo::delete(&state.pool, post_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Post" }));
    }

    tracing::info!(post_id, "Post deleted");

    Ok(Json(DeleteAck { ok: true }))
}
