//! Post model and its request/response projections.

use postbin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// Deserializes a present field into `Some(_)`, so that combined with
/// `#[serde(default)]` an absent field is `None`, an explicit null is
/// `Some(None)`, and a value is `Some(Some(v))`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// A row from the `post` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
    pub published: bool,
    pub published_at: Timestamp,
}

/// DTO for creating a new post.
///
/// `title` and `published` are required; `content` may be omitted or null.
/// `id` and `published_at` are assigned by the store.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub published: bool,
}

/// DTO for partially updating a post.
///
/// Every field is double-optional so the handler can tell the three cases
/// apart: field absent (`None`), field explicitly null (`Some(None)`), and
/// field set to a value (`Some(Some(v))`). Only fields present in the
/// request body are applied; an explicit null on `content` clears it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePost {
    #[serde(default, deserialize_with = "double_option")]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub content: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub published: Option<Option<bool>>,
}

/// Response projection: the only fields the API exposes.
///
/// `published` and `published_at` are persisted but intentionally absent
/// from the output surface.
#[derive(Debug, Serialize)]
pub struct PostOut {
    pub id: DbId,
    pub title: String,
    pub content: Option<String>,
}

impl From<Post> for PostOut {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
        }
    }
}
