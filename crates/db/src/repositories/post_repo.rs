//! Repository for the `post` table.

use sqlx::PgPool;

use postbin_core::types::DbId;

use crate::models::post::{CreatePost, Post, UpdatePost};

/// Column list for post queries.
const COLUMNS: &str = "id, title, content, published, published_at";

/// Provides CRUD operations for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the persisted row with its generated
    /// id and store-computed defaults.
    pub async fn create(pool: &PgPool, input: &CreatePost) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO post (title, content, published)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.published)
            .fetch_one(pool)
            .await
    }

    /// List posts in insertion order, skipping `offset` rows and returning
    /// at most `limit` rows.
    ///
    /// Bounds checking belongs to the caller; out-of-range values are
    /// passed through and surface as store errors.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM post ORDER BY id ASC OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Post>(&query)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM post WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Partially update a post by ID, returning the updated row, or `None`
    /// if no row matches.
    ///
    /// Runs read-merge-write-reread inside one transaction: the current row
    /// is fetched, only the fields present in `input` are merged onto it
    /// (an explicit null on `content` clears the column), and all columns
    /// are written back. Returning early rolls the transaction back.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePost,
    ) -> Result<Option<Post>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM post WHERE id = $1");
        let Some(current) = sqlx::query_as::<_, Post>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let title = match &input.title {
            Some(Some(title)) => title.clone(),
            _ => current.title,
        };
        let content = match &input.content {
            Some(content) => content.clone(),
            None => current.content,
        };
        let published = match input.published {
            Some(Some(published)) => published,
            _ => current.published,
        };

        let update = format!(
            "UPDATE post SET title = $2, content = $3, published = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Post>(&update)
            .bind(id)
            .bind(&title)
            .bind(&content)
            .bind(published)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Hard-delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM post WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
