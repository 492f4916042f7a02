/*
 * Responsibility
 * - bookmarks テーブル向け SQLx 操作
 * - すべての読み書きが "ownerId" で絞られる (owner を跨ぐ操作は存在しない)
 * - 他人の行は「無い行」と同じ結果になる (None / rows_affected 0)
 */
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BookmarkRow {
    #[sqlx(rename = "bookmarkId")]
    pub bookmark_id: i64,

    #[sqlx(rename = "ownerId")]
    pub owner_id: Uuid,

    pub title: String,
    pub link: String,
    pub description: Option<String>,

    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn list_by_owner(db: &PgPool, owner_id: Uuid) -> Result<Vec<BookmarkRow>, RepoError> {
    let rows = sqlx::query_as::<_, BookmarkRow>(
        r#"
        SELECT
            "bookmarkId", "ownerId", title, link, description, "createdAt", "updatedAt"
        FROM bookmarks
        WHERE "ownerId" = $1
        ORDER BY "bookmarkId" DESC
        "#,
    )
    .bind(owner_id)
    .fetch_all(db)
    .await?;

    Ok(rows)
}

pub async fn create(
    db: &PgPool,
    owner_id: Uuid,
    title: &str,
    link: &str,
    description: Option<&str>,
) -> Result<BookmarkRow, RepoError> {
    let row = sqlx::query_as::<_, BookmarkRow>(
        r#"
        INSERT INTO bookmarks ("ownerId", title, link, description)
        VALUES ($1, $2, $3, $4)
        RETURNING
            "bookmarkId", "ownerId", title, link, description, "createdAt", "updatedAt"
        "#,
    )
    .bind(owner_id)
    .bind(title)
    .bind(link)
    .bind(description)
    .fetch_one(db)
    .await?;

    Ok(row)
}

pub async fn get(
    db: &PgPool,
    owner_id: Uuid,
    bookmark_id: i64,
) -> Result<Option<BookmarkRow>, RepoError> {
    let row = sqlx::query_as::<_, BookmarkRow>(
        r#"
        SELECT
            "bookmarkId", "ownerId", title, link, description, "createdAt", "updatedAt"
        FROM bookmarks
        WHERE "bookmarkId" = $1 AND "ownerId" = $2
        "#,
    )
    .bind(bookmark_id)
    .bind(owner_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    owner_id: Uuid,
    bookmark_id: i64,
    title: Option<&str>,
    link: Option<&str>,
    description: Option<&str>,
) -> Result<Option<BookmarkRow>, RepoError> {
    // None = do not update (COALESCE keeps the current value)
    let row = sqlx::query_as::<_, BookmarkRow>(
        r#"
        UPDATE bookmarks
        SET
            title = COALESCE($3, title),
            link = COALESCE($4, link),
            description = COALESCE($5, description),
            "updatedAt" = now()
        WHERE "bookmarkId" = $1 AND "ownerId" = $2
        RETURNING
            "bookmarkId", "ownerId", title, link, description, "createdAt", "updatedAt"
        "#,
    )
    .bind(bookmark_id)
    .bind(owner_id)
    .bind(title)
    .bind(link)
    .bind(description)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn delete(db: &PgPool, owner_id: Uuid, bookmark_id: i64) -> Result<bool, RepoError> {
    let result = sqlx::query(
        r#"
        DELETE FROM bookmarks
        WHERE "bookmarkId" = $1 AND "ownerId" = $2
        "#,
    )
    .bind(bookmark_id)
    .bind(owner_id)
    .execute(db)
    .await?;

    Ok(result.rows_affected() > 0)
}
