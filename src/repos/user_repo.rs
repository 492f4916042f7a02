/*
 * Responsibility
 * - users テーブル向け SQLx 操作
 * - PgPool を受け取り CRUD を提供
 * - email の一意制約違反は RepoError::Conflict として返す
 */
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::RepoError;

#[derive(Debug, FromRow)]
pub struct UserRow {
    #[sqlx(rename = "userId")]
    pub id: Uuid,
    pub email: String,
    // Argon2id PHC string. Never serialized into a response.
    pub hash: String,
    #[sqlx(rename = "firstName")]
    pub first_name: Option<String>,
    #[sqlx(rename = "lastName")]
    pub last_name: Option<String>,
    #[sqlx(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[sqlx(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

pub async fn create(db: &PgPool, email: &str, hash: &str) -> Result<UserRow, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        INSERT INTO users (email, hash)
        VALUES ($1, $2)
        RETURNING "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        "#,
    )
    .bind(email)
    .bind(hash)
    .fetch_one(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}

pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        FROM users
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn get(db: &PgPool, user_id: Uuid) -> Result<Option<UserRow>, RepoError> {
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        SELECT "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        FROM users
        WHERE "userId" = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn update(
    db: &PgPool,
    user_id: Uuid,
    email: Option<&str>,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<Option<UserRow>, RepoError> {
    // None = do not update (COALESCE keeps the current value)
    let row = sqlx::query_as::<_, UserRow>(
        r#"
        UPDATE users
        SET
            email = COALESCE($2, email),
            "firstName" = COALESCE($3, "firstName"),
            "lastName" = COALESCE($4, "lastName"),
            "updatedAt" = now()
        WHERE "userId" = $1
        RETURNING "userId", email, hash, "firstName", "lastName", "createdAt", "updatedAt"
        "#,
    )
    .bind(user_id)
    .bind(email)
    .bind(first_name)
    .bind(last_name)
    .fetch_optional(db)
    .await
    .map_err(RepoError::from_sqlx)?;

    Ok(row)
}
