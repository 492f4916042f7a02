/*
 * Responsibility
 * - /users 系 handler (自分自身のアカウントのみ)
 * - 対象の user は常に AuthCtx の user_id。Path から他人の id は受け取らない
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::dto::users::{UpdateUserRequest, UserResponse},
    api::v1::extractors::AuthCtxExtractor,
    error::AppError,
    repos::{error::RepoError, user_repo},
    state::AppState,
};

fn row_to_response(row: user_repo::UserRow) -> UserResponse {
    UserResponse {
        id: row.id,
        email: row.email,
        first_name: row.first_name,
        last_name: row.last_name,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

pub async fn get_me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<UserResponse>, AppError> {
    let row = user_repo::get(&state.db, ctx.user_id)
        .await?
        .ok_or(AppError::not_found("user"))?;

    Ok(Json(row_to_response(row)))
}

pub async fn update_me(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let email = req.email.as_deref().map(str::trim);

    let row = match user_repo::update(
        &state.db,
        ctx.user_id,
        email,
        req.first_name.as_deref(),
        req.last_name.as_deref(),
    )
    .await
    {
        Ok(row) => row,
        // 変更後 email が他アカウントと衝突
        Err(RepoError::Conflict) => return Err(AppError::forbidden("Credentials taken")),
        Err(e) => return Err(e.into()),
    }
    .ok_or(AppError::not_found("user"))?;

    Ok(Json(row_to_response(row)))
}
