/*
 * Responsibility
 * - /auth/signup, /auth/signin handler
 * - DTO validation → password hash/verify → repo → トークン発行
 * - email 重複と認証失敗は 403 固定メッセージ (アカウントの存在有無を漏らさない)
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::dto::auth::{AuthRequest, TokenResponse},
    error::AppError,
    repos::{error::RepoError, user_repo},
    services::auth::password,
    state::AppState,
};

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let hash = password::hash(&req.password).map_err(|e| {
        tracing::error!(error = %e, "password hashing failed");
        AppError::Internal
    })?;

    // 一意制約違反は repo が Conflict として返す (driver のコードはここでは見ない)
    let row = match user_repo::create(&state.db, req.email.trim(), &hash).await {
        Ok(row) => row,
        Err(RepoError::Conflict) => return Err(AppError::forbidden("Credentials taken")),
        Err(e) => return Err(e.into()),
    };

    let access_token = issue_token(&state, &row)?;
    Ok((StatusCode::CREATED, Json(TokenResponse { access_token })))
}

pub async fn signin(
    State(state): State<AppState>,
    Json(req): Json<AuthRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    // 未登録 email と password 不一致は同一応答
    let row = user_repo::find_by_email(&state.db, req.email.trim())
        .await?
        .ok_or_else(|| AppError::forbidden("Credentials incorrect"))?;

    let pw_matches = password::verify(&row.hash, &req.password).map_err(|e| {
        tracing::error!(error = %e, "stored password hash is malformed");
        AppError::Internal
    })?;
    if !pw_matches {
        return Err(AppError::forbidden("Credentials incorrect"));
    }

    let access_token = issue_token(&state, &row)?;
    Ok(Json(TokenResponse { access_token }))
}

fn issue_token(state: &AppState, user: &user_repo::UserRow) -> Result<String, AppError> {
    state.auth.issue(user.id, &user.email).map_err(|e| {
        tracing::error!(error = %e, "failed to sign access token");
        AppError::Internal
    })
}
