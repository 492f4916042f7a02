/*
 * Responsibility
 * - /bookmark 系 CRUD handler
 * - Path の :id は公開 ID → extractor で復号して内部 ID として受け取る
 * - repo 呼び出しは常に AuthCtx の user_id で絞る。
 *   他人の bookmark は 404 になる (存在の有無を区別させない)
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::dto::bookmarks::{BookmarkResponse, CreateBookmarkRequest, UpdateBookmarkRequest},
    api::v1::extractors::{AuthCtxExtractor, public_id::PublicBookmarkId},
    error::AppError,
    repos::bookmark_repo,
    state::AppState,
};

fn row_to_response(
    state: &AppState,
    row: bookmark_repo::BookmarkRow,
) -> Result<BookmarkResponse, AppError> {
    let public_id = state.id_codec.encode(row.bookmark_id)?;

    Ok(BookmarkResponse {
        id: public_id,
        title: row.title,
        link: row.link,
        description: row.description,
        owner_id: row.owner_id,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

pub async fn list_bookmarks(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
) -> Result<Json<Vec<BookmarkResponse>>, AppError> {
    let rows = bookmark_repo::list_by_owner(&state.db, ctx.user_id).await?;

    let mut res = Vec::with_capacity(rows.len());
    for row in rows {
        res.push(row_to_response(&state, row)?);
    }

    Ok(Json(res))
}

pub async fn create_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    Json(req): Json<CreateBookmarkRequest>,
) -> Result<(StatusCode, Json<BookmarkResponse>), AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let row = bookmark_repo::create(
        &state.db,
        ctx.user_id,
        req.title.trim(),
        req.link.trim(),
        req.description.as_deref(),
    )
    .await?;

    let res = row_to_response(&state, row)?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    bookmark_id: PublicBookmarkId,
) -> Result<Json<BookmarkResponse>, AppError> {
    let row = bookmark_repo::get(&state.db, ctx.user_id, bookmark_id.id)
        .await?
        .ok_or(AppError::not_found("bookmark"))?;

    Ok(Json(row_to_response(&state, row)?))
}

pub async fn update_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    bookmark_id: PublicBookmarkId,
    Json(req): Json<UpdateBookmarkRequest>,
) -> Result<Json<BookmarkResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::bad_request("VALIDATION", msg))?;

    let row = bookmark_repo::update(
        &state.db,
        ctx.user_id,
        bookmark_id.id,
        req.title.as_deref(),
        req.link.as_deref(),
        req.description.as_deref(),
    )
    .await?
    .ok_or(AppError::not_found("bookmark"))?;

    Ok(Json(row_to_response(&state, row)?))
}

pub async fn delete_bookmark(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    bookmark_id: PublicBookmarkId,
) -> Result<StatusCode, AppError> {
    let deleted = bookmark_repo::delete(&state.db, ctx.user_id, bookmark_id.id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("bookmark"))
    }
}
