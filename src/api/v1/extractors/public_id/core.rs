/*
 * Responsibility
 * - Path の String を公開 ID として受け、内部 ID (i64) へ復号する extractor
 * - sqids codec (services/id_codec) を使った decode
 * - 失敗時は AppError::BadRequest へ変換 (存在しない id の 404 とは別物)
 *
 * 置くもの
 *  - PublicId<T> の定義（ジェネリック本体）
 *  - impl FromRequestParts<AppState> for PublicId<T>
 * 置かないもの
 *  - Bookmark といった具体リソース名 (types.rs 側)
 */
use std::marker::PhantomData;

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Clone, Copy)]
pub struct PublicId<T> {
    pub id: i64,
    _marker: PhantomData<T>,
}

impl<T> PublicId<T> {
    fn new(id: i64) -> Self {
        Self {
            id,
            _marker: PhantomData,
        }
    }
}

impl<T> FromRequestParts<AppState> for PublicId<T>
where
    T: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Path(public_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::bad_request("INVALID_PUBLIC_ID", "invalid id"))?;

        let id = state.id_codec.decode(&public_id)?;
        Ok(Self::new(id))
    }
}

impl<T> std::fmt::Debug for PublicId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublicId").field("id", &self.id).finish()
    }
}
