/*
 * Responsibility
 * - URL 構造を定義
 * - /health, /auth は公開。/users, /bookmark は Bearer 必須
 * - Bearer が必要な範囲は middleware::auth::access::apply で囲う
 */
use axum::{
    Router,
    routing::{get, patch, post},
};

use crate::api::v1::handlers::{
    auth::{signin, signup},
    bookmarks::{
        create_bookmark, delete_bookmark, get_bookmark, list_bookmarks, update_bookmark,
    },
    health::health,
    users::{get_me, update_me},
};
use crate::middleware;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/users/me", get(get_me))
        .route("/users", patch(update_me))
        .route("/bookmark", get(list_bookmarks).post(create_bookmark))
        .route(
            "/bookmark/{bookmark_id}",
            get(get_bookmark).patch(update_bookmark).delete(delete_bookmark),
        );
    let protected = middleware::auth::access::apply(protected, state);

    Router::new()
        .route("/health", get(health))
        .route("/auth/signup", post(signup))
        .route("/auth/signin", post(signin))
        .merge(protected)
}
