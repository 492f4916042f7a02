/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - トークンの検証ロジックは middleware/services 側の責務
 * - request の寿命と一緒に破棄される。request を跨いで cache しない
 */

use uuid::Uuid;

/// 認証済みのリクエストに付与されるコンテキスト
///
/// - `user_id` は内部ユーザーID (UUID、トークンの `sub` 由来)
/// - `email` はトークンに入っている login identifier
#[derive(Debug, Clone)]
pub struct AuthCtx {
    pub user_id: Uuid,
    pub email: String,
}

impl AuthCtx {
    pub fn new(user_id: Uuid, email: String) -> Self {
        Self { user_id, email }
    }
}
