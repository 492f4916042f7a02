/// Factory: build `AuthService` from application `Config`.
///
/// The signing secret is read from config exactly once here; the service
/// holds it immutably for the rest of the process lifetime.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::AuthService;

pub fn build_auth_service(config: &Config) -> Arc<AuthService> {
    Arc::new(AuthService::new(&config.jwt_secret))
}
