pub mod factory;
pub mod jwt;
pub mod password;

pub use factory::build_auth_service;
pub use jwt::AuthService;
