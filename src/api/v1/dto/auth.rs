/*
 * Responsibility
 * - 認証系 (signup/signin) の request/response DTO
 * - validation (形式チェック) 用の validate() を持つ
 */
use serde::{Deserialize, Serialize};

/// Loose email shape check: `local@domain` with a dotted domain.
/// 厳密な RFC 準拠チェックはしない。
pub(crate) fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

/// Shared body for `/auth/signup` and `/auth/signin`.
///
/// Fields default to empty when missing so that a missing field fails
/// `validate()` with a 400 (instead of axum's own 422 rejection).
#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

impl AuthRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email is required");
        }
        if !is_valid_email(email) {
            return Err("email must be a valid email address");
        }
        if self.password.is_empty() {
            return Err("password is required");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(email: &str, password: &str) -> AuthRequest {
        AuthRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(req("u@x.com", "pw").validate().is_ok());
    }

    #[test]
    fn missing_fields_deserialize_empty_and_fail_validation() {
        let parsed: AuthRequest = serde_json::from_str(r#"{"password":"pw"}"#).unwrap();
        assert!(parsed.validate().is_err());

        let parsed: AuthRequest = serde_json::from_str(r#"{"email":"u@x.com"}"#).unwrap();
        assert!(parsed.validate().is_err());

        let parsed: AuthRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn email_shape_is_checked() {
        assert!(req("", "pw").validate().is_err());
        assert!(req("no-at-sign", "pw").validate().is_err());
        assert!(req("@x.com", "pw").validate().is_err());
        assert!(req("u@", "pw").validate().is_err());
        assert!(req("u@nodot", "pw").validate().is_err());
        assert!(req("u@.com", "pw").validate().is_err());
        assert!(req("u @x.com", "pw").validate().is_err());
    }

    #[test]
    fn empty_password_is_rejected() {
        assert!(req("u@x.com", "").validate().is_err());
    }
}
