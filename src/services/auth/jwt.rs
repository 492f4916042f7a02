//! Access-token issuance and verification (HS256).
//!
//! Responsibility:
//! - Sign `{sub, email, iat, exp}` claims with the process-wide secret
//! - Verify signature + expiry and resolve the caller identity
//!
//! Notes:
//! - Tokens are stateless: nothing is stored server-side, so a token stays
//!   usable until `exp` (there is no revocation list).
//! - The accepted algorithm is pinned to HS256; a token carrying any other
//!   `alg` fails verification even with the right secret.

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Fixed access-token lifetime. Not runtime-configurable.
const ACCESS_TOKEN_TTL_SECONDS: i64 = 15 * 60;

#[derive(Debug, Error)]
pub enum TokenError {
    /// Bad signature, malformed structure, wrong algorithm, or a subject
    /// that is not a UUID.
    #[error("invalid token")]
    Invalid,
    /// Structurally valid but past its expiry.
    #[error("expired token")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct AccessTokenClaims {
    sub: String,
    email: String,
    iat: i64,
    exp: i64,
}

/// 検証済みトークンから取り出した caller identity
///
/// - `user_id` はプロジェクト規約として UUID (`sub` から昇格)
/// - request の寿命を超えて保持しない
#[derive(Debug, Clone)]
pub struct VerifiedAccessToken {
    pub user_id: Uuid,
    pub email: String,
}

/// HS256 access-token issuer + verifier.
///
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Do not print key material
        f.debug_struct("AuthService")
            .field("validation", &self.validation)
            .finish()
    }
}

impl AuthService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // The token window is the only timeout; no leeway on top of it.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for `(user_id, email)` with the fixed 15 minute expiry.
    pub fn issue(
        &self,
        user_id: Uuid,
        email: &str,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + ACCESS_TOKEN_TTL_SECONDS,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Test hook: mint a token with an arbitrary lifetime (negative = already
    /// expired).
    #[cfg(test)]
    pub(crate) fn issue_with_ttl(
        &self,
        user_id: Uuid,
        email: &str,
        ttl_seconds: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + ttl_seconds,
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify signature + expiry, then resolve the identity the token was
    /// minted for.
    pub fn verify(&self, token: &str) -> Result<VerifiedAccessToken, TokenError> {
        let data = jsonwebtoken::decode::<AccessTokenClaims>(
            token,
            &self.decoding_key,
            &self.validation,
        )?;

        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)?;
        if data.claims.email.trim().is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(VerifiedAccessToken {
            user_id,
            email: data.claims.email,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-at-least-32-bytes-long!!";

    fn service() -> AuthService {
        AuthService::new(SECRET)
    }

    #[test]
    fn issue_then_verify_yields_the_same_identity() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id, "u@example.com").unwrap();
        let identity = svc.verify(&token).unwrap();

        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.email, "u@example.com");
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let svc = service();
        let token = svc
            .issue_with_ttl(Uuid::new_v4(), "u@example.com", -60)
            .unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn token_signed_with_another_secret_is_invalid() {
        let token = AuthService::new("a different secret entirely........")
            .issue(Uuid::new_v4(), "u@example.com")
            .unwrap();

        assert!(matches!(service().verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn token_signed_with_another_algorithm_is_invalid() {
        // 同じ secret でも alg が違えば受け付けない
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            sub: Uuid::new_v4().to_string(),
            email: "u@example.com".to_string(),
            iat: now,
            exp: now + 60,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(service().verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn garbage_token_is_invalid() {
        assert!(matches!(
            service().verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn non_uuid_subject_is_invalid() {
        let svc = service();
        let now = Utc::now().timestamp();
        let claims = AccessTokenClaims {
            sub: "42".to_string(),
            email: "u@example.com".to_string(),
            iat: now,
            exp: now + 60,
        };
        let token = jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(matches!(svc.verify(&token), Err(TokenError::Invalid)));
    }
}
