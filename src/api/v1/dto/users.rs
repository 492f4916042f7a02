/*
 * Responsibility
 * - Users の request/response DTO
 * - response に hash を含めない (UserRow から詰め替える)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::v1::dto::auth::is_valid_email;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateUserRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(email) = &self.email
            && !is_valid_email(email.trim())
        {
            return Err("email must be a valid email address");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_update_is_allowed() {
        let parsed: UpdateUserRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let parsed: UpdateUserRequest = serde_json::from_str(r#"{"email":"nope"}"#).unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn name_only_update_is_allowed() {
        let parsed: UpdateUserRequest =
            serde_json::from_str(r#"{"first_name":"tf","last_name":"tl"}"#).unwrap();
        assert!(parsed.validate().is_ok());
    }
}
