/*
 * Responsibility
 * - Bookmarks の request/response DTO
 * - 公開 ID は encode 済みの値を返す (内部 ID を漏らさない)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Fields default to empty when missing so that a missing field fails
/// `validate()` with a 400 (instead of axum's own 422 rejection).
#[derive(Debug, Deserialize)]
pub struct CreateBookmarkRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    pub description: Option<String>,
}

impl CreateBookmarkRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("title is required");
        }
        if self.link.trim().is_empty() {
            return Err("link is required");
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookmarkRequest {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
}

impl UpdateBookmarkRequest {
    pub fn validate(&self) -> Result<(), &'static str> {
        if let Some(title) = &self.title
            && title.trim().is_empty()
        {
            return Err("title cannot be empty");
        }
        if let Some(link) = &self.link
            && link.trim().is_empty()
        {
            return Err("link cannot be empty");
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct BookmarkResponse {
    pub id: String, // encoded
    pub title: String,
    pub link: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_title_and_link() {
        let parsed: CreateBookmarkRequest =
            serde_json::from_str(r#"{"title":"First","link":"https://example.com"}"#).unwrap();
        assert!(parsed.validate().is_ok());

        let parsed: CreateBookmarkRequest =
            serde_json::from_str(r#"{"link":"https://example.com"}"#).unwrap();
        assert!(parsed.validate().is_err());

        let parsed: CreateBookmarkRequest = serde_json::from_str(r#"{"title":"First"}"#).unwrap();
        assert!(parsed.validate().is_err());
    }

    #[test]
    fn update_accepts_partial_bodies() {
        let parsed: UpdateBookmarkRequest = serde_json::from_str("{}").unwrap();
        assert!(parsed.validate().is_ok());

        let parsed: UpdateBookmarkRequest =
            serde_json::from_str(r#"{"description":"Test desc"}"#).unwrap();
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn update_rejects_blank_title_or_link() {
        let parsed: UpdateBookmarkRequest = serde_json::from_str(r#"{"title":"  "}"#).unwrap();
        assert!(parsed.validate().is_err());

        let parsed: UpdateBookmarkRequest = serde_json::from_str(r#"{"link":""}"#).unwrap();
        assert!(parsed.validate().is_err());
    }
}
