use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A local account. Real users are backed by a GitHub identity; guest
/// accounts are ephemeral placeholders with no `github_id`.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub github_id: Option<i64>,
    pub email: String,
    pub name: String,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub is_guest: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
