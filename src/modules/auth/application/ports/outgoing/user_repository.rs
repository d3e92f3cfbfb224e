use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;

#[derive(Debug, Clone)]
pub enum UserRepositoryError {
    NotFound,
    DatabaseError(String),
}

/// Profile snapshot taken from the OAuth provider at login time.
/// Re-logins refresh the stored profile with these values.
#[derive(Debug, Clone)]
pub struct GithubUserData {
    pub github_id: i64,
    pub username: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GuestUserData {
    pub email: String,
    pub name: String,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn upsert_github_user(&self, data: GithubUserData) -> Result<User, UserRepositoryError>;
    async fn insert_guest_user(&self, data: GuestUserData) -> Result<User, UserRepositoryError>;
    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError>;
}
