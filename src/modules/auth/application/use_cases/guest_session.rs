use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    GuestUserData, TokenProvider, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum GuestSessionError {
    RepositoryError(String),
    TokenError(String),
}

#[derive(Debug, Clone)]
pub struct GuestSession {
    pub token: String,
    pub user: User,
}

/// An interface for creating an ephemeral guest session
#[async_trait]
pub trait IGuestSessionUseCase: Send + Sync {
    async fn execute(&self) -> Result<GuestSession, GuestSessionError>;
}

pub struct GuestSessionUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> GuestSessionUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R, token_provider: Arc<dyn TokenProvider + Send + Sync>) -> Self {
        Self {
            user_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<R> IGuestSessionUseCase for GuestSessionUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self) -> Result<GuestSession, GuestSessionError> {
        // Time-suffixed placeholder identity; uniqueness comes from the
        // millisecond timestamp, nothing durable hangs off it.
        let data = GuestUserData {
            email: format!("guest_{}@temporary.com", Utc::now().timestamp_millis()),
            name: "Guest User".to_string(),
        };

        let user = self
            .user_repository
            .insert_guest_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DatabaseError(msg) => GuestSessionError::RepositoryError(msg),
                UserRepositoryError::NotFound => {
                    GuestSessionError::RepositoryError("Unknown repo error".to_string())
                }
            })?;

        let token = self
            .token_provider
            .generate_guest_token(user.id)
            .map_err(|e| GuestSessionError::TokenError(e.to_string()))?;

        Ok(GuestSession { token, user })
    }
}
