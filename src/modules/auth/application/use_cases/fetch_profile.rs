use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    UserNotFound,
    RepositoryError(String),
}

/// An interface for loading the authenticated user's profile
#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError>;
}

pub struct FetchProfileUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> FetchProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IFetchProfileUseCase for FetchProfileUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<User, FetchProfileError> {
        let user = self
            .user_repository
            .find_by_id(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::DatabaseError(msg) => FetchProfileError::RepositoryError(msg),
                UserRepositoryError::NotFound => FetchProfileError::UserNotFound,
            })?;

        user.ok_or(FetchProfileError::UserNotFound)
    }
}
