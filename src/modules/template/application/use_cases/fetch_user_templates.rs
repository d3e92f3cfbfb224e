use async_trait::async_trait;
use uuid::Uuid;

use crate::template::application::domain::entities::TemplateRecord;
use crate::template::application::ports::outgoing::template_repository::{
    TemplateRepository, TemplateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum FetchUserTemplatesError {
    RepositoryError(String),
}

/// An interface for listing the caller's templates
#[async_trait]
pub trait IFetchUserTemplatesUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid) -> Result<Vec<TemplateRecord>, FetchUserTemplatesError>;
}

pub struct FetchUserTemplatesUseCase<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> FetchUserTemplatesUseCase<R>
where
    R: TemplateRepository,
{
    pub fn new(template_repository: R) -> Self {
        Self {
            template_repository,
        }
    }
}

#[async_trait]
impl<R> IFetchUserTemplatesUseCase for FetchUserTemplatesUseCase<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid) -> Result<Vec<TemplateRecord>, FetchUserTemplatesError> {
        self.template_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| match e {
                TemplateRepositoryError::DatabaseError(msg) => {
                    FetchUserTemplatesError::RepositoryError(msg)
                }
                TemplateRepositoryError::NotFound => {
                    FetchUserTemplatesError::RepositoryError("Unknown repo error".to_string())
                }
            })
    }
}
