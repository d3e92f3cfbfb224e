use async_trait::async_trait;
use uuid::Uuid;

use crate::template::application::domain::entities::{TemplateRecord, Visibility};
use crate::template::application::ports::outgoing::template_repository::{
    TemplateRepository, TemplateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum FetchTemplateError {
    TemplateNotFound,
    /// Private template requested by someone other than its owner.
    Forbidden,
    RepositoryError(String),
}

/// An interface for reading a single template with ownership rules
#[async_trait]
pub trait IFetchTemplateUseCase: Send + Sync {
    async fn execute(
        &self,
        requester: Uuid,
        template_id: Uuid,
    ) -> Result<TemplateRecord, FetchTemplateError>;
}

pub struct FetchTemplateUseCase<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> FetchTemplateUseCase<R>
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
impl<R> IFetchTemplateUseCase for FetchTemplateUseCase<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(
        &self,
        requester: Uuid,
        template_id: Uuid,
    ) -> Result<TemplateRecord, FetchTemplateError> {
        let template = self
            .template_repository
            .find_by_id(template_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(FetchTemplateError::TemplateNotFound)?;

        if !template.is_owned_by(requester) && template.visibility == Visibility::Private {
            return Err(FetchTemplateError::Forbidden);
        }

        Ok(template)
    }
}

fn map_repo_err(err: TemplateRepositoryError) -> FetchTemplateError {
    match err {
        TemplateRepositoryError::DatabaseError(msg) => FetchTemplateError::RepositoryError(msg),
        TemplateRepositoryError::NotFound => FetchTemplateError::TemplateNotFound,
    }
}
