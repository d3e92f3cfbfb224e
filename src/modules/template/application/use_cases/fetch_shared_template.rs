use async_trait::async_trait;

use crate::template::application::domain::entities::{TemplateRecord, Visibility};
use crate::template::application::ports::outgoing::template_repository::{
    TemplateRepository, TemplateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum FetchSharedTemplateError {
    TemplateNotFound,
    TemplateIsPrivate,
    RepositoryError(String),
}

/// An interface for resolving a public share link
#[async_trait]
pub trait IFetchSharedTemplateUseCase: Send + Sync {
    async fn execute(&self, share_id: &str) -> Result<TemplateRecord, FetchSharedTemplateError>;
}

pub struct FetchSharedTemplateUseCase<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> FetchSharedTemplateUseCase<R>
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
impl<R> IFetchSharedTemplateUseCase for FetchSharedTemplateUseCase<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(&self, share_id: &str) -> Result<TemplateRecord, FetchSharedTemplateError> {
        let template = self
            .template_repository
            .find_by_share_id(share_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(FetchSharedTemplateError::TemplateNotFound)?;

        // Private templates are invisible through the share link and do
        // not accrue views.
        if template.visibility == Visibility::Private {
            return Err(FetchSharedTemplateError::TemplateIsPrivate);
        }

        self.template_repository
            .increment_views(template.id)
            .await
            .map_err(map_repo_err)
    }
}

fn map_repo_err(err: TemplateRepositoryError) -> FetchSharedTemplateError {
    match err {
        TemplateRepositoryError::DatabaseError(msg) => {
            FetchSharedTemplateError::RepositoryError(msg)
        }
        TemplateRepositoryError::NotFound => FetchSharedTemplateError::TemplateNotFound,
    }
}
