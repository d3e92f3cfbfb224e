use async_trait::async_trait;
use uuid::Uuid;

use crate::template::application::ports::outgoing::template_repository::{
    TemplateRepository, TemplateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum DeleteTemplateError {
    TemplateNotFound,
    Forbidden,
    RepositoryError(String),
}

/// An interface for deleting an owned template
#[async_trait]
pub trait IDeleteTemplateUseCase: Send + Sync {
    async fn execute(&self, user_id: Uuid, template_id: Uuid) -> Result<(), DeleteTemplateError>;
}

pub struct DeleteTemplateUseCase<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> DeleteTemplateUseCase<R>
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
impl<R> IDeleteTemplateUseCase for DeleteTemplateUseCase<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(&self, user_id: Uuid, template_id: Uuid) -> Result<(), DeleteTemplateError> {
        let existing = self
            .template_repository
            .find_by_id(template_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(DeleteTemplateError::TemplateNotFound)?;

        if !existing.is_owned_by(user_id) {
            return Err(DeleteTemplateError::Forbidden);
        }

        self.template_repository
            .delete_template(template_id)
            .await
            .map_err(map_repo_err)
    }
}

fn map_repo_err(err: TemplateRepositoryError) -> DeleteTemplateError {
    match err {
        TemplateRepositoryError::DatabaseError(msg) => DeleteTemplateError::RepositoryError(msg),
        TemplateRepositoryError::NotFound => DeleteTemplateError::TemplateNotFound,
    }
}
