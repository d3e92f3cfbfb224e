use async_trait::async_trait;
use uuid::Uuid;

use crate::template::application::domain::entities::TemplateRecord;
use crate::template::application::ports::outgoing::template_repository::{
    TemplateRepository, TemplateRepositoryError, UpdateTemplateData,
};

#[derive(Debug, Clone)]
pub enum UpdateTemplateError {
    TemplateNotFound,
    Forbidden,
    RepositoryError(String),
}

/// An interface for updating an owned template
#[async_trait]
pub trait IUpdateTemplateUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        template_id: Uuid,
        data: UpdateTemplateData,
    ) -> Result<TemplateRecord, UpdateTemplateError>;
}

pub struct UpdateTemplateUseCase<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> UpdateTemplateUseCase<R>
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
impl<R> IUpdateTemplateUseCase for UpdateTemplateUseCase<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        template_id: Uuid,
        data: UpdateTemplateData,
    ) -> Result<TemplateRecord, UpdateTemplateError> {
        let existing = self
            .template_repository
            .find_by_id(template_id)
            .await
            .map_err(map_repo_err)?
            .ok_or(UpdateTemplateError::TemplateNotFound)?;

        // Mutation is owner-only, regardless of visibility.
        if !existing.is_owned_by(user_id) {
            return Err(UpdateTemplateError::Forbidden);
        }

        self.template_repository
            .update_template(template_id, data)
            .await
            .map_err(map_repo_err)
    }
}

fn map_repo_err(err: TemplateRepositoryError) -> UpdateTemplateError {
    match err {
        TemplateRepositoryError::DatabaseError(msg) => UpdateTemplateError::RepositoryError(msg),
        TemplateRepositoryError::NotFound => UpdateTemplateError::TemplateNotFound,
    }
}
