use async_trait::async_trait;
use uuid::Uuid;

use crate::generator::application::domain::template::TemplateDocument;
use crate::shared::tokens::generate_share_id;
use crate::template::application::domain::entities::{TemplateRecord, Visibility};
use crate::template::application::ports::outgoing::template_repository::{
    CreateTemplateData, TemplateRepository, TemplateRepositoryError,
};

#[derive(Debug, Clone)]
pub enum CreateTemplateError {
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct NewTemplate {
    pub name: String,
    pub description: Option<String>,
    pub document: TemplateDocument,
    pub visibility: Visibility,
}

/// An interface for saving a new template
#[async_trait]
pub trait ICreateTemplateUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: Uuid,
        template: NewTemplate,
    ) -> Result<TemplateRecord, CreateTemplateError>;
}

pub struct CreateTemplateUseCase<R>
where
    R: TemplateRepository,
{
    template_repository: R,
}

impl<R> CreateTemplateUseCase<R>
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
impl<R> ICreateTemplateUseCase for CreateTemplateUseCase<R>
where
    R: TemplateRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: Uuid,
        template: NewTemplate,
    ) -> Result<TemplateRecord, CreateTemplateError> {
        let data = CreateTemplateData {
            user_id,
            name: template.name.trim().to_string(),
            description: template.description,
            document: template.document,
            visibility: template.visibility,
            share_id: generate_share_id(),
        };

        self.template_repository
            .insert_template(data)
            .await
            .map_err(|e| match e {
                TemplateRepositoryError::DatabaseError(msg) => {
                    CreateTemplateError::RepositoryError(msg)
                }
                TemplateRepositoryError::NotFound => {
                    CreateTemplateError::RepositoryError("Unknown repo error".to_string())
                }
            })
    }
}
