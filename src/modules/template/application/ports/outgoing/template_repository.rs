use async_trait::async_trait;
use uuid::Uuid;

use crate::generator::application::domain::template::{
    Customization, Sections, TemplateDocument, Theme,
};
use crate::template::application::domain::entities::{TemplateRecord, Visibility};

#[derive(Debug, Clone)]
pub enum TemplateRepositoryError {
    NotFound,
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct CreateTemplateData {
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub document: TemplateDocument,
    pub visibility: Visibility,
    pub share_id: String,
}

/// Field-wise replacement; absent fields keep their stored values.
#[derive(Debug, Clone, Default)]
pub struct UpdateTemplateData {
    pub name: Option<String>,
    pub description: Option<String>,
    pub sections: Option<Sections>,
    pub theme: Option<Theme>,
    pub customization: Option<Customization>,
    pub visibility: Option<Visibility>,
}

#[async_trait]
pub trait TemplateRepository: Send + Sync {
    async fn insert_template(
        &self,
        data: CreateTemplateData,
    ) -> Result<TemplateRecord, TemplateRepositoryError>;

    async fn find_by_id(
        &self,
        template_id: Uuid,
    ) -> Result<Option<TemplateRecord>, TemplateRepositoryError>;

    /// Newest-updated first.
    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TemplateRecord>, TemplateRepositoryError>;

    async fn update_template(
        &self,
        template_id: Uuid,
        data: UpdateTemplateData,
    ) -> Result<TemplateRecord, TemplateRepositoryError>;

    async fn delete_template(&self, template_id: Uuid) -> Result<(), TemplateRepositoryError>;

    async fn find_by_share_id(
        &self,
        share_id: &str,
    ) -> Result<Option<TemplateRecord>, TemplateRepositoryError>;

    /// Bump the view counter and return the updated record.
    async fn increment_views(
        &self,
        template_id: Uuid,
    ) -> Result<TemplateRecord, TemplateRepositoryError>;
}
