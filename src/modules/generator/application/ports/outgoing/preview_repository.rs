use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum PreviewRepositoryError {
    NotFound,
    DatabaseError(String),
}

#[derive(Debug, Clone)]
pub struct NewPreviewData {
    pub template_id: Option<Uuid>,
    pub share_id: String,
    pub content: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PreviewRecord {
    pub share_id: String,
    pub content: String,
    pub views: i32,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait PreviewRepository: Send + Sync {
    async fn insert_preview(
        &self,
        data: NewPreviewData,
    ) -> Result<PreviewRecord, PreviewRepositoryError>;

    /// Fetch a live preview and bump its view counter in the same
    /// statement. Expired previews behave as absent.
    async fn find_by_share_id_counting_view(
        &self,
        share_id: &str,
    ) -> Result<PreviewRecord, PreviewRepositoryError>;
}
