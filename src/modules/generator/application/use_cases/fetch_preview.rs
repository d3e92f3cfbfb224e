use async_trait::async_trait;

use crate::generator::application::ports::outgoing::preview_repository::{
    PreviewRecord, PreviewRepository, PreviewRepositoryError,
};

#[derive(Debug, Clone)]
pub enum FetchPreviewError {
    PreviewNotFound,
    RepositoryError(String),
}

/// An interface for reading a shared preview by its share id
#[async_trait]
pub trait IFetchPreviewUseCase: Send + Sync {
    async fn execute(&self, share_id: &str) -> Result<PreviewRecord, FetchPreviewError>;
}

pub struct FetchPreviewUseCase<R>
where
    R: PreviewRepository,
{
    preview_repository: R,
}

impl<R> FetchPreviewUseCase<R>
where
    R: PreviewRepository,
{
    pub fn new(preview_repository: R) -> Self {
        Self { preview_repository }
    }
}

#[async_trait]
impl<R> IFetchPreviewUseCase for FetchPreviewUseCase<R>
where
    R: PreviewRepository + Send + Sync,
{
    async fn execute(&self, share_id: &str) -> Result<PreviewRecord, FetchPreviewError> {
        self.preview_repository
            .find_by_share_id_counting_view(share_id)
            .await
            .map_err(|e| match e {
                PreviewRepositoryError::NotFound => FetchPreviewError::PreviewNotFound,
                PreviewRepositoryError::DatabaseError(msg) => {
                    FetchPreviewError::RepositoryError(msg)
                }
            })
    }
}
