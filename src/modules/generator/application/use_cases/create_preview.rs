use async_trait::async_trait;
use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::generator::application::ports::outgoing::preview_repository::{
    NewPreviewData, PreviewRepository, PreviewRepositoryError,
};
use crate::shared::tokens::generate_share_id;

pub const PREVIEW_TTL_DAYS: i64 = 30;

#[derive(Debug, Clone)]
pub enum CreatePreviewError {
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct CreatedPreview {
    pub share_id: String,
}

/// An interface for persisting a shareable preview snapshot
#[async_trait]
pub trait ICreatePreviewUseCase: Send + Sync {
    async fn execute(
        &self,
        template_id: Option<Uuid>,
        markdown: String,
    ) -> Result<CreatedPreview, CreatePreviewError>;
}

pub struct CreatePreviewUseCase<R>
where
    R: PreviewRepository,
{
    preview_repository: R,
}

impl<R> CreatePreviewUseCase<R>
where
    R: PreviewRepository,
{
    pub fn new(preview_repository: R) -> Self {
        Self { preview_repository }
    }
}

#[async_trait]
impl<R> ICreatePreviewUseCase for CreatePreviewUseCase<R>
where
    R: PreviewRepository + Send + Sync,
{
    async fn execute(
        &self,
        template_id: Option<Uuid>,
        markdown: String,
    ) -> Result<CreatedPreview, CreatePreviewError> {
        let data = NewPreviewData {
            template_id,
            share_id: generate_share_id(),
            content: markdown,
            expires_at: Utc::now() + Duration::days(PREVIEW_TTL_DAYS),
        };

        let record = self
            .preview_repository
            .insert_preview(data)
            .await
            .map_err(|e| match e {
                PreviewRepositoryError::DatabaseError(msg) => {
                    CreatePreviewError::RepositoryError(msg)
                }
                PreviewRepositoryError::NotFound => {
                    CreatePreviewError::RepositoryError("Unknown repo error".to_string())
                }
            })?;

        Ok(CreatedPreview {
            share_id: record.share_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::application::ports::outgoing::preview_repository::PreviewRecord;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockPreviewRepository {
        pub should_fail: bool,
        pub inserted: Mutex<Vec<NewPreviewData>>,
    }

    #[async_trait]
    impl PreviewRepository for MockPreviewRepository {
        async fn insert_preview(
            &self,
            data: NewPreviewData,
        ) -> Result<PreviewRecord, PreviewRepositoryError> {
            if self.should_fail {
                return Err(PreviewRepositoryError::DatabaseError(
                    "DB insert failed".to_string(),
                ));
            }
            let record = PreviewRecord {
                share_id: data.share_id.clone(),
                content: data.content.clone(),
                views: 0,
                created_at: Utc::now(),
            };
            self.inserted.lock().unwrap().push(data);
            Ok(record)
        }

        async fn find_by_share_id_counting_view(
            &self,
            _share_id: &str,
        ) -> Result<PreviewRecord, PreviewRepositoryError> {
            unimplemented!()
        }
    }

    #[tokio::test]
    async fn test_create_preview_generates_share_id_and_ttl() {
        let repo = MockPreviewRepository::default();
        let use_case = CreatePreviewUseCase::new(repo);

        let result = use_case
            .execute(None, "# Hello".to_string())
            .await
            .expect("preview created");

        assert_eq!(result.share_id.len(), 32);
        assert!(result.share_id.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_create_preview_sets_expiry_30_days_out() {
        let repo = MockPreviewRepository::default();
        let use_case = CreatePreviewUseCase::new(repo);

        let before = Utc::now() + Duration::days(PREVIEW_TTL_DAYS) - Duration::minutes(1);
        use_case
            .execute(Some(Uuid::new_v4()), "content".to_string())
            .await
            .expect("preview created");
        let after = Utc::now() + Duration::days(PREVIEW_TTL_DAYS) + Duration::minutes(1);

        let inserted = use_case.preview_repository.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert!(inserted[0].expires_at > before && inserted[0].expires_at < after);
        assert!(inserted[0].template_id.is_some());
    }

    #[tokio::test]
    async fn test_create_preview_db_error() {
        let repo = MockPreviewRepository {
            should_fail: true,
            ..Default::default()
        };
        let use_case = CreatePreviewUseCase::new(repo);

        let result = use_case.execute(None, "content".to_string()).await;

        match result {
            Err(CreatePreviewError::RepositoryError(msg)) => {
                assert_eq!(msg, "DB insert failed");
            }
            _ => panic!("Expected RepositoryError"),
        }
    }
}
