use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::generator::adapter::outgoing::sea_orm_entity::previews::{ActiveModel, Column, Entity};
use crate::generator::application::ports::outgoing::preview_repository::{
    NewPreviewData, PreviewRecord, PreviewRepository, PreviewRepositoryError,
};

#[derive(Clone)]
pub struct PreviewRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PreviewRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PreviewRepository for PreviewRepositoryPostgres {
    async fn insert_preview(
        &self,
        data: NewPreviewData,
    ) -> Result<PreviewRecord, PreviewRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            template_id: Set(data.template_id),
            share_id: Set(data.share_id),
            content: Set(data.content),
            views: Set(0),
            expires_at: Set(data.expires_at.fixed_offset()),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_record())
    }

    async fn find_by_share_id_counting_view(
        &self,
        share_id: &str,
    ) -> Result<PreviewRecord, PreviewRepositoryError> {
        // Single returning update so concurrent readers each observe a
        // distinct counter value. Expired rows never match.
        let results = Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::ShareId.eq(share_id))
            .filter(Column::ExpiresAt.gt(Utc::now().fixed_offset()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(|model| model.to_record())
            .ok_or(PreviewRepositoryError::NotFound)
    }
}

fn map_db_err(err: DbErr) -> PreviewRepositoryError {
    PreviewRepositoryError::DatabaseError(err.to_string())
}
