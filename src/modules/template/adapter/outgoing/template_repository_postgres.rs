use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::generator::application::domain::template::TemplateDocument;
use crate::template::adapter::outgoing::sea_orm_entity::templates::{
    ActiveModel, Column, Entity,
};
use crate::template::application::domain::entities::TemplateRecord;
use crate::template::application::ports::outgoing::template_repository::{
    CreateTemplateData, TemplateRepository, TemplateRepositoryError, UpdateTemplateData,
};

#[derive(Clone)]
pub struct TemplateRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TemplateRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TemplateRepository for TemplateRepositoryPostgres {
    async fn insert_template(
        &self,
        data: CreateTemplateData,
    ) -> Result<TemplateRecord, TemplateRepositoryError> {
        let now = Utc::now().fixed_offset();
        let (sections, theme, customization) = document_to_json(&data.document)?;

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.user_id),
            name: Set(data.name),
            description: Set(data.description),
            sections: Set(sections),
            theme: Set(theme),
            customization: Set(customization),
            visibility: Set(data.visibility.as_str().to_string()),
            share_id: Set(Some(data.share_id)),
            views: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(inserted.to_domain())
    }

    async fn find_by_id(
        &self,
        template_id: Uuid,
    ) -> Result<Option<TemplateRecord>, TemplateRepositoryError> {
        let model = Entity::find_by_id(template_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TemplateRecord>, TemplateRepositoryError> {
        let models = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::UpdatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn update_template(
        &self,
        template_id: Uuid,
        data: UpdateTemplateData,
    ) -> Result<TemplateRecord, TemplateRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name.trim().to_string());
        }
        if let Some(description) = data.description {
            model.description = Set(Some(description));
        }
        if let Some(sections) = data.sections {
            model.sections = Set(to_json(serde_json::to_value(&sections))?);
        }
        if let Some(theme) = data.theme {
            model.theme = Set(to_json(serde_json::to_value(&theme))?);
        }
        if let Some(customization) = data.customization {
            model.customization = Set(to_json(serde_json::to_value(&customization))?);
        }
        if let Some(visibility) = data.visibility {
            model.visibility = Set(visibility.as_str().to_string());
        }
        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(template_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(TemplateRepositoryError::NotFound)?;

        Ok(result.to_domain())
    }

    async fn delete_template(&self, template_id: Uuid) -> Result<(), TemplateRepositoryError> {
        let result = Entity::delete_by_id(template_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TemplateRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn find_by_share_id(
        &self,
        share_id: &str,
    ) -> Result<Option<TemplateRecord>, TemplateRepositoryError> {
        let model = Entity::find()
            .filter(Column::ShareId.eq(share_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn increment_views(
        &self,
        template_id: Uuid,
    ) -> Result<TemplateRecord, TemplateRepositoryError> {
        let results = Entity::update_many()
            .col_expr(Column::Views, Expr::col(Column::Views).add(1))
            .filter(Column::Id.eq(template_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(|m| m.to_domain())
            .ok_or(TemplateRepositoryError::NotFound)
    }
}

fn document_to_json(
    document: &TemplateDocument,
) -> Result<(serde_json::Value, serde_json::Value, serde_json::Value), TemplateRepositoryError> {
    Ok((
        to_json(serde_json::to_value(&document.sections))?,
        to_json(serde_json::to_value(&document.theme))?,
        to_json(serde_json::to_value(&document.customization))?,
    ))
}

fn to_json(
    value: serde_json::Result<serde_json::Value>,
) -> Result<serde_json::Value, TemplateRepositoryError> {
    value.map_err(|e| TemplateRepositoryError::DatabaseError(e.to_string()))
}

fn map_db_err(err: DbErr) -> TemplateRepositoryError {
    TemplateRepositoryError::DatabaseError(err.to_string())
}
