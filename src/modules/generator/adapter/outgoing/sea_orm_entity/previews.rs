use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::generator::application::ports::outgoing::preview_repository::PreviewRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "previews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub template_id: Option<Uuid>,
    #[sea_orm(column_type = "Text", string_len = 64)]
    pub share_id: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub views: i32,

    pub expires_at: DateTimeWithTimeZone,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> PreviewRecord {
        PreviewRecord {
            share_id: self.share_id.clone(),
            content: self.content.clone(),
            views: self.views,
            created_at: self.created_at.to_utc(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
