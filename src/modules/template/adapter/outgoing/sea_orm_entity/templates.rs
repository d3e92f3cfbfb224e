use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::generator::application::domain::template::TemplateDocument;
use crate::template::application::domain::entities::{TemplateRecord, Visibility};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "templates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,

    pub user_id: Uuid,
    #[sea_orm(column_type = "Text", string_len = 150)]
    pub name: String,
    pub description: Option<String>,

    #[sea_orm(column_type = "JsonBinary")]
    pub sections: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub theme: JsonValue,
    #[sea_orm(column_type = "JsonBinary")]
    pub customization: JsonValue,

    pub visibility: String,
    pub share_id: Option<String>,
    pub views: i32,

    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> TemplateRecord {
        TemplateRecord {
            id: self.id,
            user_id: self.user_id,
            name: self.name.clone(),
            description: self.description.clone(),
            document: TemplateDocument {
                sections: serde_json::from_value(self.sections.clone()).unwrap_or_default(),
                theme: serde_json::from_value(self.theme.clone()).unwrap_or_default(),
                customization: serde_json::from_value(self.customization.clone())
                    .unwrap_or_default(),
            },
            visibility: Visibility::parse(&self.visibility),
            share_id: self.share_id.clone(),
            views: self.views,
            created_at: self.created_at.to_utc(),
            updated_at: self.updated_at.to_utc(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
