use async_trait::async_trait;
use chrono::Utc;
use std::sync::Mutex;
use uuid::Uuid;

use crate::generator::application::domain::template::TemplateDocument;
use crate::shared::tokens::generate_share_id;
use crate::template::application::domain::entities::{TemplateRecord, Visibility};
use crate::template::application::ports::outgoing::template_repository::{
    CreateTemplateData, TemplateRepository, TemplateRepositoryError, UpdateTemplateData,
};

pub fn sample_template_record(user_id: Uuid) -> TemplateRecord {
    TemplateRecord {
        id: Uuid::new_v4(),
        user_id,
        name: "My README".to_string(),
        description: None,
        document: TemplateDocument::default(),
        visibility: Visibility::Private,
        share_id: Some(generate_share_id()),
        views: 0,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// In-memory template repository for use-case tests.
#[derive(Default)]
pub struct StubTemplateRepository {
    pub fail: bool,
    pub records: Mutex<Vec<TemplateRecord>>,
}

impl StubTemplateRepository {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn with_records(records: Vec<TemplateRecord>) -> Self {
        Self {
            fail: false,
            records: Mutex::new(records),
        }
    }

    fn guard(&self) -> Result<(), TemplateRepositoryError> {
        if self.fail {
            Err(TemplateRepositoryError::DatabaseError(
                "DB error".to_string(),
            ))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl TemplateRepository for StubTemplateRepository {
    async fn insert_template(
        &self,
        data: CreateTemplateData,
    ) -> Result<TemplateRecord, TemplateRepositoryError> {
        self.guard()?;
        let record = TemplateRecord {
            id: Uuid::new_v4(),
            user_id: data.user_id,
            name: data.name,
            description: data.description,
            document: data.document,
            visibility: data.visibility,
            share_id: Some(data.share_id),
            views: 0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(
        &self,
        template_id: Uuid,
    ) -> Result<Option<TemplateRecord>, TemplateRepositoryError> {
        self.guard()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == template_id)
            .cloned())
    }

    async fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<TemplateRecord>, TemplateRepositoryError> {
        self.guard()?;
        let mut records: Vec<TemplateRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(records)
    }

    async fn update_template(
        &self,
        template_id: Uuid,
        data: UpdateTemplateData,
    ) -> Result<TemplateRecord, TemplateRepositoryError> {
        self.guard()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == template_id)
            .ok_or(TemplateRepositoryError::NotFound)?;

        if let Some(name) = data.name {
            record.name = name;
        }
        if let Some(description) = data.description {
            record.description = Some(description);
        }
        if let Some(sections) = data.sections {
            record.document.sections = sections;
        }
        if let Some(theme) = data.theme {
            record.document.theme = theme;
        }
        if let Some(customization) = data.customization {
            record.document.customization = customization;
        }
        if let Some(visibility) = data.visibility {
            record.visibility = visibility;
        }
        record.updated_at = Utc::now();
        Ok(record.clone())
    }

    async fn delete_template(&self, template_id: Uuid) -> Result<(), TemplateRepositoryError> {
        self.guard()?;
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != template_id);
        if records.len() == before {
            return Err(TemplateRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn find_by_share_id(
        &self,
        share_id: &str,
    ) -> Result<Option<TemplateRecord>, TemplateRepositoryError> {
        self.guard()?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.share_id.as_deref() == Some(share_id))
            .cloned())
    }

    async fn increment_views(
        &self,
        template_id: Uuid,
    ) -> Result<TemplateRecord, TemplateRepositoryError> {
        self.guard()?;
        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|r| r.id == template_id)
            .ok_or(TemplateRepositoryError::NotFound)?;
        record.views += 1;
        Ok(record.clone())
    }
}
