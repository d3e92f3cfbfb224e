use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users::{ActiveModel, Column, Entity};
use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    GithubUserData, GuestUserData, UserRepository, UserRepositoryError,
};

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn upsert_github_user(&self, data: GithubUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let existing = Entity::find()
            .filter(Column::GithubId.eq(data.github_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let model = match existing {
            // Re-login refreshes the stored profile snapshot.
            Some(found) => {
                let mut active: ActiveModel = found.into();
                active.username = Set(Some(data.username));
                active.name = Set(data.name);
                active.email = Set(data.email);
                active.avatar_url = Set(data.avatar_url);
                active.bio = Set(data.bio);
                active.location = Set(data.location);
                active.website = Set(data.website);
                active.updated_at = Set(now);
                active.update(&*self.db).await.map_err(map_db_err)?
            }
            None => {
                let active = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    github_id: Set(Some(data.github_id)),
                    email: Set(data.email),
                    name: Set(data.name),
                    username: Set(Some(data.username)),
                    avatar_url: Set(data.avatar_url),
                    bio: Set(data.bio),
                    location: Set(data.location),
                    website: Set(data.website),
                    is_guest: Set(false),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                active.insert(&*self.db).await.map_err(map_db_err)?
            }
        };

        Ok(model.to_domain())
    }

    async fn insert_guest_user(&self, data: GuestUserData) -> Result<User, UserRepositoryError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            github_id: Set(None),
            email: Set(data.email),
            name: Set(data.name),
            username: Set(None),
            avatar_url: Set(None),
            bio: Set(None),
            location: Set(None),
            website: Set(None),
            is_guest: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model.to_domain())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, UserRepositoryError> {
        let model = Entity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_domain()))
    }
}

fn map_db_err(err: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(err.to_string())
}
