use async_trait::async_trait;
use sea_orm::{DbErr, EntityTrait, QueryOrder};

use super::content_store::ContentStore;
use super::sea_orm_entity::{about, experience, projects, skills};
use crate::content::application::domain::entities::{About, Experience, Project, Skill};
use crate::content::application::ports::outgoing::{ContentQuery, ContentQueryError};

#[derive(Debug, Clone)]
pub struct ContentQueryPostgres {
    store: ContentStore,
}

impl ContentQueryPostgres {
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }
}

pub(super) fn database_error(err: DbErr) -> ContentQueryError {
    ContentQueryError::DatabaseError(err.to_string())
}

#[async_trait]
impl ContentQuery for ContentQueryPostgres {
    async fn find_about(&self) -> Result<Option<About>, ContentQueryError> {
        let db = self.store.connection()?;

        let model = about::Entity::find()
            .one(db)
            .await
            .map_err(database_error)?;

        Ok(model.map(|m| m.to_domain()))
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, ContentQueryError> {
        let db = self.store.connection()?;

        let models = skills::Entity::find()
            .order_by_asc(skills::Column::Category)
            .order_by_desc(skills::Column::Proficiency)
            .all(db)
            .await
            .map_err(database_error)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError> {
        let db = self.store.connection()?;

        let models = projects::Entity::find()
            .order_by_desc(projects::Column::Featured)
            .order_by_desc(projects::Column::CreatedAt)
            .all(db)
            .await
            .map_err(database_error)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, ContentQueryError> {
        let db = self.store.connection()?;

        let models = experience::Entity::find()
            .order_by_desc(experience::Column::StartDate)
            .all(db)
            .await
            .map_err(database_error)?;

        Ok(models.iter().map(|m| m.to_domain()).collect())
    }
}
