use sea_orm::entity::prelude::*;

use super::json_strings;
use crate::content::application::domain::entities::Project;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    #[sea_orm(column_type = "Text")]
    pub title: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    // JSONB array of technology names, in display order
    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,

    #[sea_orm(column_type = "Text")]
    pub image: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub live_url: Option<String>,

    pub featured: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_domain(&self) -> Project {
        Project {
            id: self.id.to_string(),
            title: self.title.clone(),
            description: self.description.clone(),
            technologies: json_strings(&self.technologies),
            image: self.image.clone(),
            github_url: non_empty(&self.github_url),
            live_url: non_empty(&self.live_url),
            featured: self.featured,
            created_at: self.created_at.into(),
        }
    }
}

fn non_empty(url: &Option<String>) -> Option<String> {
    url.as_ref().filter(|u| !u.trim().is_empty()).cloned()
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
