use sea_orm::entity::prelude::*;

use super::json_strings;
use crate::content::application::domain::entities::Experience;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experience")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub company: String,

    pub position: String,

    pub location: String,

    pub start_date: Date,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub current: bool,

    // JSONB array of bullet points
    #[sea_orm(column_type = "JsonBinary")]
    pub description: Json,

    #[sea_orm(column_type = "JsonBinary")]
    pub technologies: Json,
}

impl Model {
    pub fn to_domain(&self) -> Experience {
        Experience {
            id: self.id.to_string(),
            company: self.company.clone(),
            position: self.position.clone(),
            location: self.location.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            current: self.current,
            description: json_strings(&self.description),
            technologies: json_strings(&self.technologies),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
