use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::{Skill, SkillCategory};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    /// One of frontend, backend, database, devops, other
    pub category: String,

    pub proficiency: i32,

    #[sea_orm(nullable)]
    pub icon: Option<String>,
}

impl Model {
    pub fn to_domain(&self) -> Skill {
        Skill {
            id: self.id.to_string(),
            name: self.name.clone(),
            category: SkillCategory::from_store(&self.category),
            proficiency: Skill::clamp_proficiency(self.proficiency),
            icon: self.icon.clone(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
