use sea_orm::entity::prelude::*;

use crate::content::application::domain::entities::{About, SocialLinks};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub id: Uuid,

    pub name: String,

    pub title: String,

    pub location: String,

    pub email: String,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub bio: String,

    pub avatar: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub twitter_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub instagram_url: Option<String>,

    #[sea_orm(nullable)]
    pub whatsapp: Option<String>,
}

impl Model {
    pub fn to_domain(&self) -> About {
        About {
            id: self.id.to_string(),
            name: self.name.clone(),
            title: self.title.clone(),
            location: self.location.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            bio: self.bio.clone(),
            avatar: self.avatar.clone(),
            social_links: SocialLinks {
                github: self.github_url.clone(),
                linkedin: self.linkedin_url.clone(),
                twitter: self.twitter_url.clone(),
                instagram: self.instagram_url.clone(),
                whatsapp: self.whatsapp.clone(),
            },
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
