use async_trait::async_trait;
use tracing::warn;

use crate::content::application::{
    domain::{entities::Skill, fallback::fallback_skills, skill_set::with_guaranteed_skills},
    ports::{incoming::use_cases::GetSkillsUseCase, outgoing::ContentQuery},
};

#[derive(Debug, Clone)]
pub struct GetSkillsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetSkillsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillsUseCase for GetSkillsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Skill> {
        let skills = match self.query.list_skills().await {
            Ok(skills) => skills,
            Err(err) => {
                warn!(entity = "skills", error = %err, "Content store read failed, using fallback data");
                fallback_skills()
            }
        };

        with_guaranteed_skills(skills)
    }
}
