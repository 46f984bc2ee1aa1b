use async_trait::async_trait;

use crate::content::application::domain::entities::Skill;

#[async_trait]
pub trait GetSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Skill>;
}
