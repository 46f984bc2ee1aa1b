use async_trait::async_trait;

use crate::content::application::domain::entities::Experience;

#[async_trait]
pub trait GetExperienceUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Experience>;
}
