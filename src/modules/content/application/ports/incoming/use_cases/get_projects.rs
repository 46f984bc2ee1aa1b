use async_trait::async_trait;

use crate::content::application::domain::entities::Project;

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Vec<Project>;
}
