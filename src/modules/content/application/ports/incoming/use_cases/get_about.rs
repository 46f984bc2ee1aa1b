use async_trait::async_trait;

use crate::content::application::domain::entities::About;

#[async_trait]
pub trait GetAboutUseCase: Send + Sync {
    /// `None` only when the store is reachable and holds no profile.
    async fn execute(&self) -> Option<About>;
}
