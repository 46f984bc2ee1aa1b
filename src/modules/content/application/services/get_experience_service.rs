use async_trait::async_trait;
use tracing::warn;

use crate::content::application::{
    domain::{entities::Experience, fallback::fallback_experience},
    ports::{incoming::use_cases::GetExperienceUseCase, outgoing::ContentQuery},
};

#[derive(Debug, Clone)]
pub struct GetExperienceService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetExperienceService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetExperienceUseCase for GetExperienceService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Experience> {
        match self.query.list_experience().await {
            Ok(experience) => experience,
            Err(err) => {
                warn!(entity = "experience", error = %err, "Content store read failed, using fallback data");
                fallback_experience()
            }
        }
    }
}
