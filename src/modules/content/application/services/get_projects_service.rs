use async_trait::async_trait;
use tracing::warn;

use crate::content::application::{
    domain::{entities::Project, fallback::fallback_projects},
    ports::{incoming::use_cases::GetProjectsUseCase, outgoing::ContentQuery},
};

#[derive(Debug, Clone)]
pub struct GetProjectsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Vec<Project> {
        match self.query.list_projects().await {
            Ok(projects) => projects,
            Err(err) => {
                warn!(entity = "projects", error = %err, "Content store read failed, using fallback data");
                fallback_projects()
            }
        }
    }
}
