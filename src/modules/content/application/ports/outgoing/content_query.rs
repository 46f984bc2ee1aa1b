use async_trait::async_trait;

use crate::content::application::domain::entities::{About, Experience, Project, Skill};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentQueryError {
    #[error("Content store is not configured: {0}")]
    NotConfigured(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Read-only access to the portfolio content store.
///
/// Each call is one query; an empty result is `Ok`, a failed read is `Err`.
#[async_trait]
pub trait ContentQuery: Send + Sync {
    /// Single-document fetch, `None` when the store holds no profile.
    async fn find_about(&self) -> Result<Option<About>, ContentQueryError>;

    /// Ordered by category ascending, then proficiency descending.
    async fn list_skills(&self) -> Result<Vec<Skill>, ContentQueryError>;

    /// Featured first, then newest first.
    async fn list_projects(&self) -> Result<Vec<Project>, ContentQueryError>;

    /// Most recent start date first.
    async fn list_experience(&self) -> Result<Vec<Experience>, ContentQueryError>;
}
