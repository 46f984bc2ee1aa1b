use async_trait::async_trait;
use tracing::warn;

use crate::content::application::{
    domain::{entities::About, fallback::fallback_about},
    ports::{incoming::use_cases::GetAboutUseCase, outgoing::ContentQuery},
};

#[derive(Debug, Clone)]
pub struct GetAboutService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetAboutService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetAboutUseCase for GetAboutService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> Option<About> {
        match self.query.find_about().await {
            Ok(about) => about,
            Err(err) => {
                warn!(entity = "about", error = %err, "Content store read failed, using fallback data");
                Some(fallback_about())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::StubContentQuery;

    #[tokio::test]
    async fn test_returns_store_profile() {
        let mut stored = fallback_about();
        stored.name = "Stored Name".to_string();

        let service = GetAboutService::new(StubContentQuery::default().with_about(Some(stored)));

        let result = service.execute().await;

        assert_eq!(result.unwrap().name, "Stored Name");
    }

    #[tokio::test]
    async fn test_empty_store_is_not_replaced_by_fallback() {
        let service = GetAboutService::new(StubContentQuery::default().with_about(None));

        assert!(service.execute().await.is_none());
    }

    #[tokio::test]
    async fn test_store_failure_returns_fallback_profile() {
        let service = GetAboutService::new(StubContentQuery::failing("connection refused"));

        let result = service.execute().await;

        assert_eq!(result, Some(fallback_about()));
    }
}
