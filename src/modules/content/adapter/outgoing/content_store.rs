use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use crate::content::application::ports::outgoing::ContentQueryError;

/// Shared handle to the content store, built once at startup.
///
/// A store that could not be set up stays usable as a value: every query
/// against it fails with `NotConfigured`, which the content services turn
/// into fallback data.
#[derive(Debug, Clone)]
pub struct ContentStore {
    state: StoreState,
}

#[derive(Debug, Clone)]
enum StoreState {
    Connected(Arc<DatabaseConnection>),
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreStatus {
    Ok,
    Unhealthy,
    NotConfigured,
}

impl StoreStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreStatus::Ok => "ok",
            StoreStatus::Unhealthy => "unhealthy",
            StoreStatus::NotConfigured => "not_configured",
        }
    }
}

impl ContentStore {
    pub async fn connect(database_url: Option<&str>) -> Self {
        let Some(url) = database_url.filter(|url| !url.trim().is_empty()) else {
            warn!("DATABASE_URL is not set, content will be served from fallback data");
            return Self::unavailable("DATABASE_URL is not set");
        };

        let mut opt = ConnectOptions::new(url.to_string());
        opt.max_connections(10)
            .min_connections(0)
            .connect_timeout(Duration::from_secs(5))
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(1800))
            .connect_lazy(true)
            .sqlx_logging(false);

        match Database::connect(opt).await {
            Ok(conn) => {
                info!("Content store connection pool created");
                Self::from_connection(Arc::new(conn))
            }
            Err(err) => {
                warn!(error = %err, "Failed to set up content store, content will be served from fallback data");
                Self::unavailable(err.to_string())
            }
        }
    }

    pub fn from_connection(db: Arc<DatabaseConnection>) -> Self {
        Self {
            state: StoreState::Connected(db),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            state: StoreState::Unavailable(reason.into()),
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self.state, StoreState::Connected(_))
    }

    pub fn connection(&self) -> Result<&DatabaseConnection, ContentQueryError> {
        match &self.state {
            StoreState::Connected(db) => Ok(db.as_ref()),
            StoreState::Unavailable(reason) => Err(ContentQueryError::NotConfigured(reason.clone())),
        }
    }

    pub async fn ping(&self) -> StoreStatus {
        let Ok(db) = self.connection() else {
            return StoreStatus::NotConfigured;
        };

        match db
            .execute(Statement::from_string(db.get_database_backend(), "SELECT 1"))
            .await
        {
            Ok(_) => StoreStatus::Ok,
            Err(_) => StoreStatus::Unhealthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    #[tokio::test]
    async fn test_missing_url_yields_unavailable_store() {
        let store = ContentStore::connect(None).await;

        assert!(!store.is_configured());
        assert!(matches!(
            store.connection(),
            Err(ContentQueryError::NotConfigured(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_url_counts_as_missing() {
        let store = ContentStore::connect(Some("   ")).await;
        assert!(!store.is_configured());
    }

    #[tokio::test]
    async fn test_unsupported_url_yields_unavailable_store() {
        let store = ContentStore::connect(Some("not-a-database-url")).await;

        assert!(!store.is_configured());
        assert_eq!(store.ping().await, StoreStatus::NotConfigured);
    }

    #[tokio::test]
    async fn test_ping_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let store = ContentStore::from_connection(Arc::new(db));

        assert_eq!(store.ping().await, StoreStatus::Ok);
    }

    #[tokio::test]
    async fn test_ping_unhealthy() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Conn(RuntimeErr::Internal(
                "connection refused".into(),
            ))])
            .into_connection();

        let store = ContentStore::from_connection(Arc::new(db));

        assert_eq!(store.ping().await, StoreStatus::Unhealthy);
    }
}
