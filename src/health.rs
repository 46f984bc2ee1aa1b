use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::content::adapter::outgoing::{ContentStore, StoreStatus};
use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
    email: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the content store
/// - Reports relay configuration
///
/// Always 200: without the store the site still serves fallback content.
#[get("/ready")]
pub async fn readiness(
    store: web::Data<ContentStore>,
    data: web::Data<AppState>,
) -> impl Responder {
    let db_status = store.ping().await;

    let overall_status = if db_status == StoreStatus::Ok {
        "ok"
    } else {
        "degraded"
    };

    let email_status = if data.relay_configured {
        "configured"
    } else {
        "not_configured"
    };

    HttpResponse::Ok().json(ReadinessResponse {
        status: overall_status,
        database: db_status.as_str(),
        email: email_status,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use std::sync::Arc;

    use crate::tests::support::{app_state_builder::TestAppStateBuilder, read_json};

    #[actix_web::test]
    async fn test_health_is_ok() {
        let app = test::init_service(App::new().service(health)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(read_json(resp).await["status"], "ok");
    }

    #[actix_web::test]
    async fn test_ready_without_store_is_degraded() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(ContentStore::unavailable("DATABASE_URL is not set")))
                .app_data(TestAppStateBuilder::default().build())
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json = read_json(resp).await;
        assert_eq!(json["status"], "degraded");
        assert_eq!(json["database"], "not_configured");
        assert_eq!(json["email"], "not_configured");
    }

    #[actix_web::test]
    async fn test_ready_with_store_and_relay() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let store = ContentStore::from_connection(Arc::new(db));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .app_data(
                    TestAppStateBuilder::default()
                        .with_relay_configured(true)
                        .build(),
                )
                .service(readiness),
        )
        .await;

        let req = test::TestRequest::get().uri("/ready").to_request();
        let resp = test::call_service(&app, req).await;

        let json = read_json(resp).await;
        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"], "ok");
        assert_eq!(json["email"], "configured");
    }
}
