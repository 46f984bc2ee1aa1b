pub mod app_state_builder;
pub mod log_capture;
pub mod stubs;

use actix_web::dev::ServiceResponse;
use actix_web::test;

pub async fn read_json(resp: ServiceResponse) -> serde_json::Value {
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).expect("response body is not JSON")
}
