use async_trait::async_trait;
use serde::Deserialize;

use crate::contact_form::application::ports::{
    ContactEndpoint, ContactPayload, EndpointError, GENERIC_REJECTION,
};

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Posts the form to `<base_url>/api/contact`.
#[derive(Debug, Clone)]
pub struct HttpContactEndpoint {
    client: reqwest::Client,
    url: String,
}

impl HttpContactEndpoint {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            url: format!("{}/api/contact", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl ContactEndpoint for HttpContactEndpoint {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), EndpointError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EndpointError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.is_empty())
            .unwrap_or_else(|| GENERIC_REJECTION.to_string());

        Err(EndpointError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{post, web, App, HttpResponse, HttpServer};
    use std::net::SocketAddr;

    use crate::contact::adapter::incoming::web::routes::submit_contact_handler;
    use crate::contact::application::ports::incoming::use_cases::SubmitContactError;
    use crate::contact_form::application::controller::{ContactFormController, FormField};
    use crate::shared::api::custom_json_config;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, stubs::StubSubmitContactUseCase,
    };

    #[post("/api/contact")]
    async fn echo_ok(body: web::Json<serde_json::Value>) -> HttpResponse {
        if body["email"] == "ada@example.com" {
            HttpResponse::Ok().json(serde_json::json!({ "message": "Email sent successfully" }))
        } else {
            HttpResponse::BadRequest().finish()
        }
    }

    #[post("/api/contact")]
    async fn plain_failure() -> HttpResponse {
        HttpResponse::BadGateway().body("upstream down")
    }

    fn spawn<F>(configure: F) -> SocketAddr
    where
        F: Fn(&mut web::ServiceConfig) + Send + Clone + 'static,
    {
        let server = HttpServer::new(move || App::new().configure(configure.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .unwrap();
        let addr = server.addrs()[0];
        actix_web::rt::spawn(server.run());
        addr
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_success_response_is_ok() {
        let addr = spawn(|cfg| {
            cfg.service(echo_ok);
        });
        let endpoint = HttpContactEndpoint::new(&format!("http://{}/", addr));

        assert_eq!(endpoint.submit(&payload()).await, Ok(()));
    }

    #[actix_web::test]
    async fn test_non_json_failure_uses_generic_message() {
        let addr = spawn(|cfg| {
            cfg.service(plain_failure);
        });
        let endpoint = HttpContactEndpoint::new(&format!("http://{}", addr));

        let result = endpoint.submit(&payload()).await;

        assert_eq!(
            result,
            Err(EndpointError::Rejected {
                status: 502,
                message: "Failed to send message".to_string(),
            })
        );
    }

    #[actix_web::test]
    async fn test_unreachable_server_is_transport_error() {
        // Bind then drop to get a port nothing listens on.
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let endpoint = HttpContactEndpoint::new(&format!("http://127.0.0.1:{}", port));

        let err = endpoint.submit(&payload()).await.unwrap_err();

        assert!(matches!(err, EndpointError::Transport(_)));
        assert_eq!(
            err.display_message(),
            "Failed to send message. Please try again."
        );
    }

    #[actix_web::test]
    async fn test_form_shows_error_reported_by_contact_route() {
        let state = TestAppStateBuilder::default()
            .with_submit_contact(StubSubmitContactUseCase::error(
                SubmitContactError::NotConfigured,
            ))
            .build();
        let addr = spawn(move |cfg| {
            cfg.app_data(state.clone())
                .app_data(custom_json_config())
                .service(submit_contact_handler);
        });

        let mut form =
            ContactFormController::new(HttpContactEndpoint::new(&format!("http://{}", addr)));
        form.set_field(FormField::Name, "Ada");
        form.set_field(FormField::Email, "ada@example.com");
        form.set_field(FormField::Subject, "Hello");
        form.set_field(FormField::Message, "Hi");

        form.submit().await;

        assert_eq!(
            form.error(),
            Some("Email configuration is missing. Your message has been logged. Please set up email credentials in .env file.")
        );
    }
}
