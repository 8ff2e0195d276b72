//! HTTP function that forwards a contact form submission by email.
//!
//! `POST /functions/send-contact-email` with a JSON [`ContactMessage`] body.
//! Every response, including the `OPTIONS` pre-flight, carries permissive
//! CORS headers so the function can be called from any origin.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use content::ContactMessage;
use serde_json::json;

use crate::email::{compose, EmailTransport};
use crate::settings::EmailSettings;

pub use content::contact::SEND_CONTACT_EMAIL_PATH;

const CORS_HEADERS: [(HeaderName, &str); 2] = [
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        "authorization, x-client-info, apikey, content-type",
    ),
];

struct ContactFunction<T> {
    transport: T,
    settings: EmailSettings,
}

pub fn router<T: EmailTransport + 'static>(transport: T, settings: EmailSettings) -> Router {
    let state = Arc::new(ContactFunction {
        transport,
        settings,
    });
    Router::new()
        .route(
            SEND_CONTACT_EMAIL_PATH,
            post(send_contact_email::<T>).options(preflight),
        )
        .with_state(state)
}

async fn preflight() -> Response {
    (StatusCode::OK, CORS_HEADERS, "ok").into_response()
}

async fn send_contact_email<T: EmailTransport>(
    State(function): State<Arc<ContactFunction<T>>>,
    body: Bytes,
) -> Response {
    let message: ContactMessage = match serde_json::from_slice(&body) {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("Malformed contact payload: {}", e);
            return failed();
        }
    };

    let email = compose(&message, &function.settings);
    match function.transport.send(&email).await {
        Ok(()) => (
            StatusCode::OK,
            CORS_HEADERS,
            Json(json!({ "message": "Email sent successfully" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Error sending email: {}", e);
            failed()
        }
    }
}

fn failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        CORS_HEADERS,
        Json(json!({ "error": "Failed to send email" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::{EmailError, OutgoingEmail};
    use axum::body::Body;
    use axum::http::{Method, Request};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Clone, Default)]
    struct RecordingTransport {
        sent: Arc<Mutex<Vec<OutgoingEmail>>>,
        fail: bool,
    }

    impl EmailTransport for RecordingTransport {
        async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
            if self.fail {
                return Err(EmailError::NotConfigured);
            }
            self.sent.lock().unwrap().push(email.clone());
            Ok(())
        }
    }

    fn settings() -> EmailSettings {
        EmailSettings {
            api_key: "key".into(),
            api_url: "http://localhost/emails".into(),
            from: "Portfolio Contact Form <onboarding@resend.dev>".into(),
            admin_address: "owner@example.org".into(),
        }
    }

    fn request(method: Method, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(SEND_CONTACT_EMAIL_PATH)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_preflight() {
        let app = router(RecordingTransport::default(), settings());
        let response = app.oneshot(request(Method::OPTIONS, "")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn test_sends_one_email_to_admin() {
        let transport = RecordingTransport::default();
        let app = router(transport.clone(), settings());
        let payload = r#"{"name":"A","email":"a@x.com","subject":"S","message":"M"}"#;

        let response = app.oneshot(request(Method::POST, payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "authorization, x-client-info, apikey, content-type"
        );
        assert_eq!(
            body_json(response).await,
            json!({"message": "Email sent successfully"})
        );
        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, vec!["owner@example.org"]);
        assert_eq!(sent[0].subject, "New Contact Form Submission: S");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let transport = RecordingTransport {
            fail: true,
            ..RecordingTransport::default()
        };
        let app = router(transport, settings());
        let payload = r#"{"name":"A","email":"a@x.com","subject":"S","message":"M"}"#;

        let response = app.oneshot(request(Method::POST, payload)).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );
        assert_eq!(body_json(response).await, json!({"error": "Failed to send email"}));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let transport = RecordingTransport::default();
        let app = router(transport.clone(), settings());

        let response = app.oneshot(request(Method::POST, "{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
