//! # Contact notification email
//!
//! [`compose`] turns a contact form submission into one [`OutgoingEmail`]
//! addressed to the site owner, and an [`EmailTransport`] hands it to a
//! transactional email API. [`ResendTransport`] speaks the Resend
//! `POST /emails` API; tests substitute their own transport.

use std::future::Future;

use content::ContactMessage;
use serde::Serialize;
use thiserror::Error;

use crate::settings::EmailSettings;

#[derive(Error, Debug)]
pub enum EmailError {
    #[error("Email is not configured")]
    NotConfigured,

    #[error("Email API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Email API rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

/// Request body of the email API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn compose(message: &ContactMessage, settings: &EmailSettings) -> OutgoingEmail {
    let html = format!(
        "<h2>New message from your portfolio contact form</h2>\
         <p><strong>From:</strong> {name} ({email})</p>\
         <p><strong>Subject:</strong> {subject}</p>\
         <p><strong>Message:</strong></p>\
         <p>{body}</p>",
        name = escape_html(&message.name),
        email = escape_html(&message.email),
        subject = escape_html(&message.subject),
        body = escape_html(&message.message).replace('\n', "<br>"),
    );
    OutgoingEmail {
        from: settings.from.clone(),
        to: vec![settings.admin_address.clone()],
        subject: format!("New Contact Form Submission: {}", message.subject),
        html,
    }
}

pub trait EmailTransport: Send + Sync {
    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), EmailError>> + Send;
}

#[derive(Clone, Debug)]
pub struct ResendTransport {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl ResendTransport {
    pub fn new(settings: &EmailSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

impl EmailTransport for ResendTransport {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        if self.api_key.is_empty() {
            return Err(EmailError::NotConfigured);
        }
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(email)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        tracing::info!("Email accepted by API: {}", email.subject);
        Ok(())
    }
}
