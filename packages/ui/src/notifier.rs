use content::contact::SEND_CONTACT_EMAIL_PATH;
use content::{ContactMessage, Notifier};

/// Calls the `send-contact-email` function on the serving origin.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionNotifier {
    endpoint: String,
}

impl FunctionNotifier {
    pub fn new(origin: &str) -> Self {
        Self {
            endpoint: format!("{}{}", origin.trim_end_matches('/'), SEND_CONTACT_EMAIL_PATH),
        }
    }

    /// Notifier for the origin the page was served from.
    pub fn from_location() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let origin = web_sys::window()
                .and_then(|w| w.location().origin().ok())
                .unwrap_or_default();
            Self::new(&origin)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new("http://localhost:8080")
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Notifier for FunctionNotifier {
    async fn notify(&self, message: &ContactMessage) -> Result<(), String> {
        let response = reqwest::Client::new()
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if response.status().is_success() {
            Ok(())
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(format!("Email function returned {status}: {body}"))
        }
    }
}
