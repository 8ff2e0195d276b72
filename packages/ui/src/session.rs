//! Admin session state.

use api::AdminInfo;
use dioxus::prelude::*;

/// Who is signed in, and whether we know yet.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub admin: Option<AdminInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            admin: None,
            loading: true,
        }
    }
}

impl SessionState {
    pub fn signed_in(&self) -> bool {
        self.admin.is_some()
    }
}

/// The session capability handed to views.
#[derive(Clone, Copy, PartialEq)]
pub struct Session(Signal<SessionState>);

impl Session {
    pub(crate) fn new(signal: Signal<SessionState>) -> Self {
        Self(signal)
    }

    pub fn state(&self) -> SessionState {
        self.0.read().clone()
    }

    /// Ask the server who the session belongs to.
    pub async fn refresh(mut self) {
        let admin = match api::get_current_user().await {
            Ok(admin) => admin,
            Err(e) => {
                tracing::error!("Failed to fetch current admin: {}", e);
                None
            }
        };
        self.0.set(SessionState {
            admin,
            loading: false,
        });
    }

    pub async fn login(mut self, email: String, password: String) -> Result<AdminInfo, String> {
        let admin = api::login_password(email, password)
            .await
            .map_err(|e| e.to_string())?;
        self.0.set(SessionState {
            admin: Some(admin.clone()),
            loading: false,
        });
        Ok(admin)
    }

    pub async fn logout(mut self) {
        if let Err(e) = api::logout().await {
            tracing::error!("Logout failed: {}", e);
        }
        self.0.set(SessionState {
            admin: None,
            loading: false,
        });
    }
}
