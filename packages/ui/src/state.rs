//! # Application state
//!
//! [`AppState`] bundles the three process-wide capabilities: theme, admin
//! session and toasts. The root component creates it once with
//! [`use_app_state_provider`], which runs [`AppState::init`] on mount and
//! [`AppState::teardown`] on drop. Route components fetch it once with
//! [`use_app_state`] and hand each capability down as a prop; nothing below
//! the routing boundary reads context.

use dioxus::prelude::*;

use crate::session::{Session, SessionState};
use crate::theme::{apply_theme, load_theme, save_theme, ThemeState};
use crate::toasts::{ToastQueue, Toasts};

#[derive(Clone, Copy, PartialEq)]
pub struct AppState {
    pub theme: ThemeState,
    pub session: Session,
    pub toasts: Toasts,
}

impl AppState {
    /// Apply the stored theme and start resolving the session.
    pub fn init(&self) {
        apply_theme(self.theme.get());
        spawn(self.session.refresh());
        tracing::info!("App state initialised ({})", self.theme.get().as_str());
    }

    pub fn teardown(&self) {
        save_theme(self.theme.get());
    }
}

pub fn use_app_state_provider() -> AppState {
    let theme = use_signal(load_theme);
    let session = use_signal(SessionState::default);
    let toasts = use_signal(ToastQueue::default);

    let state = use_context_provider(|| AppState {
        theme: ThemeState::new(theme),
        session: Session::new(session),
        toasts: Toasts::new(toasts),
    });

    use_hook(|| state.init());
    use_drop(move || state.teardown());
    state
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}
