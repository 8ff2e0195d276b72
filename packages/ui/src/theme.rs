//! Light/dark theme, persisted in local storage under `theme` and mirrored as
//! the `dark` class on the document root.

use dioxus::prelude::*;

pub const STORAGE_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stored preference first, then the OS preference.
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Theme::parse).unwrap_or(if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

/// The theme capability handed to views.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState(Signal<Theme>);

impl ThemeState {
    pub(crate) fn new(signal: Signal<Theme>) -> Self {
        Self(signal)
    }

    pub fn get(&self) -> Theme {
        *self.0.read()
    }

    pub fn is_dark(&self) -> bool {
        self.get() == Theme::Dark
    }

    pub fn toggle(&mut self) {
        let next = self.get().toggled();
        self.0.set(next);
        apply_theme(next);
        save_theme(next);
    }
}

/// Read the initial theme from storage and the `prefers-color-scheme` query.
pub fn load_theme() -> Theme {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window();
        let stored = window
            .as_ref()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let prefers_dark = window
            .as_ref()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|m| m.matches())
            .unwrap_or(false);
        Theme::resolve(stored.as_deref(), prefers_dark)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Theme::default()
    }
}

pub fn apply_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            let classes = root.class_list();
            let result = match theme {
                Theme::Dark => classes.add_1("dark"),
                Theme::Light => classes.remove_1("dark"),
            };
            if result.is_err() {
                tracing::warn!("Could not update the document theme class");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}

pub fn save_theme(theme: Theme) {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if let Some(storage) = storage {
            if storage.set_item(STORAGE_KEY, theme.as_str()).is_err() {
                tracing::warn!("Could not persist theme preference");
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = theme;
}
