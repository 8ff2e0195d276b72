//! Shared UI for the portfolio: public sections, admin managers and the
//! client-side state they run on.

use dioxus::prelude::*;

pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_brands_icons::{FaGithub, FaLinkedin};
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

pub mod load;
pub use load::{use_load, Load, Loader};

pub mod theme;
pub use theme::{Theme, ThemeState};

pub mod session;
pub use session::{Session, SessionState};

pub mod toasts;
pub use toasts::{ToastStack, Toasts};

mod state;
pub use state::{use_app_state, use_app_state_provider, AppState};

pub mod gate;

mod api_store;
pub use api_store::{content, ApiStore};

mod notifier;
pub use notifier::FunctionNotifier;

pub mod sections;
pub mod admin;
pub mod views;

mod header;
pub use header::Header;

mod footer;
pub use footer::Footer;
