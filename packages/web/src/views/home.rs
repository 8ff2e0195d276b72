use dioxus::prelude::*;
use ui::sections::{About, Contact, Hero, Projects, Skills};
use ui::{use_app_state, Footer, Header};

use crate::Route;

/// The single-page public site.
#[component]
pub fn Home() -> Element {
    let state = use_app_state();
    let nav = use_navigator();

    rsx! {
        Header { theme: state.theme }
        main {
            Hero {}
            Projects {
                on_open: move |id: uuid::Uuid| {
                    nav.push(Route::ProjectDetails { id: id.to_string() });
                },
            }
            Skills {}
            About { toasts: state.toasts }
            Contact { toasts: state.toasts }
        }
        Footer {}
    }
}
