use dioxus::prelude::*;
use ui::views::ProjectDetailsView;
use ui::{use_app_state, Header};
use uuid::Uuid;

use crate::Route;

#[component]
pub fn ProjectDetails(id: String) -> Element {
    let state = use_app_state();
    let nav = use_navigator();
    let id = Uuid::parse_str(&id).ok();

    rsx! {
        Header { theme: state.theme }
        ProjectDetailsView {
            id,
            on_back: move |_| {
                nav.push(Route::Home {});
            },
        }
    }
}
