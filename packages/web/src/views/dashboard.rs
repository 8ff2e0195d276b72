use dioxus::prelude::*;
use ui::admin::{AboutManager, NewsManager, ProjectsManager};
use ui::icons::FaRightFromBracket;
use ui::{use_app_state, Icon};

use crate::Route;

/// Admin home. Only reachable through the access gate.
#[component]
pub fn Dashboard() -> Element {
    let state = use_app_state();
    let session = state.session;
    let nav = use_navigator();
    let email = session
        .state()
        .admin
        .map(|admin| admin.email)
        .unwrap_or_default();

    let sign_out = move |_: MouseEvent| async move {
        session.logout().await;
        nav.replace(Route::Login {});
    };

    rsx! {
        div { class: "dashboard",
            header { class: "dashboard-header",
                div { class: "container dashboard-bar",
                    div {
                        h1 { "Dashboard" }
                        p { class: "muted", "Signed in as {email}" }
                    }
                    div { class: "admin-actions",
                        Link { class: "btn btn-ghost", to: Route::Home {}, "View Site" }
                        button { class: "btn btn-outline", onclick: sign_out,
                            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
                            " Sign Out"
                        }
                    }
                }
            }
            main { class: "container dashboard-body",
                ProjectsManager { toasts: state.toasts }
                AboutManager { toasts: state.toasts }
                NewsManager { toasts: state.toasts }
            }
        }
    }
}
