//! Admin sign-in page.

use dioxus::prelude::*;
use ui::use_app_state;
use ui::views::Field;

use crate::Route;

#[component]
pub fn Login() -> Element {
    let state = use_app_state();
    let mut toasts = state.toasts;
    let session = state.session;
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    // Already signed in
    if session.state().signed_in() {
        nav.replace(Route::Dashboard {});
    }

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            submitting.set(true);
            match session.login(email(), password()).await {
                Ok(admin) => {
                    tracing::info!("Signed in as {}", admin.email);
                    toasts.success("Signed in successfully");
                    nav.replace(Route::Dashboard {});
                }
                Err(e) => {
                    tracing::error!("Sign-in failed: {}", e);
                    toasts.error("Invalid email or password");
                }
            }
            submitting.set(false);
        }
    };

    rsx! {
        div { class: "page-center",
            form { class: "card login-card", onsubmit: submit,
                h1 { "Admin Login" }
                p { class: "muted", "Sign in to manage the portfolio." }
                Field {
                    label: "Email",
                    kind: "email",
                    value: email(),
                    oninput: move |v| email.set(v),
                }
                Field {
                    label: "Password",
                    kind: "password",
                    value: password(),
                    oninput: move |v| password.set(v),
                }
                button {
                    class: "btn btn-block",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Signing in..." } else { "Sign In" }
                }
                Link { class: "back-link", to: Route::Home {}, "Back to site" }
            }
        }
    }
}
