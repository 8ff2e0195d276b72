use content::{singleton_notice, About, Mode, Record};
use dioxus::prelude::*;

use super::forms::AboutForm;
use crate::api_store::content;
use crate::icons::FaPen;
use crate::load::{use_load, Load};
use crate::toasts::Toasts;
use crate::views::{ErrorText, Field, Spinner};
use crate::Icon;

const NOUN: &str = "About content";

/// Editor for the about singleton. With no row yet it opens straight into
/// the create form.
#[component]
pub fn AboutManager(toasts: Toasts) -> Element {
    let mut toasts = toasts;
    let mut loader = use_load(|| async { content().about().await });
    let mut mode = use_signal(Mode::default);
    let mut form = use_signal(AboutForm::default);

    use_effect(move || {
        if let Load::Ready(about) = loader.state() {
            if *mode.peek() == Mode::Loading {
                if let Some(about) = about.as_ref() {
                    form.set(AboutForm::from_about(about));
                }
                mode.set(Mode::for_singleton(about.as_ref().map(About::id)));
            }
        }
    });

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let Some(op) = mode().plan(form().to_draft()) else {
                return;
            };
            let result = content().apply::<About>(&op).await;
            mode.set(mode().after_write(result.is_ok()));
            match result {
                Ok(_) => {
                    toasts.success(&singleton_notice(NOUN, true));
                    loader.reload();
                }
                Err(e) => {
                    tracing::error!("Error saving about content: {}", e);
                    toasts.error(&singleton_notice(NOUN, false));
                }
            }
        }
    };

    let current = match loader.state() {
        Load::Ready(about) => about,
        Load::Loading => return rsx! { Spinner {} },
        Load::Failed(message) => return rsx! { ErrorText { message } },
    };

    let editable = match (mode(), &current) {
        (Mode::Viewing, Some(about)) => Some(about.clone()),
        _ => None,
    };

    let body = match (mode(), current) {
        (Mode::Loading, _) => rsx! { Spinner {} },
        (Mode::Editing { id }, current) => rsx! {
            form { class: "admin-form", onsubmit: submit,
                Field {
                    label: "Name",
                    value: form.read().name.clone(),
                    oninput: move |v| form.write().name = v,
                }
                Field {
                    label: "Email",
                    kind: "email",
                    value: form.read().email.clone(),
                    oninput: move |v| form.write().email = v,
                }
                Field {
                    label: "Location",
                    value: form.read().location.clone(),
                    oninput: move |v| form.write().location = v,
                }
                Field {
                    label: "Bio",
                    multiline: true,
                    value: form.read().bio.clone(),
                    oninput: move |v| form.write().bio = v,
                }
                Field {
                    label: "Experience",
                    value: form.read().experience.clone(),
                    oninput: move |v| form.write().experience = v,
                }
                Field {
                    label: "Profile Image URL",
                    kind: "url",
                    value: form.read().profile_image.clone(),
                    oninput: move |v| form.write().profile_image = v,
                }
                Field {
                    label: "CV URL",
                    kind: "url",
                    required: false,
                    value: form.read().cv_url.clone(),
                    oninput: move |v| form.write().cv_url = v,
                }
                div { class: "admin-actions",
                    if let Some(about) = current {
                        button {
                            class: "btn btn-ghost",
                            r#type: "button",
                            onclick: move |_| {
                                form.set(AboutForm::from_about(&about));
                                mode.set(Mode::Viewing);
                            },
                            "Cancel"
                        }
                    }
                    button { class: "btn", r#type: "submit",
                        if id.is_some() { "Update" } else { "Create" }
                    }
                }
            }
        },
        (Mode::Viewing, Some(about)) => rsx! {
            div { class: "about-preview",
                img { class: "admin-thumb", src: "{about.profile_image}", alt: "{about.name}" }
                div {
                    h4 { "{about.name}" }
                    p { class: "muted", "{about.email} · {about.location}" }
                    p { class: "clamp", "{about.bio}" }
                    p { "Experience: {about.experience}" }
                }
            }
        },
        (Mode::Viewing, None) => rsx! {
            p { class: "muted", "No about content yet." }
        },
    };

    rsx! {
        section { class: "admin-panel",
            div { class: "admin-panel-header",
                h3 { "About" }
                if let Some(about) = editable {
                    button {
                        class: "btn",
                        onclick: move |_| {
                            form.set(AboutForm::from_about(&about));
                            mode.set(Mode::edit(about.id()));
                        },
                        Icon { icon: FaPen, width: 12, height: 12 }
                        " Edit"
                    }
                }
            }
            {body}
        }
    }
}
