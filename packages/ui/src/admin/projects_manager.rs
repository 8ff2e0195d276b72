use content::{Mode, Project, Record};
use dioxus::prelude::*;
use uuid::Uuid;

use super::forms::ProjectForm;
use crate::api_store::content;
use crate::icons::{FaPen, FaPlus, FaTrash};
use crate::load::{use_load, Load};
use crate::toasts::Toasts;
use crate::views::{confirm, ErrorText, Field, ModalOverlay, Spinner};
use crate::Icon;

const NOUN: &str = "Project";

#[component]
pub fn ProjectsManager(toasts: Toasts) -> Element {
    let mut toasts = toasts;
    let mut loader = use_load(|| async { content().projects_newest_first().await });
    let mut mode = use_signal(|| Mode::Viewing);
    let mut form = use_signal(ProjectForm::default);

    let open_create = move |_: MouseEvent| {
        form.set(ProjectForm::default());
        mode.set(Mode::create());
    };
    let mut close = move || {
        mode.set(Mode::Viewing);
        form.set(ProjectForm::default());
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let Some(op) = mode().plan(form().to_draft()) else {
                return;
            };
            let result = content().apply::<Project>(&op).await;
            mode.set(mode().after_write(result.is_ok()));
            match result {
                Ok(_) => {
                    toasts.success(&op.success_notice(NOUN));
                    form.set(Default::default());
                    loader.reload();
                }
                Err(e) => {
                    tracing::error!("Error saving project: {}", e);
                    toasts.error(&op.failure_notice(NOUN));
                }
            }
        }
    };

    let remove = move |id: Uuid| async move {
        let confirmed = confirm("Are you sure you want to delete this project?");
        match content().delete_confirmed::<Project>(id, confirmed).await {
            Ok(true) => {
                toasts.success("Project deleted successfully");
                loader.reload();
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Error deleting project: {}", e);
                toasts.error("Failed to delete project");
            }
        }
    };

    let list = match loader.state() {
        Load::Loading => rsx! { Spinner {} },
        Load::Failed(message) => rsx! { ErrorText { message } },
        Load::Ready(projects) if projects.is_empty() => rsx! {
            p { class: "muted", "No projects yet." }
        },
        Load::Ready(projects) => rsx! {
            div { class: "admin-grid",
                for project in projects {
                    div { key: "{project.id}", class: "card admin-card",
                        img { class: "admin-thumb", src: "{project.image}", alt: "{project.title}" }
                        h4 { "{project.title}" }
                        p { class: "clamp muted", "{project.description}" }
                        div { class: "tag-list",
                            for tag in project.tags.iter() {
                                span { class: "tag", "{tag}" }
                            }
                        }
                        div { class: "admin-actions",
                            button {
                                class: "btn btn-ghost",
                                onclick: {
                                    let project = project.clone();
                                    move |_| {
                                        form.set(ProjectForm::from_project(&project));
                                        mode.set(Mode::edit(project.id()));
                                    }
                                },
                                Icon { icon: FaPen, width: 12, height: 12 }
                                " Edit"
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: {
                                    let id = project.id;
                                    move |_| remove(id)
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
                                " Delete"
                            }
                        }
                    }
                }
            }
        },
    };

    let editing = mode();
    rsx! {
        section { class: "admin-panel",
            div { class: "admin-panel-header",
                h3 { "Projects" }
                button { class: "btn", onclick: open_create,
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add Project"
                }
            }
            {list}
            if editing.is_editing() {
                ModalOverlay { on_close: move |_| close(),
                    form { class: "admin-form", onsubmit: submit,
                        h3 {
                            if editing.target().is_some() { "Edit Project" } else { "Add New Project" }
                        }
                        Field {
                            label: "Title",
                            value: form.read().title.clone(),
                            oninput: move |v| form.write().title = v,
                        }
                        Field {
                            label: "Description",
                            multiline: true,
                            value: form.read().description.clone(),
                            oninput: move |v| form.write().description = v,
                        }
                        Field {
                            label: "Image URL",
                            kind: "url",
                            value: form.read().image.clone(),
                            oninput: move |v| form.write().image = v,
                        }
                        Field {
                            label: "Tags (comma-separated)",
                            value: form.read().tags.clone(),
                            oninput: move |v| form.write().tags = v,
                        }
                        Field {
                            label: "GitHub URL",
                            kind: "url",
                            required: false,
                            value: form.read().github.clone(),
                            oninput: move |v| form.write().github = v,
                        }
                        Field {
                            label: "Live URL",
                            kind: "url",
                            required: false,
                            value: form.read().live_url.clone(),
                            oninput: move |v| form.write().live_url = v,
                        }
                        div { class: "admin-actions",
                            button { class: "btn btn-ghost", r#type: "button", onclick: move |_| close(), "Cancel" }
                            button { class: "btn", r#type: "submit",
                                if editing.target().is_some() { "Update" } else { "Create" }
                            }
                        }
                    }
                }
            }
        }
    }
}
