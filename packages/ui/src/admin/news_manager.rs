use content::{Mode, NewsItem, Record};
use dioxus::prelude::*;
use uuid::Uuid;

use super::forms::NewsForm;
use crate::api_store::content;
use crate::icons::{FaArrowUpRightFromSquare, FaPen, FaPlus, FaTrash};
use crate::load::{use_load, Load};
use crate::toasts::Toasts;
use crate::views::{confirm, ErrorText, Field, ModalOverlay, Spinner};
use crate::Icon;

const NOUN: &str = "News";

#[component]
pub fn NewsManager(toasts: Toasts) -> Element {
    let mut toasts = toasts;
    let mut loader = use_load(|| async { content().news().await });
    let mut mode = use_signal(|| Mode::Viewing);
    let mut form = use_signal(NewsForm::default);

    let mut close = move || {
        mode.set(Mode::Viewing);
        form.set(NewsForm::default());
    };

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        async move {
            let Some(op) = mode().plan(form().to_draft()) else {
                return;
            };
            let result = content().apply::<NewsItem>(&op).await;
            mode.set(mode().after_write(result.is_ok()));
            match result {
                Ok(_) => {
                    toasts.success(&op.success_notice(NOUN));
                    form.set(Default::default());
                    loader.reload();
                }
                Err(e) => {
                    tracing::error!("Error saving news: {}", e);
                    toasts.error(&op.failure_notice(NOUN));
                }
            }
        }
    };

    let remove = move |id: Uuid| async move {
        let confirmed = confirm("Are you sure you want to delete this news item?");
        match content().delete_confirmed::<NewsItem>(id, confirmed).await {
            Ok(true) => {
                toasts.success("News deleted successfully");
                loader.reload();
            }
            Ok(false) => {}
            Err(e) => {
                tracing::error!("Error deleting news: {}", e);
                toasts.error("Failed to delete news");
            }
        }
    };

    let list = match loader.state() {
        Load::Loading => rsx! { Spinner {} },
        Load::Failed(message) => rsx! { ErrorText { message } },
        Load::Ready(items) if items.is_empty() => rsx! {
            p { class: "muted", "No news items yet." }
        },
        Load::Ready(items) => rsx! {
            div { class: "admin-list",
                for item in items {
                    div { key: "{item.id}", class: "card admin-row",
                        img { class: "admin-thumb", src: "{item.image_url}", alt: "{item.title}" }
                        div { class: "admin-row-body",
                            h4 { "{item.title}" }
                            p { class: "clamp muted", "{item.description}" }
                            p { class: "muted",
                                "{item.source} · "
                                {item.published_at.format("%b %-d, %Y").to_string()}
                                " "
                                a { href: "{item.url}", target: "_blank", rel: "noopener noreferrer",
                                    Icon { icon: FaArrowUpRightFromSquare, width: 10, height: 10 }
                                }
                            }
                        }
                        div { class: "admin-actions",
                            button {
                                class: "btn btn-ghost",
                                onclick: {
                                    let item = item.clone();
                                    move |_| {
                                        form.set(NewsForm::from_item(&item));
                                        mode.set(Mode::edit(item.id()));
                                    }
                                },
                                Icon { icon: FaPen, width: 12, height: 12 }
                            }
                            button {
                                class: "btn btn-danger",
                                onclick: {
                                    let id = item.id;
                                    move |_| remove(id)
                                },
                                Icon { icon: FaTrash, width: 12, height: 12 }
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
                h3 { "Tech News" }
                button {
                    class: "btn",
                    onclick: move |_| {
                        form.set(NewsForm::default());
                        mode.set(Mode::create());
                    },
                    Icon { icon: FaPlus, width: 12, height: 12 }
                    " Add News"
                }
            }
            {list}
            if editing.is_editing() {
                ModalOverlay { on_close: move |_| close(),
                    form { class: "admin-form", onsubmit: submit,
                        h3 {
                            if editing.target().is_some() { "Edit News" } else { "Add News" }
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
                            label: "Article URL",
                            kind: "url",
                            value: form.read().url.clone(),
                            oninput: move |v| form.write().url = v,
                        }
                        Field {
                            label: "Source",
                            value: form.read().source.clone(),
                            oninput: move |v| form.write().source = v,
                        }
                        Field {
                            label: "Image URL",
                            kind: "url",
                            value: form.read().image_url.clone(),
                            oninput: move |v| form.write().image_url = v,
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
