use content::{Project, StoreError};
use dioxus::prelude::*;
use uuid::Uuid;

use crate::api_store::content;
use crate::icons::FaArrowLeft;
use crate::load::{use_load, Load};
use crate::views::{ErrorText, Spinner};
use crate::Icon;

/// `Ok(None)` when the id is malformed or no such project exists.
async fn load_project(id: Option<Uuid>) -> Result<Option<Project>, StoreError> {
    let Some(id) = id else {
        return Ok(None);
    };
    match content().project(id).await {
        Ok(project) => Ok(Some(project)),
        Err(StoreError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Full page for a single project.
#[component]
pub fn ProjectDetailsView(id: Option<Uuid>, on_back: EventHandler<()>) -> Element {
    let loader = use_load(use_reactive!(|(id,)| load_project(id)));

    let body = match loader.state() {
        Load::Loading => rsx! { Spinner {} },
        Load::Failed(message) => rsx! { ErrorText { message } },
        Load::Ready(None) => rsx! {
            div { class: "not-found",
                h2 { "Project not found" }
            }
        },
        Load::Ready(Some(project)) => rsx! {
            article { class: "project-details",
                img { class: "project-details-image", src: "{project.image}", alt: "{project.title}" }
                h1 { "{project.title}" }
                div { class: "tag-list",
                    for tag in project.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
                p { class: "project-details-description", "{project.description}" }
                div { class: "project-links",
                    if let Some(github) = project.github.as_ref() {
                        a { class: "btn btn-outline", href: "{github}", target: "_blank", rel: "noopener noreferrer", "View Code" }
                    }
                    if let Some(live) = project.live_url.as_ref() {
                        a { class: "btn", href: "{live}", target: "_blank", rel: "noopener noreferrer", "Live Demo" }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "page",
            button {
                class: "btn btn-ghost back-button",
                onclick: move |_| on_back.call(()),
                Icon { icon: FaArrowLeft, width: 14, height: 14 }
                " Back to Projects"
            }
            {body}
        }
    }
}
