use content::filter::{self, ALL};
use content::Project;
use dioxus::prelude::*;
use uuid::Uuid;

use crate::api_store::content;
use crate::icons::FaArrowUpRightFromSquare;
use crate::load::{use_load, Load};
use crate::views::{ErrorText, SectionTitle, Spinner};
use crate::Icon;

#[component]
pub fn ProjectCard(project: Project, on_open: EventHandler<Uuid>) -> Element {
    let id = project.id;
    rsx! {
        div {
            class: "project-card",
            onclick: move |_| on_open.call(id),
            img { class: "project-card-image", src: "{project.image}", alt: "{project.title}" }
            div { class: "project-card-body",
                h3 { "{project.title}" }
                p { class: "clamp", "{project.description}" }
                div { class: "tag-list",
                    for tag in project.tags.iter() {
                        span { class: "tag", "{tag}" }
                    }
                }
                div { class: "project-links",
                    if let Some(github) = project.github.as_ref() {
                        a {
                            href: "{github}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                            "Code"
                        }
                    }
                    if let Some(live) = project.live_url.as_ref() {
                        a {
                            href: "{live}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                            Icon { icon: FaArrowUpRightFromSquare, width: 12, height: 12 }
                            " Live"
                        }
                    }
                }
            }
        }
    }
}

/// Public projects strip with client-side tag filtering.
#[component]
pub fn Projects(on_open: EventHandler<Uuid>) -> Element {
    let loader = use_load(|| async { content().projects().await });
    let mut category = use_signal(|| ALL.to_string());

    let body = match loader.state() {
        Load::Loading => rsx! { Spinner {} },
        Load::Failed(message) => rsx! { ErrorText { message } },
        Load::Ready(projects) => {
            let selected = category();
            let shown: Vec<Project> = filter::filter_projects(&projects, &selected)
                .into_iter()
                .cloned()
                .collect();
            let strip = filter::marquee(&shown);
            rsx! {
                div { class: "category-bar",
                    for name in filter::categories(&projects) {
                        button {
                            key: "{name}",
                            class: if name == selected { "chip chip-active" } else { "chip" },
                            onclick: {
                                let name = name.clone();
                                move |_| category.set(name.clone())
                            },
                            "{filter::label(&name)}"
                        }
                    }
                }
                if shown.is_empty() {
                    p { class: "muted", "No projects found in this category." }
                } else {
                    div { class: "marquee",
                        div { class: "marquee-track",
                            for (index, project) in strip.into_iter().enumerate() {
                                ProjectCard { key: "{index}", project, on_open }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { id: "projects", class: "section",
            div { class: "container",
                SectionTitle {
                    title: "Featured Projects",
                    subtitle: "A selection of recent work. Pick a tag to narrow it down.",
                }
                {body}
            }
        }
    }
}
