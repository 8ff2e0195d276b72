use content::About as AboutContent;
use dioxus::prelude::*;

use crate::api_store::content;
use crate::icons::FaFileArrowDown;
use crate::load::{use_load, Load};
use crate::toasts::Toasts;
use crate::views::{ErrorText, SectionTitle, Spinner};
use crate::Icon;

async fn load_about() -> Result<AboutContent, String> {
    match content().about().await {
        Ok(Some(about)) => Ok(about),
        Ok(None) => Err("About content has not been published yet.".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[component]
pub fn About(toasts: Toasts) -> Element {
    let mut toasts = toasts;
    let loader = use_load(load_about);

    let body = match loader.state() {
        Load::Loading => rsx! { Spinner {} },
        Load::Failed(message) => rsx! { ErrorText { message } },
        Load::Ready(about) => {
            let cv_url = about.cv_url.clone();
            let paragraphs: Vec<String> = about.bio_paragraphs().into_iter().map(str::to_string).collect();
            rsx! {
                div { class: "about",
                    img { class: "about-image", src: "{about.profile_image}", alt: "{about.name}" }
                    div { class: "about-text",
                        h3 { "{about.name}" }
                        p { class: "muted", "{about.location} · {about.email}" }
                        for (index, paragraph) in paragraphs.into_iter().enumerate() {
                            p { key: "{index}", "{paragraph}" }
                        }
                        div { class: "about-experience",
                            span { class: "muted", "Experience" }
                            strong { "{about.experience}" }
                        }
                        button {
                            class: "btn",
                            onclick: move |_| match cv_url.as_deref() {
                                Some(url) => open_in_new_tab(url),
                                None => toasts.error("CV is not available"),
                            },
                            Icon { icon: FaFileArrowDown, width: 14, height: 14 }
                            " Download CV"
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { id: "about", class: "section section-alt",
            div { class: "container",
                SectionTitle { title: "About Me", subtitle: "A little background." }
                {body}
            }
        }
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(url, "_blank");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = url;
}
