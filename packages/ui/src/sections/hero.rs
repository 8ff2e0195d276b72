use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero-glow hero-glow-teal" }
            div { class: "hero-glow hero-glow-purple" }
            div { class: "container hero-body",
                span { class: "hero-kicker", "Hello, welcome to my portfolio" }
                h1 { class: "hero-title", "Full-Stack Developer" }
                h2 { class: "hero-subtitle",
                    span { "I build " }
                    span { class: "accent", "amazing web experiences" }
                }
                p { class: "hero-text",
                    "I enjoy building responsive, user-friendly web applications and dependable backend systems, "
                    "with a soft spot for automation and cloud deployment."
                }
                div { class: "hero-actions",
                    a { class: "btn btn-lg", href: "#projects", "View My Work" }
                    a { class: "btn btn-lg btn-outline", href: "#contact", "Contact Me" }
                }
            }
        }
    }
}
