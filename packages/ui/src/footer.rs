use dioxus::prelude::*;

use crate::icons::{FaEnvelope, FaGithub, FaLinkedin};
use crate::Icon;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container footer-inner",
                p { class: "muted", "Built with Rust and Dioxus." }
                div { class: "footer-links",
                    a { href: "https://github.com", target: "_blank", rel: "noopener noreferrer", aria_label: "GitHub",
                        Icon { icon: FaGithub, width: 18, height: 18 }
                    }
                    a { href: "https://www.linkedin.com", target: "_blank", rel: "noopener noreferrer", aria_label: "LinkedIn",
                        Icon { icon: FaLinkedin, width: 18, height: 18 }
                    }
                    a { href: "#contact", aria_label: "Contact",
                        Icon { icon: FaEnvelope, width: 18, height: 18 }
                    }
                }
            }
        }
    }
}
